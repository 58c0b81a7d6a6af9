//! Implements a SQLite backed user store.
use std::sync::{Arc, Mutex};

use email_address::EmailAddress;
use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::UserId,
    db::{CreateTable, MapRow},
    models::{NewUser, PasswordHash, User},
    stores::UserStore,
};

/// Handles the creation and retrieval of users in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteUserStore {
    /// Create a new user store.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl UserStore for SQLiteUserStore {
    /// Create and insert a new user into the database.
    ///
    /// # Panics
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    /// Returns [Error::DuplicateEmail] if the given email address is already
    /// in use, or [Error::SqlError] if an SQL related error occurred.
    fn create(&mut self, new_user: NewUser) -> Result<User, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO user (name, email, password, profile_image_url)
             VALUES (?1, ?2, ?3, ?4)",
            (
                &new_user.name,
                new_user.email.to_string(),
                new_user.password_hash.to_string(),
                &new_user.profile_image_url,
            ),
        )?;

        let id = UserId::new(connection.last_insert_rowid());

        Ok(User {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            profile_image_url: new_user.profile_image_url,
        })
    }

    /// Get the user from the database that has the specified `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no user with the specified `id`,
    /// or [Error::SqlError] if there are SQL related errors.
    fn get(&self, id: UserId) -> Result<User, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, name, email, password, profile_image_url
                 FROM user WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)
            .map_err(|e| e.into())
    }

    /// Get the user from the database that has the specified `email` address.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no user with the specified
    /// email, or [Error::SqlError] if there are SQL related errors.
    fn get_by_email(&self, email: &EmailAddress) -> Result<User, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, name, email, password, profile_image_url
                 FROM user WHERE email = :email",
            )?
            .query_row(&[(":email", &email.to_string())], Self::map_row)
            .map_err(|e| e.into())
    }

    /// Replace the profile image URL of the user with the specified `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no user with the specified `id`,
    /// or [Error::SqlError] if there are SQL related errors.
    fn update_profile_image(
        &mut self,
        id: UserId,
        profile_image_url: &str,
    ) -> Result<User, Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            "UPDATE user SET profile_image_url = ?1 WHERE id = ?2",
            (profile_image_url, id),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        self.get(id)
    }
}

impl CreateTable for SQLiteUserStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS user (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT UNIQUE NOT NULL,
                    password TEXT NOT NULL,
                    profile_image_url TEXT NOT NULL DEFAULT ''
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteUserStore {
    type ReturnType = User;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let raw_email: String = row.get(offset + 2)?;
        let raw_password_hash: String = row.get(offset + 3)?;

        Ok(User {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            email: EmailAddress::new_unchecked(raw_email),
            password_hash: PasswordHash::new_unchecked(&raw_password_hash),
            profile_image_url: row.get(offset + 4)?,
        })
    }
}
