//! Implements a SQLite backed expense store.
use std::{ops::RangeInclusive, sync::Arc, sync::Mutex};

use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::{ExpenseId, UserId},
    db::{CreateTable, MapRow},
    models::{Expense, NewExpense},
    stores::ExpenseStore,
};

/// Stores expense records in a SQLite database.
///
/// Records reference the [User](crate::models::User) model, so the user
/// table must be set up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    /// Create a new expense record in the database.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyField] if the category is empty after trimming,
    /// - [Error::InvalidAmount] if the amount is negative or not finite,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&mut self, user_id: UserId, new_expense: NewExpense) -> Result<Expense, Error> {
        let new_expense = new_expense.normalized()?;
        let date = new_expense.date.unwrap_or_else(|| Utc::now().date_naive());
        let created_at = Utc::now();

        let expense = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO expense (user_id, category, amount, date, icon, description, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING id, user_id, category, amount, date, icon, description, created_at",
            )?
            .query_row(
                (
                    user_id,
                    &new_expense.category,
                    new_expense.amount,
                    date,
                    new_expense.icon.unwrap_or_default(),
                    new_expense.description.unwrap_or_default(),
                    created_at,
                ),
                Self::map_row,
            )?;

        Ok(expense)
    }

    /// Retrieve an expense record in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a [Error::NotFound] if `id` does not refer
    /// to a valid expense record, or [Error::SqlError] if there is some
    /// other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, category, amount, date, icon, description, created_at
                 FROM expense WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(expense)
    }

    /// Retrieve all of a user's expense records, latest first.
    ///
    /// Ties on the date keep insertion order.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Expense>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, category, amount, date, icon, description, created_at
                 FROM expense WHERE user_id = :user_id
                 ORDER BY date DESC, id ASC",
            )?
            .query_map(&[(":user_id", &user_id)], Self::map_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::SqlError))
            .collect()
    }

    /// Retrieve a user's expense records within `date_range`, oldest first.
    ///
    /// Both range bounds are inclusive.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn list_by_owner_in_range(
        &self,
        user_id: UserId,
        date_range: RangeInclusive<NaiveDate>,
    ) -> Result<Vec<Expense>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, category, amount, date, icon, description, created_at
                 FROM expense
                 WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                 ORDER BY date ASC, id ASC",
            )?
            .query_map(
                (user_id, date_range.start(), date_range.end()),
                Self::map_row,
            )?
            .map(|maybe_expense| maybe_expense.map_err(Error::SqlError))
            .collect()
    }

    /// Delete the expense record with the given `id`.
    ///
    /// # Errors
    /// This function will return a [Error::NotFound] if `id` does not refer
    /// to a valid expense record, or [Error::SqlError] if there is some
    /// other SQL error.
    fn delete(&mut self, id: ExpenseId) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])?;

        match rows_affected {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }
}

impl CreateTable for SQLiteExpenseStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS expense (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    user_id INTEGER NOT NULL,
                    category TEXT NOT NULL,
                    amount REAL NOT NULL,
                    date TEXT NOT NULL,
                    icon TEXT NOT NULL DEFAULT '',
                    description TEXT NOT NULL DEFAULT '',
                    created_at TEXT NOT NULL,
                    FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                    )",
            (),
        )?;

        // The list queries always filter by owner and sort by date.
        connection.execute(
            "CREATE INDEX IF NOT EXISTS expense_user_date ON expense (user_id, date DESC)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteExpenseStore {
    type ReturnType = Expense;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Expense {
            id: row.get(offset)?,
            user_id: row.get(offset + 1)?,
            category: row.get(offset + 2)?,
            amount: row.get(offset + 3)?,
            date: row.get(offset + 4)?,
            icon: row.get(offset + 5)?,
            description: row.get(offset + 6)?,
            created_at: row.get(offset + 7)?,
        })
    }
}
