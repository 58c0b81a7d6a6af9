//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

pub mod expense;
pub mod income;
pub mod user;

pub use expense::SQLiteExpenseStore;
pub use income::SQLiteIncomeStore;
pub use user::SQLiteUserStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, state::AppState};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteIncomeStore, SQLiteExpenseStore, SQLiteUserStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the
/// domain models to the database.
pub fn create_app_state(db_connection: Connection, jwt_secret: &str) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(
        jwt_secret,
        SQLiteIncomeStore::new(connection.clone()),
        SQLiteExpenseStore::new(connection.clone()),
        SQLiteUserStore::new(connection),
    ))
}
