//! Implements a SQLite backed income store.
use std::{ops::RangeInclusive, sync::Arc, sync::Mutex};

use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::{IncomeId, UserId},
    db::{CreateTable, MapRow},
    models::{Income, NewIncome},
    stores::IncomeStore,
};

/// Stores income records in a SQLite database.
///
/// Records reference the [User](crate::models::User) model, so the user
/// table must be set up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteIncomeStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteIncomeStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl IncomeStore for SQLiteIncomeStore {
    /// Create a new income record in the database.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyField] if the source is empty after trimming,
    /// - [Error::InvalidAmount] if the amount is negative or not finite,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&mut self, user_id: UserId, new_income: NewIncome) -> Result<Income, Error> {
        let new_income = new_income.normalized()?;
        let date = new_income.date.unwrap_or_else(|| Utc::now().date_naive());
        let created_at = Utc::now();

        let income = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO income (user_id, source, amount, date, icon, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 RETURNING id, user_id, source, amount, date, icon, created_at",
            )?
            .query_row(
                (
                    user_id,
                    &new_income.source,
                    new_income.amount,
                    date,
                    new_income.icon.unwrap_or_default(),
                    created_at,
                ),
                Self::map_row,
            )?;

        Ok(income)
    }

    /// Retrieve an income record in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a [Error::NotFound] if `id` does not refer
    /// to a valid income record, or [Error::SqlError] if there is some other
    /// SQL error.
    fn get(&self, id: IncomeId) -> Result<Income, Error> {
        let income = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, source, amount, date, icon, created_at
                 FROM income WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(income)
    }

    /// Retrieve all of a user's income records, latest first.
    ///
    /// Ties on the date keep insertion order.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Income>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, source, amount, date, icon, created_at
                 FROM income WHERE user_id = :user_id
                 ORDER BY date DESC, id ASC",
            )?
            .query_map(&[(":user_id", &user_id)], Self::map_row)?
            .map(|maybe_income| maybe_income.map_err(Error::SqlError))
            .collect()
    }

    /// Retrieve a user's income records within `date_range`, oldest first.
    ///
    /// Both range bounds are inclusive.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn list_by_owner_in_range(
        &self,
        user_id: UserId,
        date_range: RangeInclusive<NaiveDate>,
    ) -> Result<Vec<Income>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, source, amount, date, icon, created_at
                 FROM income
                 WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                 ORDER BY date ASC, id ASC",
            )?
            .query_map(
                (user_id, date_range.start(), date_range.end()),
                Self::map_row,
            )?
            .map(|maybe_income| maybe_income.map_err(Error::SqlError))
            .collect()
    }

    /// Delete the income record with the given `id`.
    ///
    /// # Errors
    /// This function will return a [Error::NotFound] if `id` does not refer
    /// to a valid income record, or [Error::SqlError] if there is some other
    /// SQL error.
    fn delete(&mut self, id: IncomeId) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM income WHERE id = :id", &[(":id", &id)])?;

        match rows_affected {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }
}

impl CreateTable for SQLiteIncomeStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS income (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    user_id INTEGER NOT NULL,
                    source TEXT NOT NULL,
                    amount REAL NOT NULL,
                    date TEXT NOT NULL,
                    icon TEXT NOT NULL DEFAULT '',
                    created_at TEXT NOT NULL,
                    FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                    )",
            (),
        )?;

        // The list queries always filter by owner and sort by date.
        connection.execute(
            "CREATE INDEX IF NOT EXISTS income_user_date ON income (user_id, date DESC)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteIncomeStore {
    type ReturnType = Income;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Income {
            id: row.get(offset)?,
            user_id: row.get(offset + 1)?,
            source: row.get(offset + 2)?,
            amount: row.get(offset + 3)?,
            date: row.get(offset + 4)?,
            icon: row.get(offset + 5)?,
            created_at: row.get(offset + 6)?,
        })
    }
}

#[cfg(test)]
mod sqlite_income_store_tests {
    use chrono::{Duration, NaiveDate, Utc};
    use rusqlite::Connection;

    use crate::{
        Error,
        database_id::{IncomeId, UserId},
        models::NewIncome,
        stores::{IncomeStore, UserStore, sqlite::create_app_state, sqlite::SQLAppState},
        test_utils::test_new_user,
    };

    fn get_app_state() -> (SQLAppState, UserId) {
        let conn = Connection::open_in_memory().unwrap();
        let mut state = create_app_state(conn, "test-secret").unwrap();
        let user = state
            .user_store
            .create(test_new_user("income@test.com"))
            .unwrap();

        (state, user.id)
    }

    fn new_income(source: &str, amount: f64, date: Option<NaiveDate>) -> NewIncome {
        NewIncome {
            source: source.to_owned(),
            amount,
            date,
            icon: None,
        }
    }

    #[test]
    fn create_succeeds_and_round_trips() {
        let (mut state, user_id) = get_app_state();
        let date = Utc::now().date_naive() - Duration::days(3);

        let income = state
            .income_store
            .create(user_id, new_income("Salary", 1000.0, Some(date)))
            .unwrap();

        assert_eq!(income.user_id, user_id);
        assert_eq!(income.source, "Salary");
        assert_eq!(income.amount, 1000.0);
        assert_eq!(income.date, date);
        assert_eq!(income.icon, "");

        let listed = state.income_store.list_by_owner(user_id).unwrap();
        assert_eq!(listed, vec![income]);
    }

    #[test]
    fn create_defaults_date_to_today() {
        let (mut state, user_id) = get_app_state();

        let income = state
            .income_store
            .create(user_id, new_income("Salary", 1.0, None))
            .unwrap();

        assert_eq!(income.date, Utc::now().date_naive());
    }

    #[test]
    fn create_fails_on_negative_amount() {
        let (mut state, user_id) = get_app_state();

        let result = state
            .income_store
            .create(user_id, new_income("Salary", -10.0, None));

        assert_eq!(result, Err(Error::InvalidAmount(-10.0)));
    }

    #[test]
    fn create_fails_on_blank_source() {
        let (mut state, user_id) = get_app_state();

        let result = state.income_store.create(user_id, new_income("  ", 1.0, None));

        assert_eq!(result, Err(Error::EmptyField("source")));
    }

    #[test]
    fn list_by_owner_sorts_by_date_descending() {
        let (mut state, user_id) = get_app_state();
        let today = Utc::now().date_naive();

        for days_ago in [5, 1, 3] {
            state
                .income_store
                .create(
                    user_id,
                    new_income("Salary", 1.0, Some(today - Duration::days(days_ago))),
                )
                .unwrap();
        }

        let dates: Vec<_> = state
            .income_store
            .list_by_owner(user_id)
            .unwrap()
            .into_iter()
            .map(|income| income.date)
            .collect();

        assert_eq!(
            dates,
            vec![
                today - Duration::days(1),
                today - Duration::days(3),
                today - Duration::days(5),
            ]
        );
    }

    #[test]
    fn list_by_owner_does_not_leak_other_users_records() {
        let (mut state, user_id) = get_app_state();
        let other_user = state
            .user_store
            .create(test_new_user("other@test.com"))
            .unwrap();

        state
            .income_store
            .create(other_user.id, new_income("Salary", 999.0, None))
            .unwrap();

        assert!(state.income_store.list_by_owner(user_id).unwrap().is_empty());
    }

    #[test]
    fn range_query_has_inclusive_bounds_and_ascending_order() {
        let (mut state, user_id) = get_app_state();
        let today = Utc::now().date_naive();
        let start = today - Duration::days(60);

        // One record on each boundary, one inside, two outside.
        for days_ago in [61, 60, 30, 0, -1] {
            state
                .income_store
                .create(
                    user_id,
                    new_income("Salary", 1.0, Some(today - Duration::days(days_ago))),
                )
                .unwrap();
        }

        let dates: Vec<_> = state
            .income_store
            .list_by_owner_in_range(user_id, start..=today)
            .unwrap()
            .into_iter()
            .map(|income| income.date)
            .collect();

        assert_eq!(dates, vec![start, today - Duration::days(30), today]);
    }

    #[test]
    fn delete_removes_record() {
        let (mut state, user_id) = get_app_state();
        let income = state
            .income_store
            .create(user_id, new_income("Salary", 1.0, None))
            .unwrap();

        state.income_store.delete(income.id).unwrap();

        assert_eq!(state.income_store.get(income.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_record_returns_not_found() {
        let (mut state, _) = get_app_state();

        let result = state.income_store.delete(IncomeId::new(999));

        assert_eq!(result, Err(Error::NotFound));
    }
}
