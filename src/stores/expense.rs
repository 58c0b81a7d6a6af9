//! Defines the expense store trait.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::{
    Error,
    database_id::{ExpenseId, UserId},
    models::{Expense, NewExpense},
};

/// Handles the creation, retrieval and deletion of expense records.
///
/// Records are only ever created and deleted; there is no update operation.
pub trait ExpenseStore {
    /// Create a new expense record owned by `user_id`.
    ///
    /// The attribution date defaults to today and the insertion timestamp to
    /// now.
    ///
    /// # Errors
    /// Returns a validation error ([Error::EmptyField] or
    /// [Error::InvalidAmount]) if the payload is invalid, or
    /// [Error::SqlError] for unexpected SQL errors.
    fn create(&mut self, user_id: UserId, new_expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve a single expense record by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to an expense record.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Retrieve all expense records owned by `user_id`, ordered by date
    /// descending with ties in insertion order.
    ///
    /// Returns an empty list if the user has no records.
    fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Expense>, Error>;

    /// Retrieve the expense records owned by `user_id` with dates within
    /// `date_range` (inclusive), ordered by date ascending.
    fn list_by_owner_in_range(
        &self,
        user_id: UserId,
        date_range: RangeInclusive<NaiveDate>,
    ) -> Result<Vec<Expense>, Error>;

    /// Delete the expense record with the given `id`.
    ///
    /// Callers must check ownership first; the store itself deletes
    /// unconditionally.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to an expense record.
    fn delete(&mut self, id: ExpenseId) -> Result<(), Error>;
}
