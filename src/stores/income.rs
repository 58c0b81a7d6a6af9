//! Defines the income store trait.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::{
    Error,
    database_id::{IncomeId, UserId},
    models::{Income, NewIncome},
};

/// Handles the creation, retrieval and deletion of income records.
///
/// Records are only ever created and deleted; there is no update operation.
pub trait IncomeStore {
    /// Create a new income record owned by `user_id`.
    ///
    /// The attribution date defaults to today and the insertion timestamp to
    /// now.
    ///
    /// # Errors
    /// Returns a validation error ([Error::EmptyField] or
    /// [Error::InvalidAmount]) if the payload is invalid, or
    /// [Error::SqlError] for unexpected SQL errors.
    fn create(&mut self, user_id: UserId, new_income: NewIncome) -> Result<Income, Error>;

    /// Retrieve a single income record by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to an income record.
    fn get(&self, id: IncomeId) -> Result<Income, Error>;

    /// Retrieve all income records owned by `user_id`, ordered by date
    /// descending with ties in insertion order.
    ///
    /// Returns an empty list if the user has no records.
    fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Income>, Error>;

    /// Retrieve the income records owned by `user_id` with dates within
    /// `date_range` (inclusive), ordered by date ascending.
    fn list_by_owner_in_range(
        &self,
        user_id: UserId,
        date_range: RangeInclusive<NaiveDate>,
    ) -> Result<Vec<Income>, Error>;

    /// Delete the income record with the given `id`.
    ///
    /// Callers must check ownership first; the store itself deletes
    /// unconditionally.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to an income record.
    fn delete(&mut self, id: IncomeId) -> Result<(), Error>;
}
