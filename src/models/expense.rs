//! This file defines expense records, i.e. events where money was spent.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{ExpenseId, UserId},
    models::{validate_amount, validate_label},
};

/// A single expense record belonging to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The record's ID in the database.
    pub id: ExpenseId,
    /// The user that created the record. Never changes.
    pub user_id: UserId,
    /// What the money was spent on, e.g. "Food".
    pub category: String,
    /// The amount of money spent. Always non-negative.
    pub amount: f64,
    /// The date the expense is attributed to.
    pub date: NaiveDate,
    /// A short display token shown next to the record, or the empty string.
    pub icon: String,
    /// Free text describing the purchase, or the empty string.
    pub description: String,
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
}

/// The client-supplied fields for creating an expense record.
///
/// The owner is never part of this payload; it is taken from the caller's
/// resolved identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    /// Defaults to today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewExpense {
    /// Validate the payload, trimming the category label and description.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyField] if the category is empty after trimming,
    /// or [Error::InvalidAmount] if the amount is negative or not finite.
    pub fn normalized(self) -> Result<Self, Error> {
        Ok(Self {
            category: validate_label("category", &self.category)?,
            amount: validate_amount(self.amount)?,
            date: self.date,
            icon: self.icon,
            description: self.description.map(|d| d.trim().to_owned()),
        })
    }
}
