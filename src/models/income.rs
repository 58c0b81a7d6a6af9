//! This file defines income records, i.e. events where money was earned.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{IncomeId, UserId},
    models::{validate_amount, validate_label},
};

/// A single income record belonging to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    /// The record's ID in the database.
    pub id: IncomeId,
    /// The user that created the record. Never changes.
    pub user_id: UserId,
    /// Where the money came from, e.g. "Salary".
    pub source: String,
    /// The amount of money earned. Always non-negative.
    pub amount: f64,
    /// The date the income is attributed to.
    pub date: NaiveDate,
    /// A short display token shown next to the record, or the empty string.
    pub icon: String,
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
}

/// The client-supplied fields for creating an income record.
///
/// The owner is never part of this payload; it is taken from the caller's
/// resolved identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub source: String,
    pub amount: f64,
    /// Defaults to today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl NewIncome {
    /// Validate the payload, trimming the source label.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyField] if the source is empty after trimming, or
    /// [Error::InvalidAmount] if the amount is negative or not finite.
    pub fn normalized(self) -> Result<Self, Error> {
        Ok(Self {
            source: validate_label("source", &self.source)?,
            amount: validate_amount(self.amount)?,
            date: self.date,
            icon: self.icon,
        })
    }
}
