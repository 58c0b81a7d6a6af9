//! Newtype wrappers for database row IDs.
//!
//! Income and expense records live in separate tables and their IDs are not
//! comparable with each other. Wrapping the raw integers in distinct types
//! lets the compiler enforce that.

use std::fmt::Display;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

/// The ID of a user of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

/// The ID of an income record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncomeId(i64);

/// The ID of an expense record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseId(i64);

macro_rules! impl_database_id {
    ($name:ident) => {
        impl $name {
            /// Wrap a raw database row ID.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// The underlying integer ID.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

impl_database_id!(UserId);
impl_database_id!(IncomeId);
impl_database_id!(ExpenseId);

#[cfg(test)]
mod database_id_tests {
    use super::{ExpenseId, IncomeId};

    #[test]
    fn serializes_as_plain_integer() {
        let id = IncomeId::new(42);

        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn deserializes_from_plain_integer() {
        let id: ExpenseId = serde_json::from_str("7").unwrap();

        assert_eq!(id, ExpenseId::new(7));
    }
}
