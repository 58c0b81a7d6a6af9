//! The ownership check that guards every record mutation.
//!
//! Every income and expense record belongs to exactly one user. Handlers
//! fetch the record first (a missing record surfaces as
//! [Error::NotFound](crate::Error::NotFound) before ownership is ever
//! considered), then call [authorize] before mutating.

use crate::{
    Error,
    database_id::UserId,
    models::{Expense, Income},
};

/// A record that belongs to a single user.
pub trait Owned {
    /// The ID of the user that owns the record.
    fn owner(&self) -> UserId;
}

impl Owned for Income {
    fn owner(&self) -> UserId {
        self.user_id
    }
}

impl Owned for Expense {
    fn owner(&self) -> UserId {
        self.user_id
    }
}

/// Permit the operation if `requester` owns `record`.
///
/// Pure decision with no side effects.
///
/// # Errors
/// Returns [Error::Unauthorized] if `requester` is not the record's owner.
pub fn authorize(record: &impl Owned, requester: UserId) -> Result<(), Error> {
    if record.owner() == requester {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}
