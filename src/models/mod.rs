//! This module defines the domain data types.

pub use expense::{Expense, NewExpense};
pub use income::{Income, NewIncome};
pub use password::{MIN_PASSWORD_LENGTH, PasswordHash};
pub use user::{NewUser, User, UserProfile};

mod expense;
mod income;
mod password;
mod user;

use crate::Error;

/// Trim a required text field, rejecting values that are empty afterwards.
///
/// `field` names the offending field in the error so that clients get a
/// useful validation message.
pub(crate) fn validate_label(field: &'static str, value: &str) -> Result<String, Error> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        Err(Error::EmptyField(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Reject amounts that are negative, NaN or infinite.
pub(crate) fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount))
    }
}

#[cfg(test)]
mod validation_tests {
    use super::{validate_amount, validate_label};
    use crate::Error;

    #[test]
    fn label_is_trimmed() {
        assert_eq!(validate_label("source", "  Salary "), Ok("Salary".to_owned()));
    }

    #[test]
    fn whitespace_only_label_is_rejected() {
        assert_eq!(
            validate_label("category", "   "),
            Err(Error::EmptyField("category"))
        );
    }

    #[test]
    fn zero_amount_is_allowed() {
        assert_eq!(validate_amount(0.0), Ok(0.0));
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        assert_eq!(validate_amount(-0.01), Err(Error::InvalidAmount(-0.01)));
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }
}
