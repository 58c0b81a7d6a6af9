//! Defines the app level error type and its conversion to JSON API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required text field was empty or contained only whitespace.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A record amount was negative or not a finite number.
    #[error("amount must be a non-negative number, got {0}")]
    InvalidAmount(f64),

    /// The string used to create a user was not a valid email address.
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    /// The password used to create a user was shorter than the minimum length.
    #[error("password must be at least {0} characters long")]
    PasswordTooShort(usize),

    /// The email used to create a user is already in use. The client should
    /// try again with a different email address.
    #[error("the email is already in use")]
    DuplicateEmail,

    /// The user provided an email/password combination that does not match a
    /// registered user. The same error is returned for an unknown email and a
    /// wrong password so that clients cannot probe for registered addresses.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The requester does not own the record they tried to modify.
    #[error("not authorized")]
    Unauthorized,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unexpected error occurred with the underlying hashing library.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// An auth token could not be created for a signed-in user.
    #[error("could not create auth token")]
    TokenCreation,

    /// A spreadsheet report could not be encoded.
    #[error("could not encode report: {0}")]
    ReportError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl From<bcrypt::BcryptError> for Error {
    fn from(value: bcrypt::BcryptError) -> Self {
        Error::HashingError(value.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        Error::ReportError(value.to_string())
    }
}

impl Error {
    /// The HTTP status code the error maps to.
    ///
    /// Validation failures map to 400. Ownership mismatches and bad
    /// credentials map to 401 and missing records to 404, mirroring the
    /// distinction the delete endpoints rely on.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::EmptyField(_)
            | Error::InvalidAmount(_)
            | Error::InvalidEmail(_)
            | Error::PasswordTooShort(_)
            | Error::DuplicateEmail => StatusCode::BAD_REQUEST,
            Error::InvalidCredentials | Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::HashingError(_)
            | Error::TokenCreation
            | Error::ReportError(_)
            | Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("An unexpected error occurred: {self}");
        }

        (status_code, ApiResponse::failure(self.to_string())).into_response()
    }
}
