//! Defines the user store trait.

use email_address::EmailAddress;

use crate::{
    Error,
    database_id::UserId,
    models::{NewUser, User},
};

/// Handles the creation and retrieval of users.
pub trait UserStore {
    /// Create and insert a new user.
    ///
    /// # Errors
    /// Returns [Error::DuplicateEmail] if the email address is already in
    /// use, or [Error::SqlError] for unexpected SQL errors.
    fn create(&mut self, new_user: NewUser) -> Result<User, Error>;

    /// Get the user with the specified `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no such user exists.
    fn get(&self, id: UserId) -> Result<User, Error>;

    /// Get the user with the specified `email` address.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no such user exists.
    fn get_by_email(&self, email: &EmailAddress) -> Result<User, Error>;

    /// Replace the profile image URL of the user with the specified `id` and
    /// return the updated user.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no such user exists.
    fn update_profile_image(&mut self, id: UserId, profile_image_url: &str)
    -> Result<User, Error>;
}
