//! This file defines a user of the application and its supporting types.

use email_address::EmailAddress;
use serde::Serialize;

use crate::{database_id::UserId, models::PasswordHash};

/// A user of the application.
///
/// Users are referenced by income and expense records through their
/// [UserId]; the records themselves never embed user data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// The user's ID in the database.
    pub id: UserId,
    /// The user's display name.
    pub name: String,
    /// The email address the user signs in with. Unique.
    pub email: EmailAddress,
    /// The user's password hash.
    pub password_hash: PasswordHash,
    /// An URL pointing to the user's avatar, or the empty string.
    pub profile_image_url: String,
}

/// The fields needed to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub profile_image_url: String,
}

/// The client-facing view of a [User].
///
/// This is the only user shape that is ever serialized; the password hash
/// stays on the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub profile_image_url: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            profile_image_url: user.profile_image_url.clone(),
        }
    }
}
