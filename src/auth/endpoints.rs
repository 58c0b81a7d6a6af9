//! Route handlers for signing up, logging in and managing the current user.

use std::str::FromStr;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    auth::{Claims, encode_jwt},
    models::{NewUser, PasswordHash, UserProfile, validate_label},
    response::ApiResponse,
    state::AuthState,
    stores::UserStore,
};

/// The payload for creating a new account.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// The payload for signing in to an existing account.
#[derive(Debug, Deserialize)]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

/// The payload for replacing the current user's avatar.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileImageRequest {
    pub profile_image_url: String,
}

/// The data returned by the signup and login endpoints.
#[derive(Debug, Serialize)]
pub struct AuthData {
    pub token: String,
    pub user: UserProfile,
}

/// A route handler for creating a new user.
///
/// Returns 201 with a fresh token on success, 400 if a field fails
/// validation or the email is already registered.
pub async fn sign_up_endpoint<U>(
    State(mut state): State<AuthState<U>>,
    Json(request): Json<SignUpRequest>,
) -> Result<impl IntoResponse, Error>
where
    U: UserStore + Clone + Send + Sync,
{
    let name = validate_label("name", &request.name)?;
    let email = EmailAddress::from_str(request.email.trim())
        .map_err(|_| Error::InvalidEmail(request.email.clone()))?;
    let password_hash =
        PasswordHash::from_raw_password(&request.password, PasswordHash::DEFAULT_COST)?;

    let user = state.user_store.create(NewUser {
        name,
        email,
        password_hash,
        profile_image_url: request.profile_image_url.unwrap_or_default(),
    })?;

    let token = encode_jwt(user.id, &state.jwt_keys.encoding)?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::with_data(AuthData {
            token,
            user: UserProfile::from(&user),
        }),
    ))
}

/// A route handler for signing in.
///
/// Responds with the same 401 for an unknown email and a wrong password so
/// that clients cannot probe for registered addresses.
pub async fn log_in_endpoint<U>(
    State(state): State<AuthState<U>>,
    Json(request): Json<LogInRequest>,
) -> Result<impl IntoResponse, Error>
where
    U: UserStore + Clone + Send + Sync,
{
    let email =
        EmailAddress::from_str(request.email.trim()).map_err(|_| Error::InvalidCredentials)?;

    let user = state.user_store.get_by_email(&email).map_err(|e| match e {
        Error::NotFound => Error::InvalidCredentials,
        e => e,
    })?;

    let password_is_correct = user.password_hash.verify(&request.password)?;

    if !password_is_correct {
        return Err(Error::InvalidCredentials);
    }

    let token = encode_jwt(user.id, &state.jwt_keys.encoding)?;

    Ok(ApiResponse::with_data(AuthData {
        token,
        user: UserProfile::from(&user),
    }))
}

/// A route handler for resolving the current user from their bearer token.
pub async fn get_me_endpoint<U>(
    State(state): State<AuthState<U>>,
    claims: Claims,
) -> Result<impl IntoResponse, Error>
where
    U: UserStore + Clone + Send + Sync,
{
    // A valid token whose user has disappeared is an auth failure, not a
    // missing resource.
    let user = state.user_store.get(claims.sub).map_err(|e| match e {
        Error::NotFound => Error::Unauthorized,
        e => e,
    })?;

    Ok(ApiResponse::with_data(UserProfile::from(&user)))
}

/// A route handler for replacing the current user's avatar URL.
pub async fn update_profile_image_endpoint<U>(
    State(mut state): State<AuthState<U>>,
    claims: Claims,
    Json(request): Json<UpdateProfileImageRequest>,
) -> Result<impl IntoResponse, Error>
where
    U: UserStore + Clone + Send + Sync,
{
    let user = state
        .user_store
        .update_profile_image(claims.sub, &request.profile_image_url)
        .map_err(|e| match e {
            Error::NotFound => Error::Unauthorized,
            e => e,
        })?;

    Ok(ApiResponse::with_data(UserProfile::from(&user)))
}
