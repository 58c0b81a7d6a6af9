//! JSON Web Token creation, validation and the bearer-token extractor that
//! resolves the requesting user for protected endpoints.

use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::UserId, response::ApiResponse};

// Code in this module is adapted from
// https://github.com/tokio-rs/axum/blob/main/examples/jwt/src/main.rs

/// How long an issued token stays valid.
const TOKEN_LIFETIME_HOURS: i64 = 24;

/// The keys used for signing and verifying auth tokens.
#[derive(Clone)]
pub struct JwtKeys {
    /// The key for signing new tokens.
    pub encoding: EncodingKey,
    /// The key for verifying presented tokens.
    pub decoding: DecodingKey,
}

impl JwtKeys {
    /// Derive the signing and verifying keys from a shared `secret`.
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }
}

/// The contents of a JSON Web Token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The ID of the user the token was issued to.
    pub sub: UserId,
    /// The time the token was issued.
    pub iat: usize,
    /// The expiry time of the token.
    pub exp: usize,
}

impl<S> FromRequestParts<S> for Claims
where
    JwtKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AuthError::MissingToken)?;

        let keys = JwtKeys::from_ref(state);
        let token_data = decode_jwt(bearer.token(), &keys.decoding)?;

        Ok(token_data.claims)
    }
}

/// The ways resolving a bearer token can fail.
#[derive(Debug, PartialEq)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    MissingToken,
    /// The presented token was malformed, tampered with or expired.
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken => "Not authorized, no token",
            AuthError::InvalidToken => "Not authorized, token failed",
        };

        (
            axum::http::StatusCode::UNAUTHORIZED,
            ApiResponse::failure(message),
        )
            .into_response()
    }
}

/// Issue a token for `user_id`, valid for 24 hours.
///
/// # Errors
/// Returns [Error::TokenCreation] if the token could not be signed.
pub fn encode_jwt(user_id: UserId, encoding_key: &EncodingKey) -> Result<String, Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp() as usize,
    };

    encode(&Header::default(), &claims, encoding_key).map_err(|_| Error::TokenCreation)
}

fn decode_jwt(token: &str, decoding_key: &DecodingKey) -> Result<TokenData<Claims>, AuthError> {
    decode(token, decoding_key, &Validation::default()).map_err(|_| AuthError::InvalidToken)
}
