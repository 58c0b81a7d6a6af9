//! User authentication: signup, login, current-user resolution and the JWT
//! plumbing behind the bearer-token protected endpoints.

mod endpoints;
mod token;

pub use endpoints::{
    get_me_endpoint, log_in_endpoint, sign_up_endpoint, update_profile_image_endpoint,
};
pub use token::{AuthError, Claims, JwtKeys, encode_jwt};
