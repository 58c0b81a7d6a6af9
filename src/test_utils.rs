//! Helpers shared by the endpoint and store tests.

use std::str::FromStr;

use axum_test::TestServer;
use chrono::NaiveDate;
use email_address::EmailAddress;
use rusqlite::Connection;
use serde_json::json;

use crate::{
    build_router,
    database_id::UserId,
    models::{NewUser, PasswordHash},
    stores::sqlite::create_app_state,
};

/// The password used by every test account. Bcrypt with the default cost is
/// deliberately slow, so signup helpers go through the real endpoint only
/// once per test user.
pub(crate) const TEST_PASSWORD: &str = "averysafeandsecurepassword";

/// A test server over a fresh in-memory database.
pub(crate) fn get_test_server() -> TestServer {
    let conn = Connection::open_in_memory().expect("Could not open database in memory.");
    let state = create_app_state(conn, "42").expect("Could not initialize database.");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

/// A [NewUser] with the given email for store-level tests.
pub(crate) fn test_new_user(email: &str) -> NewUser {
    NewUser {
        name: "Test User".to_owned(),
        email: EmailAddress::from_str(email).unwrap(),
        password_hash: PasswordHash::new_unchecked("notarealhash"),
        profile_image_url: String::new(),
    }
}

/// Sign up a user through the API and return their bearer token and ID.
pub(crate) async fn sign_up_test_user(server: &TestServer, email: &str) -> (String, UserId) {
    let response = server
        .post(crate::endpoints::SIGN_UP)
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .await;

    let body = response.json::<serde_json::Value>();
    let token = body["data"]["token"]
        .as_str()
        .expect("signup response should contain a token")
        .to_owned();
    let user_id = UserId::new(
        body["data"]["user"]["id"]
            .as_i64()
            .expect("signup response should contain the user id"),
    );

    (token, user_id)
}

/// Create an income record through the API and return its ID.
pub(crate) async fn create_test_income(
    server: &TestServer,
    token: &str,
    source: &str,
    amount: f64,
    date: NaiveDate,
) -> i64 {
    let body = server
        .post(crate::endpoints::INCOME)
        .authorization_bearer(token)
        .json(&json!({"source": source, "amount": amount, "date": date}))
        .await
        .json::<serde_json::Value>();

    body["data"]["id"]
        .as_i64()
        .expect("create income response should contain an id")
}

/// Create an expense record through the API and return its ID.
pub(crate) async fn create_test_expense(
    server: &TestServer,
    token: &str,
    category: &str,
    amount: f64,
    date: NaiveDate,
) -> i64 {
    let body = server
        .post(crate::endpoints::EXPENSES)
        .authorization_bearer(token)
        .json(&json!({"category": category, "amount": amount, "date": date}))
        .await
        .json::<serde_json::Value>();

    body["data"]["id"]
        .as_i64()
        .expect("create expense response should contain an id")
}
