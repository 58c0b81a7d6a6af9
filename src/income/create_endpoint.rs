//! The endpoint for recording a new income transaction.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    Error, auth::Claims, models::NewIncome, response::ApiResponse, state::IncomeState,
    stores::IncomeStore,
};

/// A route handler for creating an income record.
///
/// The record's owner is the authenticated caller; client input never picks
/// the owner. Returns 201 with the stored record, or 400 if validation
/// fails.
pub async fn create_income_endpoint<I>(
    State(mut state): State<IncomeState<I>>,
    claims: Claims,
    Json(new_income): Json<NewIncome>,
) -> Result<impl IntoResponse, Error>
where
    I: IncomeStore + Clone + Send + Sync,
{
    let income = state.income_store.create(claims.sub, new_income)?;

    Ok((StatusCode::CREATED, ApiResponse::with_data(income)))
}

#[cfg(test)]
mod create_income_endpoint_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        endpoints,
        test_utils::{get_test_server, sign_up_test_user},
    };

    #[tokio::test]
    async fn create_income_returns_the_stored_record() {
        let server = get_test_server();
        let (token, user_id) = sign_up_test_user(&server, "ada@example.com").await;

        let response = server
            .post(endpoints::INCOME)
            .authorization_bearer(token)
            .json(&json!({
                "source": "Salary",
                "amount": 1000.0,
                "date": "2025-06-30",
                "icon": "💰",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let body = response.json::<serde_json::Value>();
        let data = &body["data"];
        assert_eq!(data["source"], json!("Salary"));
        assert_eq!(data["amount"], json!(1000.0));
        assert_eq!(data["date"], json!("2025-06-30"));
        assert_eq!(data["icon"], json!("💰"));
        assert_eq!(data["userId"], json!(user_id.as_i64()));
    }

    #[tokio::test]
    async fn create_income_fails_without_token() {
        let server = get_test_server();

        server
            .post(endpoints::INCOME)
            .json(&json!({"source": "Salary", "amount": 1.0}))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_income_rejects_negative_amount() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "ada@example.com").await;

        server
            .post(endpoints::INCOME)
            .authorization_bearer(token)
            .json(&json!({"source": "Salary", "amount": -1.0}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_income_rejects_blank_source() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "ada@example.com").await;

        server
            .post(endpoints::INCOME)
            .authorization_bearer(token)
            .json(&json!({"source": "   ", "amount": 1.0}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
