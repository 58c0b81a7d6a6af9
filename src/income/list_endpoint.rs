//! The endpoint for listing the caller's income records.

use axum::{extract::State, response::IntoResponse};

use crate::{
    Error, auth::Claims, response::ApiResponse, state::IncomeState, stores::IncomeStore,
};

/// A route handler for listing all of the caller's income records, latest
/// first.
///
/// The response `count` field carries the number of records.
pub async fn get_income_endpoint<I>(
    State(state): State<IncomeState<I>>,
    claims: Claims,
) -> Result<impl IntoResponse, Error>
where
    I: IncomeStore + Clone + Send + Sync,
{
    let records = state.income_store.list_by_owner(claims.sub)?;

    Ok(ApiResponse::with_records(records))
}

#[cfg(test)]
mod list_income_endpoint_tests {
    use chrono::{Duration, Utc};
    use serde_json::json;

    use crate::{
        endpoints,
        test_utils::{create_test_income, get_test_server, sign_up_test_user},
    };

    #[tokio::test]
    async fn list_income_returns_callers_records_latest_first() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "ada@example.com").await;
        let today = Utc::now().date_naive();

        create_test_income(&server, &token, "Older", 1.0, today - Duration::days(7)).await;
        create_test_income(&server, &token, "Newer", 2.0, today).await;

        let response = server
            .get(endpoints::INCOME)
            .authorization_bearer(token)
            .await;

        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["count"], json!(2));

        let records = body["data"].as_array().unwrap();
        assert_eq!(records[0]["source"], json!("Newer"));
        assert_eq!(records[1]["source"], json!("Older"));
    }

    #[tokio::test]
    async fn list_income_is_empty_for_a_new_user() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "fresh@example.com").await;

        let body = server
            .get(endpoints::INCOME)
            .authorization_bearer(token)
            .await
            .json::<serde_json::Value>();

        assert_eq!(body["count"], json!(0));
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn list_income_does_not_leak_other_users_records() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "alice@example.com").await;
        let (other_token, _) = sign_up_test_user(&server, "bob@example.com").await;

        create_test_income(&server, &other_token, "Salary", 9999.0, Utc::now().date_naive())
            .await;

        let body = server
            .get(endpoints::INCOME)
            .authorization_bearer(token)
            .await
            .json::<serde_json::Value>();

        assert_eq!(body["count"], json!(0));
    }
}
