//! The endpoint for listing the caller's expense records.

use axum::{extract::State, response::IntoResponse};

use crate::{
    Error, auth::Claims, response::ApiResponse, state::ExpenseState, stores::ExpenseStore,
};

/// A route handler for listing all of the caller's expense records, latest
/// first.
///
/// The response `count` field carries the number of records.
pub async fn get_expenses_endpoint<E>(
    State(state): State<ExpenseState<E>>,
    claims: Claims,
) -> Result<impl IntoResponse, Error>
where
    E: ExpenseStore + Clone + Send + Sync,
{
    let records = state.expense_store.list_by_owner(claims.sub)?;

    Ok(ApiResponse::with_records(records))
}

#[cfg(test)]
mod list_expenses_endpoint_tests {
    use chrono::{Duration, Utc};
    use serde_json::json;

    use crate::{
        endpoints,
        test_utils::{create_test_expense, get_test_server, sign_up_test_user},
    };

    #[tokio::test]
    async fn list_expenses_returns_callers_records_latest_first() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "ada@example.com").await;
        let today = Utc::now().date_naive();

        create_test_expense(&server, &token, "Older", 1.0, today - Duration::days(7)).await;
        create_test_expense(&server, &token, "Newer", 2.0, today).await;

        let body = server
            .get(endpoints::EXPENSES)
            .authorization_bearer(token)
            .await
            .json::<serde_json::Value>();

        assert_eq!(body["count"], json!(2));

        let records = body["data"].as_array().unwrap();
        assert_eq!(records[0]["category"], json!("Newer"));
        assert_eq!(records[1]["category"], json!("Older"));
    }

    #[tokio::test]
    async fn list_expenses_does_not_leak_other_users_records() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "alice@example.com").await;
        let (other_token, _) = sign_up_test_user(&server, "bob@example.com").await;

        create_test_expense(&server, &other_token, "Food", 9.0, Utc::now().date_naive()).await;

        let body = server
            .get(endpoints::EXPENSES)
            .authorization_bearer(token)
            .await
            .json::<serde_json::Value>();

        assert_eq!(body["count"], json!(0));
    }
}
