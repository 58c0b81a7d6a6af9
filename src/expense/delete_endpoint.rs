//! The endpoint for deleting a single expense record.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    Error, auth::Claims, database_id::ExpenseId, ownership::authorize, response::ApiResponse,
    state::ExpenseState, stores::ExpenseStore,
};

/// A route handler for deleting an expense record the caller owns.
///
/// The record is fetched first, so a missing id responds 404 before
/// ownership is ever considered; a record owned by someone else responds
/// 401.
pub async fn delete_expense_endpoint<E>(
    State(mut state): State<ExpenseState<E>>,
    claims: Claims,
    Path(expense_id): Path<ExpenseId>,
) -> Result<impl IntoResponse, Error>
where
    E: ExpenseStore + Clone + Send + Sync,
{
    let expense = state.expense_store.get(expense_id)?;
    authorize(&expense, claims.sub)?;
    state.expense_store.delete(expense_id)?;

    Ok(ApiResponse::with_empty_data())
}

#[cfg(test)]
mod delete_expense_endpoint_tests {
    use axum::http::StatusCode;
    use chrono::Utc;
    use serde_json::json;

    use crate::{
        endpoints,
        test_utils::{create_test_expense, get_test_server, sign_up_test_user},
    };

    #[tokio::test]
    async fn delete_expense_removes_the_record() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "ada@example.com").await;
        let id =
            create_test_expense(&server, &token, "Food", 1.0, Utc::now().date_naive()).await;

        server
            .delete(&format!("/api/expense/{id}"))
            .authorization_bearer(&token)
            .await
            .assert_status_ok();

        let body = server
            .get(endpoints::EXPENSES)
            .authorization_bearer(token)
            .await
            .json::<serde_json::Value>();
        assert_eq!(body["count"], json!(0));
    }

    #[tokio::test]
    async fn delete_expense_responds_404_for_missing_record() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "ada@example.com").await;

        server
            .delete("/api/expense/999")
            .authorization_bearer(token)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_expense_responds_401_for_other_users_record() {
        let server = get_test_server();
        let (owner_token, _) = sign_up_test_user(&server, "owner@example.com").await;
        let (intruder_token, _) = sign_up_test_user(&server, "intruder@example.com").await;
        let id =
            create_test_expense(&server, &owner_token, "Food", 1.0, Utc::now().date_naive())
                .await;

        server
            .delete(&format!("/api/expense/{id}"))
            .authorization_bearer(intruder_token)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn delete_missing_record_never_reports_unauthorized() {
        let server = get_test_server();
        let (token, _) = sign_up_test_user(&server, "ada@example.com").await;

        let response = server
            .delete("/api/expense/424242")
            .authorization_bearer(token)
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
