//! The endpoint for recording a new expense transaction.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    Error, auth::Claims, models::NewExpense, response::ApiResponse, state::ExpenseState,
    stores::ExpenseStore,
};

/// A route handler for creating an expense record.
///
/// The record's owner is the authenticated caller; client input never picks
/// the owner. Returns 201 with the stored record, or 400 if validation
/// fails.
pub async fn create_expense_endpoint<E>(
    State(mut state): State<ExpenseState<E>>,
    claims: Claims,
    Json(new_expense): Json<NewExpense>,
) -> Result<impl IntoResponse, Error>
where
    E: ExpenseStore + Clone + Send + Sync,
{
    let expense = state.expense_store.create(claims.sub, new_expense)?;

    Ok((StatusCode::CREATED, ApiResponse::with_data(expense)))
}
