//! The endpoint for deleting a single income record.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    Error, auth::Claims, database_id::IncomeId, ownership::authorize, response::ApiResponse,
    state::IncomeState, stores::IncomeStore,
};

/// A route handler for deleting an income record the caller owns.
///
/// The record is fetched first, so a missing id responds 404 before
/// ownership is ever considered; a record owned by someone else responds
/// 401.
pub async fn delete_income_endpoint<I>(
    State(mut state): State<IncomeState<I>>,
    claims: Claims,
    Path(income_id): Path<IncomeId>,
) -> Result<impl IntoResponse, Error>
where
    I: IncomeStore + Clone + Send + Sync,
{
    let income = state.income_store.get(income_id)?;
    authorize(&income, claims.sub)?;
    state.income_store.delete(income_id)?;

    Ok(ApiResponse::with_empty_data())
}
