//! The endpoint for downloading the caller's income records as a workbook.

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::{
    Error,
    auth::Claims,
    report::{XLSX_CONTENT_TYPE, income_report},
    state::IncomeState,
    stores::IncomeStore,
};

/// A route handler that streams the caller's income records as an XLSX
/// attachment, latest record first.
pub async fn download_income_endpoint<I>(
    State(state): State<IncomeState<I>>,
    claims: Claims,
) -> Result<impl IntoResponse, Error>
where
    I: IncomeStore + Clone + Send + Sync,
{
    let records = state.income_store.list_by_owner(claims.sub)?;
    let buffer = income_report(&records)?;

    Ok((
        [
            (CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=income-report.xlsx",
            ),
        ],
        buffer,
    ))
}
