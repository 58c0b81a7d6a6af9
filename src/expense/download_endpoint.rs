//! The endpoint for downloading the caller's expense records as a workbook.

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::{
    Error,
    auth::Claims,
    report::{XLSX_CONTENT_TYPE, expense_report},
    state::ExpenseState,
    stores::ExpenseStore,
};

/// A route handler that streams the caller's expense records as an XLSX
/// attachment, latest record first.
pub async fn download_expense_endpoint<E>(
    State(state): State<ExpenseState<E>>,
    claims: Claims,
) -> Result<impl IntoResponse, Error>
where
    E: ExpenseStore + Clone + Send + Sync,
{
    let records = state.expense_store.list_by_owner(claims.sub)?;
    let buffer = expense_report(&records)?;

    Ok((
        [
            (CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=expense-report.xlsx",
            ),
        ],
        buffer,
    ))
}
