//! The route handler that assembles the dashboard snapshot.

use axum::{extract::State, response::IntoResponse};
use chrono::{Duration, Utc};

use crate::{
    Error,
    auth::Claims,
    dashboard::aggregation::{
        DashboardData, RECENT_TRANSACTION_COUNT, expenses_by_category, income_by_source,
        recent_transactions, summarize,
    },
    response::ApiResponse,
    state::DashboardState,
    stores::{ExpenseStore, IncomeStore},
};

/// How many days of expenses the dashboard window covers.
const EXPENSE_WINDOW_DAYS: i64 = 30;

/// How many days of income the dashboard window covers.
const INCOME_WINDOW_DAYS: i64 = 60;

/// A route handler for computing the caller's dashboard snapshot.
///
/// The windows are exact calendar-day subtractions from today, with both
/// boundary days included. The four store queries are not wrapped in a
/// transaction, so a write landing between them shows up in some lists and
/// not others; for this domain that is acceptable.
pub async fn get_dashboard_endpoint<I, E>(
    State(state): State<DashboardState<I, E>>,
    claims: Claims,
) -> Result<impl IntoResponse, Error>
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
{
    let today = Utc::now().date_naive();

    let income = state.income_store.list_by_owner(claims.sub)?;
    let expenses = state.expense_store.list_by_owner(claims.sub)?;

    let last_30_days_expenses = state
        .expense_store
        .list_by_owner_in_range(claims.sub, (today - Duration::days(EXPENSE_WINDOW_DAYS))..=today)?;
    let last_60_days_income = state
        .income_store
        .list_by_owner_in_range(claims.sub, (today - Duration::days(INCOME_WINDOW_DAYS))..=today)?;

    Ok(ApiResponse::with_data(DashboardData {
        summary: summarize(&income, &expenses),
        recent_transactions: recent_transactions(&expenses, RECENT_TRANSACTION_COUNT),
        last_30_days_expenses,
        last_60_days_income,
        expenses_by_category: expenses_by_category(&expenses),
        income_by_source: income_by_source(&income),
    }))
}
