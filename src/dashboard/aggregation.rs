//! Record aggregation for the dashboard snapshot.
//!
//! Provides pure functions to total a user's records, group them by their
//! category or source label and pick out the most recent transactions. All
//! functions only read already-fetched in-memory lists; a user with no
//! records gets zero totals, empty lists and empty maps.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Expense, Income};

/// How many of the latest expenses the dashboard shows.
pub(super) const RECENT_TRANSACTION_COUNT: usize = 5;

/// The three headline numbers at the top of the dashboard.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Total income minus total expenses.
    pub total_balance: f64,
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
}

/// The full dashboard snapshot for one user at one moment.
///
/// The snapshot is assembled from two independent queries, one per record
/// table, so it is not atomic across income and expenses: a write racing the
/// read may be reflected in one list but not the other.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub summary: DashboardSummary,
    /// The latest expenses, at most [RECENT_TRANSACTION_COUNT] of them.
    pub recent_transactions: Vec<Expense>,
    /// Expenses from the last 30 days, oldest first.
    pub last_30_days_expenses: Vec<Expense>,
    /// Income from the last 60 days, oldest first.
    pub last_60_days_income: Vec<Income>,
    /// The sum of expense amounts per category.
    pub expenses_by_category: HashMap<String, f64>,
    /// The sum of income amounts per source.
    pub income_by_source: HashMap<String, f64>,
}

/// Compute the headline totals. Empty lists sum to zero.
pub(super) fn summarize(income: &[Income], expenses: &[Expense]) -> DashboardSummary {
    let total_income: f64 = income.iter().map(|record| record.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|record| record.amount).sum();

    DashboardSummary {
        total_balance: total_income - total_expenses,
        total_income,
        total_expenses,
    }
}

/// The `limit` expenses with the latest dates, in descending date order.
///
/// The sort is stable, so expenses sharing a date stay in the order the
/// caller passed them in (the stores return insertion order for ties).
pub(super) fn recent_transactions(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut recent = expenses.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);

    recent
}

/// Sum expense amounts per category.
///
/// Categories only appear as keys if at least one expense carries them;
/// there is no zero-filling.
pub(super) fn expenses_by_category(expenses: &[Expense]) -> HashMap<String, f64> {
    let mut totals = HashMap::new();

    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }

    totals
}

/// Sum income amounts per source.
pub(super) fn income_by_source(income: &[Income]) -> HashMap<String, f64> {
    let mut totals = HashMap::new();

    for record in income {
        *totals.entry(record.source.clone()).or_insert(0.0) += record.amount;
    }

    totals
}
