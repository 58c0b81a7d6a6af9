//! Implements a struct that holds the state of the REST server.

use std::marker::{Send, Sync};

use axum::extract::FromRef;

use crate::{
    auth::JwtKeys,
    stores::{ExpenseStore, IncomeStore, UserStore},
};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState<I, E, U>
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    /// The keys used for signing and verifying auth tokens.
    pub jwt_keys: JwtKeys,
    /// The store for managing [income](crate::models::Income) records.
    pub income_store: I,
    /// The store for managing [expense](crate::models::Expense) records.
    pub expense_store: E,
    /// The store for managing [users](crate::models::User).
    pub user_store: U,
}

impl<I, E, U> AppState<I, E, U>
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    ///
    /// The signing keys are derived from `jwt_secret`.
    pub fn new(jwt_secret: &str, income_store: I, expense_store: E, user_store: U) -> Self {
        Self {
            jwt_keys: JwtKeys::from_secret(jwt_secret),
            income_store,
            expense_store,
            user_store,
        }
    }
}

// This impl lets the `Claims` extractor access the keys from the full app
// state.
impl<I, E, U> FromRef<AppState<I, E, U>> for JwtKeys
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<I, E, U>) -> Self {
        state.jwt_keys.clone()
    }
}

/// The state needed by the income endpoints.
#[derive(Clone)]
pub struct IncomeState<I>
where
    I: IncomeStore + Clone + Send + Sync,
{
    /// The store for managing [income](crate::models::Income) records.
    pub income_store: I,
}

impl<I, E, U> FromRef<AppState<I, E, U>> for IncomeState<I>
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<I, E, U>) -> Self {
        Self {
            income_store: state.income_store.clone(),
        }
    }
}

/// The state needed by the expense endpoints.
#[derive(Clone)]
pub struct ExpenseState<E>
where
    E: ExpenseStore + Clone + Send + Sync,
{
    /// The store for managing [expense](crate::models::Expense) records.
    pub expense_store: E,
}

impl<I, E, U> FromRef<AppState<I, E, U>> for ExpenseState<E>
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<I, E, U>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The state needed for computing the dashboard snapshot.
#[derive(Clone)]
pub struct DashboardState<I, E>
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
{
    /// The store for managing [income](crate::models::Income) records.
    pub income_store: I,
    /// The store for managing [expense](crate::models::Expense) records.
    pub expense_store: E,
}

impl<I, E, U> FromRef<AppState<I, E, U>> for DashboardState<I, E>
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<I, E, U>) -> Self {
        Self {
            income_store: state.income_store.clone(),
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The state needed by the auth endpoints.
#[derive(Clone)]
pub struct AuthState<U>
where
    U: UserStore + Clone + Send + Sync,
{
    /// The keys used for signing and verifying auth tokens.
    pub jwt_keys: JwtKeys,
    /// The store for managing [users](crate::models::User).
    pub user_store: U,
}

impl<I, E, U> FromRef<AppState<I, E, U>> for AuthState<U>
where
    I: IncomeStore + Clone + Send + Sync,
    E: ExpenseStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<I, E, U>) -> Self {
        Self {
            jwt_keys: state.jwt_keys.clone(),
            user_store: state.user_store.clone(),
        }
    }
}
