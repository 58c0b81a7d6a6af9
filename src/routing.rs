//! Application router configuration.

use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{
    auth::{get_me_endpoint, log_in_endpoint, sign_up_endpoint, update_profile_image_endpoint},
    dashboard::get_dashboard_endpoint,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, download_expense_endpoint,
        get_expenses_endpoint,
    },
    income::{
        create_income_endpoint, delete_income_endpoint, download_income_endpoint,
        get_income_endpoint,
    },
    state::AppState,
    stores::{ExpenseStore, IncomeStore, UserStore},
};

/// Return a router with all the app's routes.
///
/// Everything under `/api` except signup and login resolves the caller from
/// a bearer token; requests without a valid token never reach a store.
pub fn build_router<I, E, U>(state: AppState<I, E, U>) -> Router
where
    I: IncomeStore + Clone + Send + Sync + 'static,
    E: ExpenseStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let router: Router<AppState<I, E, U>> = Router::new()
        .route(endpoints::ROOT, get(get_health))
        .route(endpoints::SIGN_UP, post(sign_up_endpoint))
        .route(endpoints::LOG_IN, post(log_in_endpoint))
        .route(endpoints::ME, get(get_me_endpoint))
        .route(endpoints::PROFILE_IMAGE, put(update_profile_image_endpoint))
        .route(
            endpoints::INCOME,
            post(create_income_endpoint).get(get_income_endpoint),
        )
        .route(endpoints::DELETE_INCOME, delete(delete_income_endpoint))
        .route(endpoints::INCOME_DOWNLOAD, get(download_income_endpoint))
        .route(
            endpoints::EXPENSES,
            post(create_expense_endpoint).get(get_expenses_endpoint),
        )
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::EXPENSE_DOWNLOAD, get(download_expense_endpoint))
        .route(endpoints::DASHBOARD, get(get_dashboard_endpoint));

    router.with_state(state)
}

/// The root path responds with a short liveness message.
async fn get_health() -> Json<serde_json::Value> {
    Json(json!({"message": "fintrack API is running"}))
}

#[cfg(test)]
mod routing_tests {
    use serde_json::json;

    use crate::{endpoints, test_utils::get_test_server};

    #[tokio::test]
    async fn root_responds_with_health_message() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({"message": "fintrack API is running"})
        );
    }
}
