//! Fintrack is a personal finance tracker: authenticated users record
//! income and expense transactions, view aggregated dashboard summaries and
//! export their records as spreadsheet files.
//!
//! This library provides the JSON REST API behind the app; the web client
//! lives in a separate repository.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod auth;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod error;
mod expense;
mod income;
mod models;
mod ownership;
mod report;
mod response;
mod routing;
mod state;
mod stores;

#[cfg(test)]
mod test_utils;

pub use db::initialize as initialize_db;
pub use error::Error;
pub use routing::build_router;
pub use state::AppState;
pub use stores::sqlite::{SQLAppState, create_app_state};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
