//! The endpoints for creating, listing, deleting and downloading income
//! records.

mod create_endpoint;
mod delete_endpoint;
mod download_endpoint;
mod list_endpoint;

pub use create_endpoint::create_income_endpoint;
pub use delete_endpoint::delete_income_endpoint;
pub use download_endpoint::download_income_endpoint;
pub use list_endpoint::get_income_endpoint;
