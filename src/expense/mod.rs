//! The endpoints for creating, listing, deleting and downloading expense
//! records.

mod create_endpoint;
mod delete_endpoint;
mod download_endpoint;
mod list_endpoint;

pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use download_endpoint::download_expense_endpoint;
pub use list_endpoint::get_expenses_endpoint;
