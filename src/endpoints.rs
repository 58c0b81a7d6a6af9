//! The API endpoint URIs.

/// The root route, serving a health message.
pub const ROOT: &str = "/";

/// The route for creating a new user.
pub const SIGN_UP: &str = "/api/auth/signup";
/// The route for signing in and getting a bearer token.
pub const LOG_IN: &str = "/api/auth/login";
/// The route for resolving the current user from their token.
pub const ME: &str = "/api/auth/me";
/// The route for replacing the current user's avatar URL.
pub const PROFILE_IMAGE: &str = "/api/auth/profile-image";

/// The route for creating and listing income records.
pub const INCOME: &str = "/api/income";
/// The route for deleting a single income record.
pub const DELETE_INCOME: &str = "/api/income/{income_id}";
/// The route for downloading the caller's income records as a workbook.
pub const INCOME_DOWNLOAD: &str = "/api/income/download";

/// The route for creating and listing expense records.
pub const EXPENSES: &str = "/api/expense";
/// The route for deleting a single expense record.
pub const DELETE_EXPENSE: &str = "/api/expense/{expense_id}";
/// The route for downloading the caller's expense records as a workbook.
pub const EXPENSE_DOWNLOAD: &str = "/api/expense/download";

/// The route for the caller's dashboard snapshot.
pub const DASHBOARD: &str = "/api/dashboard";
