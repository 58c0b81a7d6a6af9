//! The JSON envelope shared by every API endpoint.

use axum::{Json, response::IntoResponse, response::Response};
use serde::Serialize;

/// The body of every JSON response:
/// `{"success": bool, "data"?: ..., "message"?: string, "count"?: int}`.
///
/// `data` carries the payload on success, `message` carries a human readable
/// description on failure, and `count` is set on list responses.
#[derive(Debug, PartialEq, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn with_data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// A successful list response; `count` is set to the number of records.
    pub fn with_records(records: Vec<T>) -> Self {
        let count = records.len();

        Self {
            success: true,
            data: Some(records),
            message: None,
            count: Some(count),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// A successful response with an empty data object, used by the delete
    /// endpoints.
    pub fn with_empty_data() -> Self {
        Self {
            success: true,
            data: Some(serde_json::Value::Object(Default::default())),
            message: None,
            count: None,
        }
    }
}

impl ApiResponse<()> {
    /// A failure response carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
