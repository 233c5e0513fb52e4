//! API error handling.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use quill_core::error::QuillError;

/// Body of a failed stats request.
pub const STATS_ERROR: &str = "An error occurred while fetching or analyzing blog data.";

/// Body of a failed search request.
pub const SEARCH_ERROR: &str = "An error occurred while searching for blogs.";

/// Body of a search request without a query.
pub const QUERY_REQUIRED: &str = "Query parameter \"query\" is required.";

/// Body of any otherwise unhandled failure.
pub const INTERNAL_ERROR: &str = "Internal Server Error";

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Converts a pipeline error, hiding server-side detail behind `message`.
    ///
    /// Client errors keep their own text and map to 400. Everything else is
    /// logged and answered with a 500 carrying `message`.
    pub fn with_message(err: QuillError, message: &str) -> Self {
        if err.is_client_error() {
            return ApiError::bad_request(err.to_string());
        }

        tracing::error!(error = %err, "{}", message);
        ApiError::internal(message)
    }

    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<QuillError> for ApiError {
    fn from(err: QuillError) -> Self {
        ApiError::with_message(err, INTERNAL_ERROR)
    }
}

/// Turns a handler panic into the generic 500 response.
pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };

    tracing::error!(panic = detail, "Handler panicked");
    ApiError::internal(INTERNAL_ERROR).into_response()
}
