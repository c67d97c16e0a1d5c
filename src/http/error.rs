//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
///
/// An unknown site is not an error; it yields empty charts.
#[derive(Debug)]
pub enum AppError {
    /// A query parameter that is not a number.
    InvalidBound { name: &'static str, value: String },
    /// `low` greater than `high`.
    ReversedRange { low: f64, high: f64 },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = match self {
            AppError::InvalidBound { name, value } => {
                ApiError::new("BAD_REQUEST", format!("'{name}' must be a number"))
                    .with_details(format!("got '{value}'"))
            }
            AppError::ReversedRange { low, high } => ApiError::new(
                "BAD_REQUEST",
                format!("payload range is reversed: low {low} > high {high}"),
            ),
        };

        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}
