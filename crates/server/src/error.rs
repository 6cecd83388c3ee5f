//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use portfolio_dashboard_core::errors::CoreError;

/// Failure surfaced by a request handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A computation over the holdings failed.
    #[error("{context}: {source}")]
    Computation {
        /// Which view was being produced
        context: &'static str,
        /// Underlying core error
        #[source]
        source: CoreError,
    },

    /// The request itself was malformed.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Wrap a core error with the view it was raised from.
    pub fn computation(context: &'static str) -> impl FnOnce(CoreError) -> Self {
        move |source| ApiError::Computation { context, source }
    }
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Computation {
                source: CoreError::ValidationError(_),
                ..
            }
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Computation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::ValidationError(msg) => ApiError::BadRequest(msg),
            other => ApiError::Computation {
                context: "Request failed",
                source: other,
            },
        }
    }
}
