//! HTTP error taxonomy.

use crate::task::services::GatewayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the HTTP layer.
///
/// Storage failures are logged server-side with their cause and reach the
/// client only as a generic 500 body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Missing, malformed or unknown session token.
    #[error("Unauthorized")]
    Unauthorized,

    /// The task does not exist or belongs to another user.
    #[error("Task not found")]
    NotFound,

    /// The request failed domain validation.
    #[error("{0}")]
    Validation(String),

    /// Persistence failed; details stay server-side.
    #[error("Database error")]
    Internal,
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(_) => Self::NotFound,
            GatewayError::Domain(domain) => Self::Validation(domain.to_string()),
            GatewayError::Storage(source) => {
                tracing::error!(error = %source, "task storage failure");
                Self::Internal
            }
        }
    }
}

/// JSON body carried by every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
