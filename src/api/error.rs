//! HTTP error mapping for item resources.

use super::validation::ValidationErrors;
use crate::item::{
    domain::{ItemId, ResourceKind},
    ports::ItemRepositoryError,
    services::ItemServiceError,
};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Body used for every non-validation error: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Errors surfaced by item handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed validation; answered with 400.
    #[error("validation failed")]
    Validation(ValidationErrors),

    /// No item with the requested identity exists; answered with 404.
    #[error("{label} with id {id} not found.")]
    NotFound {
        /// Uppercase resource label, e.g. `TASK`.
        label: &'static str,
        /// Requested identity.
        id: ItemId,
    },

    /// The request could not be parsed; answered with 400.
    #[error("{0}")]
    BadRequest(String),

    /// The store failed; answered with 500 without exposing details.
    #[error("internal server error")]
    Internal(#[source] ItemServiceError),
}

impl ApiError {
    /// Creates the not-found error for resource kind `K`.
    #[must_use]
    pub const fn not_found<K: ResourceKind>(id: ItemId) -> Self {
        Self::NotFound {
            label: K::LABEL,
            id,
        }
    }

    /// Maps a service failure for resource kind `K`.
    ///
    /// A row that disappeared between lookup and update is reported as not
    /// found; anything else is internal.
    #[must_use]
    pub fn from_service<K: ResourceKind>(error: ItemServiceError) -> Self {
        match error {
            ItemServiceError::Repository(ItemRepositoryError::NotFound(id)) => {
                Self::not_found::<K>(id)
            }
            other @ ItemServiceError::Repository(ItemRepositoryError::Persistence(_)) => {
                Self::Internal(other)
            }
        }
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(errors) => (status, Json(errors)).into_response(),
            Self::Internal(ref source) => {
                tracing::error!(error = %source, "item store failure");
                let body = ErrorBody {
                    error: self.to_string(),
                };
                (status, Json(body)).into_response()
            }
            Self::NotFound { .. } | Self::BadRequest(_) => {
                let body = ErrorBody {
                    error: self.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
