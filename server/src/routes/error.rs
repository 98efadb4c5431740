//! API error type and its JSON rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use classroom::{Field, InputError};
use serde::{Deserialize, Serialize};

use crate::generator::GenerationError;

/// Body of every non-2xx API response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Generation(GenerationError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Generation(GenerationError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Input(err) => ErrorBody {
                code: InputError::CODE.to_owned(),
                message: err.title().to_owned(),
                field: Some(err.field()),
            },
            Self::Generation(err) => {
                ErrorBody { code: err.error_code().to_owned(), message: err.to_string(), field: None }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Input(err) => tracing::debug!(field = %err.field(), "api: rejected request with missing input"),
            Self::Generation(err) => tracing::warn!(error = %err, "api: generation failed"),
        }
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
