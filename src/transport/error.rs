//! Transport-level failures and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::endpoint::EndpointError;

/// Body written for every transport-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failures that abort the decode → invoke → encode pipeline.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request body is not valid JSON for the endpoint's request type.
    #[error("malformed request body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint returned an unrecovered error.
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

impl TransportError {
    pub fn status(&self) -> StatusCode {
        match self {
            TransportError::Decode(_) => StatusCode::BAD_REQUEST,
            TransportError::Endpoint(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TransportError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
