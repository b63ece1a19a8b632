//! Endpoint layer.
//!
//! Adapts each [`StringService`](crate::service::StringService) operation to
//! one uniform, statically typed shape so the transport can serve any of them
//! the same way.
//!
//! # Data Flow
//! ```text
//! transport (decoded request + RequestContext)
//!     → Endpoint::handle
//!     → service call
//!     → typed response (domain errors folded into response fields)
//! ```
//!
//! # Design Decisions
//! - Request/response types are associated types, checked at compile time
//! - Domain errors are recovered here; `EndpointError` is reserved for
//!   failures the client cannot fix
//! - Cross-cutting behavior wraps endpoints (see `logged.rs`)

pub mod logged;
pub mod string;
pub mod types;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use logged::Logged;
pub use string::{CountEndpoint, UppercaseEndpoint};
pub use types::{CountRequest, CountResponse, UppercaseRequest, UppercaseResponse};

/// Per-request data handed to every endpoint.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Correlation ID assigned by the HTTP layer.
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

/// Unrecovered endpoint failure.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The endpoint could not produce a response.
    #[error("endpoint failed: {0}")]
    Internal(String),
}

/// A request → response function over typed payloads.
pub trait Endpoint: Clone + Send + Sync + 'static {
    type Request: DeserializeOwned + Default + Send + 'static;
    type Response: Serialize + Send + 'static;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn handle(
        &self,
        ctx: &RequestContext,
        request: Self::Request,
    ) -> Result<Self::Response, EndpointError>;
}
