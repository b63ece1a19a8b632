//! JSON-over-HTTP transport for endpoints.
//!
//! # Data Flow
//! ```text
//! HTTP request body
//!     → decode (serde_json, any Content-Type)
//!     → Endpoint::handle
//!     → encode (application/json, 200)
//!
//! decode failure → 400 {"error": ...}
//! endpoint failure → 500 {"error": ...}
//! ```
//!
//! # Design Decisions
//! - One generic handler serves every endpoint; routes differ only in state
//! - Malformed input is always an explicit 400, never an empty 200

pub mod error;
pub mod http;

pub use error::{ErrorBody, TransportError};
pub use http::{decode_request, encode_response, serve_endpoint};
