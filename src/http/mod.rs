//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (assign/propagate X-Request-ID)
//!     → route: /uppercase, /count → transport::serve_endpoint
//!              /health            → health.rs
//!     → JSON response to client
//! ```

pub mod health;
pub mod request;
pub mod server;

pub use request::{request_id, RequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
