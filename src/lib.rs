//! String service library: uppercase and count over JSON/HTTP.

pub mod config;
pub mod endpoint;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;
pub mod transport;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::{BasicStringService, StringService};
