//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → http_request spans carrying the request ID (http/server.rs)
//!
//! logging.rs installs the subscriber:
//!     → stdout, pretty or JSON
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through all subsystems

pub mod logging;

pub use logging::init_logging;
