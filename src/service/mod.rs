//! String operations subsystem.
//!
//! # Data Flow
//! ```text
//! endpoint layer
//!     → StringService::uppercase / StringService::count
//!     → Result<String, ServiceError> / usize
//! ```
//!
//! # Design Decisions
//! - Operations are pure: no I/O, no shared state
//! - Domain failures are enum variants, never transport failures
//! - The trait is the seam; `BasicStringService` is the only implementation

pub mod error;
pub mod string;

pub use error::ServiceError;
pub use string::BasicStringService;

/// Business operations exposed over HTTP.
///
/// Implementations must be safe for unsynchronized concurrent use.
pub trait StringService: Send + Sync + 'static {
    /// Convert `input` to uppercase.
    ///
    /// Fails with [`ServiceError::EmptyInput`] when `input` is empty.
    fn uppercase(&self, input: &str) -> Result<String, ServiceError>;

    /// Number of bytes in `input`.
    fn count(&self, input: &str) -> usize;
}
