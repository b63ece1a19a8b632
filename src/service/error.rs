//! Domain error definitions.

use thiserror::Error;

/// Errors returned by [`StringService`](super::StringService) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The input string was empty.
    #[error("empty string")]
    EmptyInput,
}
