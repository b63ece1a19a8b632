//! Stateless string service.

use super::{ServiceError, StringService};

/// The production [`StringService`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStringService;

impl BasicStringService {
    pub fn new() -> Self {
        Self
    }
}

impl StringService for BasicStringService {
    fn uppercase(&self, input: &str) -> Result<String, ServiceError> {
        if input.is_empty() {
            return Err(ServiceError::EmptyInput);
        }
        Ok(input.to_uppercase())
    }

    fn count(&self, input: &str) -> usize {
        input.len()
    }
}
