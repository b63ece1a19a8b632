//! Logging middleware for endpoints.

use std::time::Instant;

use super::{Endpoint, EndpointError, RequestContext};

/// Wraps an endpoint and emits one structured event per call.
#[derive(Debug, Clone)]
pub struct Logged<E> {
    inner: E,
}

impl<E> Logged<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Endpoint> Endpoint for Logged<E> {
    type Request = E::Request;
    type Response = E::Response;

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn handle(
        &self,
        ctx: &RequestContext,
        request: Self::Request,
    ) -> Result<Self::Response, EndpointError> {
        let start = Instant::now();
        let result = self.inner.handle(ctx, request);
        let took = start.elapsed();

        match &result {
            Ok(_) => tracing::debug!(
                endpoint = self.inner.name(),
                request_id = %ctx.request_id,
                took = ?took,
                "Endpoint call completed"
            ),
            Err(e) => tracing::warn!(
                endpoint = self.inner.name(),
                request_id = %ctx.request_id,
                took = ?took,
                error = %e,
                "Endpoint call failed"
            ),
        }

        result
    }
}
