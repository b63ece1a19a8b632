//! Endpoints backed by a [`StringService`].

use std::sync::Arc;

use super::{
    CountRequest, CountResponse, Endpoint, EndpointError, RequestContext, UppercaseRequest,
    UppercaseResponse,
};
use crate::service::StringService;

/// Serves [`StringService::uppercase`].
pub struct UppercaseEndpoint<S> {
    service: Arc<S>,
}

impl<S> UppercaseEndpoint<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

impl<S> Clone for UppercaseEndpoint<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<S: StringService> Endpoint for UppercaseEndpoint<S> {
    type Request = UppercaseRequest;
    type Response = UppercaseResponse;

    fn name(&self) -> &'static str {
        "uppercase"
    }

    fn handle(
        &self,
        _ctx: &RequestContext,
        request: UppercaseRequest,
    ) -> Result<UppercaseResponse, EndpointError> {
        // Domain errors travel in the body, never as a transport failure.
        match self.service.uppercase(&request.input) {
            Ok(output) => Ok(UppercaseResponse::success(output)),
            Err(e) => Ok(UppercaseResponse::failure(e)),
        }
    }
}

/// Serves [`StringService::count`].
pub struct CountEndpoint<S> {
    service: Arc<S>,
}

impl<S> CountEndpoint<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

impl<S> Clone for CountEndpoint<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<S: StringService> Endpoint for CountEndpoint<S> {
    type Request = CountRequest;
    type Response = CountResponse;

    fn name(&self) -> &'static str {
        "count"
    }

    fn handle(
        &self,
        _ctx: &RequestContext,
        request: CountRequest,
    ) -> Result<CountResponse, EndpointError> {
        Ok(CountResponse {
            count: self.service.count(&request.input),
        })
    }
}
