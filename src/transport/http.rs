//! Generic axum handler binding an [`Endpoint`] to a route.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde::{de::DeserializeOwned, Serialize};

use super::TransportError;
use crate::endpoint::{Endpoint, RequestContext};
use crate::http::request::request_id;

/// Parse a request body as JSON.
///
/// A literal `null` body decodes to `T::default()`.
pub fn decode_request<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, TransportError> {
    let request: Option<T> = serde_json::from_slice(body)?;
    Ok(request.unwrap_or_default())
}

/// Wrap a response for JSON encoding.
pub fn encode_response<T: Serialize>(response: T) -> Json<T> {
    Json(response)
}

/// Decode, invoke and encode one request against `endpoint`.
///
/// Mount with `any(serve_endpoint::<E>).with_state(endpoint)`.
pub async fn serve_endpoint<E: Endpoint>(
    State(endpoint): State<E>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<E::Response>, TransportError> {
    let ctx = RequestContext::new(request_id(&headers));

    let request = decode_request::<E::Request>(&body).inspect_err(|e| {
        tracing::debug!(
            endpoint = endpoint.name(),
            request_id = %ctx.request_id,
            error = %e,
            "Rejecting request"
        );
    })?;

    let response = endpoint.handle(&ctx, request)?;
    Ok(encode_response(response))
}
