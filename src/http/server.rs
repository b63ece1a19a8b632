//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router binding each endpoint to its route
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Serve on a bound listener until the shutdown signal fires

use axum::{
    extract::DefaultBodyLimit,
    http::Request,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::endpoint::{CountEndpoint, Logged, UppercaseEndpoint};
use crate::http::health::get_health;
use crate::http::request::{RequestUuid, X_REQUEST_ID};
use crate::service::{BasicStringService, StringService};
use crate::transport::serve_endpoint;

/// HTTP server for the string service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server backed by [`BasicStringService`].
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_service(config, BasicStringService::new())
    }

    /// Create a server backed by a custom service implementation.
    pub fn with_service<S: StringService>(config: ServiceConfig, service: S) -> Self {
        let router = Self::build_router(&config, Arc::new(service));
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router<S: StringService>(config: &ServiceConfig, service: Arc<S>) -> Router {
        let uppercase = Logged::new(UppercaseEndpoint::new(service.clone()));
        let count = Logged::new(CountEndpoint::new(service));

        Router::new()
            .route(
                "/uppercase",
                any(serve_endpoint::<Logged<UppercaseEndpoint<S>>>).with_state(uppercase),
            )
            .route(
                "/count",
                any(serve_endpoint::<Logged<CountEndpoint<S>>>).with_state(count),
            )
            .route("/health", get(get_health))
            // Replaces axum's built-in 2MB cap so the configured limit is the only one.
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, RequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires and in-flight requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::health::HealthResponse;
    use crate::service::ServiceError;
    use crate::transport::ErrorBody;
    use axum::{
        body::{to_bytes, Body, Bytes},
        http::{header, Method, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        HttpServer::new(ServiceConfig::default()).router()
    }

    async fn send(app: Router, method: Method, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_uppercase_route() {
        let response = send(app(), Method::POST, "/uppercase", r#"{"str":"hello"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(json_body(response).await, json!({"str": "HELLO", "err": ""}));
    }

    #[tokio::test]
    async fn test_uppercase_empty_input() {
        let response = send(app(), Method::POST, "/uppercase", r#"{"str":""}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"str": "", "err": "empty string"})
        );
    }

    #[tokio::test]
    async fn test_count_route() {
        let response = send(app(), Method::POST, "/count", r#"{"str":"hello"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"count": 5}));

        let response = send(app(), Method::POST, "/count", r#"{"str":""}"#).await;
        assert_eq!(json_body(response).await, json!({"count": 0}));
    }

    #[tokio::test]
    async fn test_missing_field_counts_as_empty() {
        let response = send(app(), Method::POST, "/count", "{}").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"count": 0}));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = send(app(), Method::POST, "/uppercase", r#"{"str": "#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_value(json_body(response).await).unwrap();
        assert!(body.error.starts_with("malformed request body"));

        let response = send(app(), Method::POST, "/count", "").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_any_method_is_accepted() {
        let response = send(app(), Method::PUT, "/count", r#"{"str":"abc"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"count": 3}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = send(app(), Method::POST, "/reverse", r#"{"str":"abc"}"#).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_generated_and_propagated() {
        let response = send(app(), Method::POST, "/count", r#"{"str":"a"}"#).await;
        let generated = response.headers().get(X_REQUEST_ID).unwrap();
        assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());

        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/count")
                    .header(X_REQUEST_ID, "client-id-1")
                    .body(Body::from(r#"{"str":"a"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[X_REQUEST_ID], "client-id-1");
    }

    #[tokio::test]
    async fn test_body_limit() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_size = 16;
        let app = HttpServer::new(config).router();

        let big = format!(r#"{{"str":"{}"}}"#, "a".repeat(64));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/count")
                    .header(header::CONTENT_LENGTH, big.len())
                    .body(Body::from(big))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_body_limit_above_axum_default() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_size = 8 * 1024 * 1024;
        let app = HttpServer::new(config).router();

        let input = "a".repeat(3 * 1024 * 1024);
        let body = format!(r#"{{"str":"{}"}}"#, input);
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/count")
                    .header(header::CONTENT_LENGTH, body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"count": input.len()}));
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let mut config = ServiceConfig::default();
        config.timeouts.request_secs = 1;
        let app = HttpServer::new(config).router();

        let stalled = futures_util::stream::pending::<Result<Bytes, std::io::Error>>();
        let response = tokio::time::timeout(
            Duration::from_secs(5),
            app.oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/uppercase")
                    .body(Body::from_stream(stalled))
                    .unwrap(),
            ),
        )
        .await
        .expect("timeout layer did not fire")
        .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_null_body_is_zero_value() {
        let response = send(app(), Method::POST, "/uppercase", "null").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"str": "", "err": "empty string"})
        );
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(app(), Method::GET, "/health", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    struct Reversing;

    impl StringService for Reversing {
        fn uppercase(&self, input: &str) -> Result<String, ServiceError> {
            Ok(input.chars().rev().collect())
        }

        fn count(&self, _input: &str) -> usize {
            42
        }
    }

    #[tokio::test]
    async fn test_custom_service() {
        let app = HttpServer::with_service(ServiceConfig::default(), Reversing).router();
        let response = send(app.clone(), Method::POST, "/uppercase", r#"{"str":"abc"}"#).await;
        assert_eq!(json_body(response).await, json!({"str": "cba", "err": ""}));

        let response = send(app, Method::POST, "/count", r#"{"str":""}"#).await;
        assert_eq!(json_body(response).await, json!({"count": 42}));
    }
}
