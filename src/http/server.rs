//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Wire up middleware (tracing, request ID)
//! - Dispatch requests through the route table
//! - Forward matching requests to the media player
//! - Serve everything else from the static file root

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::{validate_config, ConfigError, ProxyConfig, UpstreamConfig};
use crate::http::cors::CorsHeaders;
use crate::http::request::UpstreamRequest;
use crate::http::response;
use crate::http::upstream::UpstreamClient;
use crate::lifecycle::ShutdownSignal;
use crate::routing::{RouteTarget, Router as ProxyRouter};

/// Errors raised while building the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ProxyRouter>,
    pub upstream: Arc<UpstreamConfig>,
    pub client: UpstreamClient,
    pub cors: Arc<CorsHeaders>,
    pub static_files: Option<ServeDir>,
}

/// HTTP server for the CORS proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ServerError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let cors = CorsHeaders::from_config(&config.cors)
            .map_err(|e| ConfigError::Validation(vec![e]))?;
        let client = UpstreamClient::new(&config.upstream)?;
        let static_files = config
            .static_files
            .enabled
            .then(|| ServeDir::new(&config.static_files.root));

        let state = AppState {
            router: Arc::new(ProxyRouter::from_config(&config.upstream)),
            upstream: Arc::new(config.upstream.clone()),
            client,
            cors: Arc::new(cors),
            static_files,
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(middleware::from_fn(echo_request_id))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until shutdown.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.address,
            prefix = %self.config.upstream.path_prefix,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Copy the request ID onto the response. Preflight answers carry only CORS headers.
async fn echo_request_id(request: Request<Body>, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let id = request.headers().get("x-request-id").cloned();
    let mut response = next.run(request).await;
    if let Some(id) = id {
        response.headers_mut().entry("x-request-id").or_insert(id);
    }
    response
}

/// Route the request to preflight, forwarding or static serving.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    match state.router.match_request(&request) {
        RouteTarget::Preflight => state.cors.preflight(),
        RouteTarget::Upstream => forward(&state, request).await,
        RouteTarget::Static => serve_static(&state, request).await,
    }
}

async fn forward(state: &AppState, request: Request<Body>) -> Response {
    let Some(upstream_request) = UpstreamRequest::derive(&request, &state.upstream) else {
        return serve_static(state, request).await;
    };

    tracing::debug!(url = %upstream_request.url, "Forwarding request");

    match state.client.fetch(&upstream_request).await {
        Ok(body) => response::upstream_success(&state.cors, body),
        Err(e) => {
            tracing::error!(url = %upstream_request.url, error = %e, "Upstream error");
            response::upstream_failure(&state.cors, &e)
        }
    }
}

async fn serve_static(state: &AppState, request: Request<Body>) -> Response {
    let Some(files) = state.static_files.clone() else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    match files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
