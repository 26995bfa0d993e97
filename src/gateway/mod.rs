//! Forwarding Gateway: a stateless relay in front of the record store.
//!
//! Every request, whatever its method or path, is sent to one fixed
//! target URL with the query string appended unchanged. The backend's
//! status and body come back verbatim, with `Access-Control-Allow-Origin: *`
//! and a forced JSON content type.

use crate::errors::{AppError, AppResult};
use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::{
        HeaderValue, Method, StatusCode, Uri,
        header::{ACCEPT, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    },
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub struct GatewayState {
    target: String,
    client: reqwest::Client,
}

impl GatewayState {
    pub fn new(target: impl Into<String>) -> AppResult<Self> {
        let target = target.into();
        if target.trim().is_empty() {
            return Err(AppError::Config("gateway target must not be empty".into()));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Gateway(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { target, client })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn url_for(&self, uri: &Uri) -> String {
        match uri.query() {
            Some(q) => format!("{}?{}", self.target, q),
            None => self.target.clone(),
        }
    }
}

pub fn router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .fallback(forward)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn forward(
    State(state): State<Arc<GatewayState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let url = state.url_for(&uri);

    let mut outbound = state
        .client
        .request(method.clone(), &url)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json");

    if method != Method::GET && method != Method::HEAD {
        outbound = outbound.body(body);
    }

    let upstream = match outbound.send().await {
        Ok(r) => r,
        Err(e) => {
            warn!(%method, error = %e, "backend unreachable");
            return bad_gateway(&e.to_string());
        }
    };

    let status = upstream.status();
    match upstream.bytes().await {
        Ok(bytes) => {
            info!(%method, status = status.as_u16(), "relayed");
            json_response(status, Body::from(bytes))
        }
        Err(e) => {
            warn!(%method, error = %e, "failed reading backend body");
            bad_gateway(&e.to_string())
        }
    }
}

fn json_response(status: StatusCode, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn bad_gateway(reason: &str) -> Response {
    let body = serde_json::json!({ "ok": false, "error": reason }).to_string();
    json_response(StatusCode::BAD_GATEWAY, Body::from(body))
}

/// Bind and serve in the background. Returns the bound address, which is
/// useful when binding to port 0.
pub async fn spawn(addr: &str, target: impl Into<String>) -> AppResult<SocketAddr> {
    let state = Arc::new(GatewayState::new(target)?);
    let listener = bind(addr).await?;
    let bound = local_addr(&listener)?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router(state)).await {
            error!("gateway server error: {}", e);
        }
    });

    Ok(bound)
}

/// Serve until Ctrl+C / SIGTERM.
pub async fn run(addr: &str, target: impl Into<String>) -> AppResult<()> {
    let state = Arc::new(GatewayState::new(target)?);
    let listener = bind(addr).await?;
    let bound = local_addr(&listener)?;
    info!("Gateway listening on {bound}, relaying to {}", state.target());

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Gateway(e.to_string()))?;

    info!("Gateway shut down");
    Ok(())
}

/// Blocking entry point used by the `serve` command.
pub fn serve(addr: &str, target: &str) -> AppResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(addr, target))
}

async fn bind(addr: &str) -> AppResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Gateway(format!("failed to bind to {addr}: {e}")))
}

fn local_addr(listener: &TcpListener) -> AppResult<SocketAddr> {
    listener
        .local_addr()
        .map_err(|e| AppError::Gateway(format!("failed to get local addr: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
