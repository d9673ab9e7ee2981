//! Axum router and server loop

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use omnihub_core::prelude::*;

/// Server configuration
#[derive(Debug, Clone)]
pub struct HookConfig {
    pub bind: String,
    pub port: u16,
    pub verify_token: String,
}

#[derive(Clone)]
struct HookState {
    verify_token: String,
}

/// Query parameters of the subscription handshake
#[derive(Debug, Deserialize)]
struct VerifyParams {
    #[serde(rename = "hub.mode")]
    mode: Option<String>,

    #[serde(rename = "hub.verify_token")]
    verify_token: Option<String>,

    #[serde(rename = "hub.challenge")]
    challenge: Option<String>,
}

/// Handler for GET /webhook
///
/// Echoes the challenge when the mode is `subscribe` and the token
/// matches, otherwise rejects with 403.
async fn verify(
    State(state): State<Arc<HookState>>,
    Query(params): Query<VerifyParams>,
) -> impl IntoResponse {
    let token_matches = params.verify_token.as_deref() == Some(state.verify_token.as_str());
    let is_subscribe = params.mode.as_deref() == Some("subscribe");

    if is_subscribe && token_matches {
        info!("Webhook subscription verified");
        (StatusCode::OK, params.challenge.unwrap_or_default())
    } else {
        warn!(mode = ?params.mode, "Webhook verification rejected");
        (StatusCode::FORBIDDEN, "Verification failed".to_string())
    }
}

/// Handler for POST /webhook
///
/// Events are logged and acknowledged; the hub takes no action on them.
async fn receive(body: String) -> impl IntoResponse {
    info!(body = %body, "Webhook event");
    (StatusCode::OK, "EVENT_RECEIVED")
}

/// Create the webhook router. Unregistered methods on `/webhook` get 405.
pub fn router(verify_token: impl Into<String>) -> Router {
    let state = Arc::new(HookState {
        verify_token: verify_token.into(),
    });

    Router::new()
        .route("/webhook", get(verify).post(receive))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(config: HookConfig) -> Result<()> {
    let app = router(config.verify_token);

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .map_err(|e| Error::hook(format!("invalid bind address: {e}")))?;

    info!("Starting webhook server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::hook(format!("failed to bind {addr}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Webhook server shutting down gracefully");
        })
        .await
        .map_err(|e| Error::hook(format!("server error: {e}")))?;

    Ok(())
}
