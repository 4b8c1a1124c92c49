//! Web server implementation

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use maxarea_common::{evaluate, HeightToken, Heights, Outcome};
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::WebConfig;
use crate::page::render_page;

/// Web server state
#[derive(Clone)]
pub struct WebServer {
    state: Arc<WebServerState>,
}

struct WebServerState {
    cfg: WebConfig,
}

/// Bind `cfg.listen` and serve until Ctrl-C.
pub async fn serve(cfg: WebConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen).await?;
    info!(
        "Web form listening on http://{} (max height {}, max length {})",
        listener.local_addr()?,
        cfg.limits.max_height,
        cfg.limits.max_len
    );

    WebServer::new(cfg)
        .serve_listener(listener, shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal");
    }
}

impl WebServer {
    /// Create a new web server
    pub fn new(cfg: WebConfig) -> Self {
        Self {
            state: Arc::new(WebServerState { cfg }),
        }
    }

    /// Create router
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler).post(submit_handler))
            .route("/api/health", get(health_handler))
            .route("/api/max-area", post(max_area_handler))
            .fallback(not_found_handler)
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_listener<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

// ============================================================================
// Page handlers
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct HeightsForm {
    #[serde(default)]
    heights: Option<String>,
}

/// `GET /`, optionally evaluating `?heights=`.
async fn index_handler(
    State(state): State<Arc<WebServerState>>,
    Query(query): Query<HeightsForm>,
) -> Html<String> {
    match query.heights {
        Some(input) => render_submission(&state, &input),
        None => Html(render_page("", None)),
    }
}

/// `POST /` from the form. Rejected input is still a 200 page.
async fn submit_handler(
    State(state): State<Arc<WebServerState>>,
    Form(form): Form<HeightsForm>,
) -> Html<String> {
    render_submission(&state, form.heights.as_deref().unwrap_or(""))
}

fn render_submission(state: &WebServerState, input: &str) -> Html<String> {
    debug!(bytes = input.len(), "Evaluating submission");
    let outcome = evaluate(input, &state.cfg.limits);
    Html(render_page(input, Some(&outcome)))
}

// ============================================================================
// API handlers
// ============================================================================

#[derive(Debug, Deserialize)]
struct MaxAreaRequest {
    heights: HeightsPayload,
}

/// Either the raw form text or an already-split array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HeightsPayload {
    Text(String),
    Values(Vec<HeightToken>),
}

async fn max_area_handler(
    State(state): State<Arc<WebServerState>>,
    payload: Result<Json<MaxAreaRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => {
            return (
                rejection.status(),
                Json(serde_json::json!({"error": rejection.body_text()})),
            )
                .into_response()
        }
    };

    let outcome = match req.heights {
        HeightsPayload::Text(input) => evaluate(&input, &state.cfg.limits),
        HeightsPayload::Values(tokens) => {
            Outcome::from_result(Heights::from_tokens(&tokens, &state.cfg.limits))
        }
    };

    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(outcome)).into_response()
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "maxarea-web",
        "version": maxarea_common::VERSION,
    }))
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
