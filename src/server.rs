use crate::github::GitHubClient;
use crate::pipeline::load_page;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Liveness check response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Application state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<GitHubClient>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(client: GitHubClient) -> Self {
        AppState {
            client: Arc::new(client),
            start_time: std::time::Instant::now(),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(profile_page))
        .route("/healthz", get(liveness_check)) // Kubernetes convention
        .route("/livez", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the page server
pub async fn start_server(
    app_state: AppState,
    bind: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(app_state);

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Profile page listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Every request is one page load: fetch, validate, render.
async fn profile_page(State(state): State<AppState>) -> impl IntoResponse {
    match load_page(&state.client).await {
        Ok(outcome) => {
            let status = match outcome.error() {
                None => StatusCode::OK,
                Some(e) => StatusCode::from_u16(e.http_status())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
            };
            (status, Html(outcome.to_html()))
        }
        Err(e) => {
            error!("Failed to build page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(e.user_message().to_string()),
            )
        }
    }
}

async fn liveness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(LivenessResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
