//! HTTP API handlers and the application router

use crate::app::site::SiteInfo;
use crate::content::{ContentError, ContentSource, HomeData, ThemeData};
use crate::ui;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    pub site: SiteInfo,
    /// Width assumed when rendering on the server, `None` renders the narrow layout
    pub default_viewport_px: Option<u32>,
}

impl AppState {
    pub fn new(
        content: Arc<dyn ContentSource>,
        site: SiteInfo,
        default_viewport_px: Option<u32>,
    ) -> Self {
        Self {
            content,
            site,
            default_viewport_px,
        }
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Backend failures surface as 502 so clients can tell them from our own errors.
impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        tracing::warn!("Content request failed: {}", self);
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
}

/// GET /status - Service status
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "spsa-site",
        version: env!("SITE_VERSION"),
        git_sha: env!("SITE_GIT_SHA"),
    })
}

/// GET /api/theme - Theme with header menu
pub async fn theme_handler(
    State(state): State<AppState>,
) -> Result<Json<ThemeData>, ContentError> {
    Ok(Json(state.content.theme().await?))
}

/// GET /api/home - Home page content
pub async fn home_handler(State(state): State<AppState>) -> Result<Json<HomeData>, ContentError> {
    Ok(Json(state.content.home().await?))
}

/// POST /api/cache/invalidate - Drop cached content so the next request refetches
pub async fn invalidate_cache_handler(State(state): State<AppState>) -> StatusCode {
    state.content.invalidate().await;
    StatusCode::NO_CONTENT
}

/// Build the application router (without middleware layers)
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/status", get(status_handler))
        // Content API (read by the browser client)
        .route("/api/theme", get(theme_handler))
        .route("/api/home", get(home_handler))
        .route("/api/cache/invalidate", post(invalidate_cache_handler))
        // Server-rendered pages
        .route("/", get(ui::home_page))
        .route("/{*path}", get(ui::section_page))
        .with_state(state)
}
