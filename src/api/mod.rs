//! HTTP surface: landing redirect, static files and the search endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use crate::config::Config;
use crate::core::search::{SearchError, SearchService};
use crate::core::tmdb::TmdbClient;
use crate::core::weather::OpenMeteoClient;
use crate::core::webhook::WebhookNotifier;
use crate::models::SearchResponse;
use crate::utils::MoviehookResult;

/// Shared handler state; everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub search: SearchService,
}

impl AppState {
    pub fn from_config(config: &Config) -> MoviehookResult<Self> {
        let client = config.http.build_client()?;
        let search = SearchService::new(
            Arc::new(TmdbClient::new(&config.tmdb, client.clone())),
            Arc::new(OpenMeteoClient::new(config.weather.clone(), client.clone())),
            Arc::new(WebhookNotifier::new(&config.webhook, client)),
        );
        Ok(Self { search })
    }
}

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/search_movie/", get(search_movie))
        .route("/search_movie", get(search_movie))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn landing() -> Redirect {
    Redirect::temporary("/static/index.html")
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: String,
}

async fn search_movie(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, SearchError> {
    info!(target: "moviehook::search", title = %params.title, "Search requested");
    state.search.search(&params.title).await.map(Json)
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::NotFound => StatusCode::NOT_FOUND,
            SearchError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            SearchError::Transport(_) | SearchError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(target: "moviehook::search", status = %status, "Search failed: {self}");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
