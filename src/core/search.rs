use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{MovieMatch, SearchResponse, WeatherSummary, WebhookOutcome, WebhookPayload};
use crate::utils::Error;

/// Failures that abort a search. Enrichment and notification never produce one.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Movie not found")]
    NotFound,

    #[error("{detail}")]
    Upstream { status: u16, detail: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Unexpected(String),
}

impl From<Error> for SearchError {
    fn from(err: Error) -> Self {
        match err {
            Error::HttpRequestError(e) if e.is_decode() => SearchError::Unexpected(e.to_string()),
            Error::HttpRequestError(e) => SearchError::Transport(e.to_string()),
            other => SearchError::Unexpected(other.to_string()),
        }
    }
}

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn find_movie(&self, title: &str) -> Result<MovieMatch, SearchError>;
}

#[async_trait]
pub trait WeatherArchive: Send + Sync {
    async fn get_weather(&self, release_date: &str) -> WeatherSummary;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, payload: &WebhookPayload) -> WebhookOutcome;
}

/// Title -> movie -> weather -> webhook, one stage after the other.
#[derive(Clone)]
pub struct SearchService {
    catalog: Arc<dyn MovieCatalog>,
    weather: Arc<dyn WeatherArchive>,
    notifier: Arc<dyn Notifier>,
}

impl SearchService {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        weather: Arc<dyn WeatherArchive>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            weather,
            notifier,
        }
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let movie = self.catalog.find_movie(query).await?;
        info!(target: "moviehook::search", query = %query, title = %movie.title, "Movie matched");

        let weather = self.enrich(&movie).await;

        let payload = WebhookPayload {
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            genres: movie.genres.clone(),
            weather: weather.clone(),
            timestamp: Utc::now(),
            search_query: query.to_string(),
        };
        let webhook_status = self.notifier.notify(&payload).await;
        if !webhook_status.success {
            warn!(target: "moviehook::search", title = %movie.title, ?webhook_status, "Webhook delivery failed");
        }

        Ok(SearchResponse::new(movie, weather, webhook_status))
    }

    async fn enrich(&self, movie: &MovieMatch) -> Option<WeatherSummary> {
        let Some(date) = movie.weather_date() else {
            debug!(target: "moviehook::search", title = %movie.title, "No release date, skipping weather");
            return None;
        };
        Some(self.weather.get_weather(date).await)
    }
}
