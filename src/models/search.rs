use serde::Serialize;

use super::{MovieMatch, WeatherSummary, WebhookOutcome};

/// Body returned by `GET /search_movie/`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub title: String,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    /// Absent (not null) when the movie has no release date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSummary>,
    pub webhook_status: WebhookOutcome,
}

impl SearchResponse {
    pub fn new(
        movie: MovieMatch,
        weather: Option<WeatherSummary>,
        webhook_status: WebhookOutcome,
    ) -> Self {
        Self {
            title: movie.title,
            release_date: movie.release_date,
            genres: movie.genres,
            weather,
            webhook_status,
        }
    }
}
