use std::collections::HashMap;

use serde::Serialize;

/// Genre identifier -> display name, built fresh for every search.
pub type GenreMap = HashMap<i64, String>;

pub const UNKNOWN_GENRE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieMatch {
    pub title: String,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
}

impl MovieMatch {
    /// Release date usable for weather enrichment (present and non-empty).
    pub fn weather_date(&self) -> Option<&str> {
        self.release_date.as_deref().filter(|d| !d.is_empty())
    }
}

/// Translate genre ids in provider order, falling back to "Unknown".
pub fn resolve_genre_names(ids: &[i64], genres: &GenreMap) -> Vec<String> {
    ids.iter()
        .map(|id| {
            genres
                .get(id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_GENRE.to_string())
        })
        .collect()
}
