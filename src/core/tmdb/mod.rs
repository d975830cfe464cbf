use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::TmdbConfig;
use crate::core::search::{MovieCatalog, SearchError};
use crate::models::{resolve_genre_names, GenreMap, MovieMatch};
use crate::utils::Error;

#[derive(Debug, Clone)]
pub struct TmdbClient {
    base_url: String,
    bearer_token: String,
    language: String,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(cfg: &TmdbConfig, client: reqwest::Client) -> Self {
        Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            bearer_token: cfg.bearer_token.clone(),
            language: cfg.language.clone(),
            client,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.api_url(path))
            .header("Accept", "application/json")
            .bearer_auth(&self.bearer_token)
    }

    /// Genre id -> name. A non-success answer degrades to an empty map.
    pub async fn fetch_genres(&self) -> Result<GenreMap, Error> {
        let resp = self.get("genre/movie/list").send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(target: "moviehook::tmdb", status = %status, "Genre list unavailable, continuing without names");
            return Ok(GenreMap::new());
        }

        let list = resp.json::<GenreList>().await?;
        Ok(list.genres.into_iter().map(|g| (g.id, g.name)).collect())
    }

    /// Top-ranked entry of the first search page, if any.
    pub async fn top_match(&self, title: &str) -> Result<Option<MovieResource>, SearchError> {
        let resp = self
            .get("search/movie")
            .query(&[
                ("query", title),
                ("language", self.language.as_str()),
                ("page", "1"),
            ])
            .send()
            .await
            .map_err(Error::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(target: "moviehook::tmdb", status = %status, body = %body, "Movie search failed");
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                detail: "Error fetching movie data".to_string(),
            });
        }

        let page = resp.json::<SearchPage>().await.map_err(Error::from)?;
        debug!(target: "moviehook::tmdb", query = %title, results = page.results.len(), "Movie search response");

        // Entries after the first are never used, so only the first has to be well formed
        let Some(first) = page.results.into_iter().next() else {
            return Ok(None);
        };
        let movie = serde_json::from_value::<MovieResource>(first).map_err(Error::from)?;
        Ok(Some(movie))
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn find_movie(&self, title: &str) -> Result<MovieMatch, SearchError> {
        let genres = self.fetch_genres().await?;

        let movie = self.top_match(title).await?.ok_or(SearchError::NotFound)?;

        Ok(MovieMatch {
            genres: resolve_genre_names(&movie.genre_ids, &genres),
            title: movie.title,
            release_date: movie.release_date,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<GenreResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreResource {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieResource {
    pub title: String,
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}
