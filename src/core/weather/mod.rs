use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::WeatherConfig;
use crate::core::search::WeatherArchive;
use crate::models::{Temperature, WeatherSummary};
use crate::utils::Error;

const DAILY_FIELDS: &str = "apparent_temperature_min,apparent_temperature_max";
const UNAVAILABLE: &str = "Weather data not available";

/// Historical daily apparent temperature for one fixed location.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    cfg: WeatherConfig,
    client: reqwest::Client,
}

/// Only the leading `YYYY-MM-DD` of a release date is meaningful.
pub fn release_day(release_date: &str) -> Option<NaiveDate> {
    let prefix = release_date.get(..10)?;
    let bytes = prefix.as_bytes();
    // chrono accepts single-digit months and days; ISO does not
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

impl OpenMeteoClient {
    pub fn new(cfg: WeatherConfig, client: reqwest::Client) -> Self {
        Self { cfg, client }
    }

    async fn fetch_day(&self, day: NaiveDate) -> Result<WeatherSummary, Error> {
        let date = day.format("%Y-%m-%d").to_string();
        let resp = self
            .client
            .get(&self.cfg.base_url)
            .query(&[
                ("latitude", self.cfg.latitude.to_string()),
                ("longitude", self.cfg.longitude.to_string()),
                ("start_date", date.clone()),
                ("end_date", date),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", self.cfg.timezone.clone()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() != 200 {
            warn!(target: "moviehook::weather", status = %status, day = %day, "Weather archive returned an error");
            return Ok(WeatherSummary::error(UNAVAILABLE));
        }

        let archive = resp.json::<ArchiveResponse>().await?;
        Ok(archive.summary())
    }
}

#[async_trait]
impl WeatherArchive for OpenMeteoClient {
    async fn get_weather(&self, release_date: &str) -> WeatherSummary {
        let Some(day) = release_day(release_date) else {
            warn!(target: "moviehook::weather", release_date = %release_date, "Release date is not an ISO date");
            return WeatherSummary::error(format!("Invalid release date: {release_date}"));
        };

        match self.fetch_day(day).await {
            Ok(summary) => {
                debug!(target: "moviehook::weather", day = %day, ?summary, "Weather for release day");
                summary
            }
            Err(e) => {
                warn!(target: "moviehook::weather", day = %day, "Weather lookup failed: {e}");
                WeatherSummary::error(e.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveResponse {
    pub daily: Option<DailySeries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    pub apparent_temperature_min: Option<Vec<Option<f64>>>,
    pub apparent_temperature_max: Option<Vec<Option<f64>>>,
}

impl ArchiveResponse {
    fn summary(self) -> WeatherSummary {
        let Some(daily) = self.daily else {
            return WeatherSummary::no_data();
        };
        // A daily section without the requested series is malformed, not empty
        let (Some(min), Some(max)) = (daily.apparent_temperature_min, daily.apparent_temperature_max) else {
            warn!(target: "moviehook::weather", "Daily section lacks apparent temperature series");
            return WeatherSummary::error(UNAVAILABLE);
        };
        let first = |series: &[Option<f64>]| Temperature::from(series.first().copied().flatten());
        WeatherSummary::Daily {
            apparent_temperature_min: first(min.as_slice()),
            apparent_temperature_max: first(max.as_slice()),
        }
    }
}
