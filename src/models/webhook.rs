use chrono::{DateTime, Utc};
use serde::Serialize;

use super::WeatherSummary;

/// Body posted to the notification webhook after every successful lookup.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub title: String,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    /// Serialized as `null` when the movie has no release date.
    pub weather: Option<WeatherSummary>,
    pub timestamp: DateTime<Utc>,
    pub search_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookOutcome {
    /// Only an exact 200 counts as delivered.
    pub fn from_status(status: u16) -> Self {
        Self {
            success: status == 200,
            status_code: Some(status),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_200_statuses_are_not_success() {
        assert!(WebhookOutcome::from_status(200).success);
        assert!(!WebhookOutcome::from_status(201).success);
        assert!(!WebhookOutcome::from_status(204).success);
        assert_eq!(WebhookOutcome::from_status(500).status_code, Some(500));
    }

    #[test]
    fn outcome_omits_absent_fields() {
        let value = serde_json::to_value(WebhookOutcome::from_status(200)).unwrap();
        assert_eq!(value, json!({"success": true, "status_code": 200}));

        let value = serde_json::to_value(WebhookOutcome::failed("connection refused")).unwrap();
        assert_eq!(value, json!({"success": false, "error": "connection refused"}));
    }

    #[test]
    fn payload_without_weather_serializes_null() {
        let payload = WebhookPayload {
            title: "Untitled".to_string(),
            release_date: Some(String::new()),
            genres: vec![],
            weather: None,
            timestamp: Utc::now(),
            search_query: "untitled".to_string(),
        };
        let value = serde_json::to_value(payload).unwrap();
        assert!(value["weather"].is_null());
        assert!(value["timestamp"].is_string());
        assert_eq!(value["search_query"], json!("untitled"));
    }
}
