use serde::{Serialize, Serializer};

pub const NO_DATA: &str = "No data";

/// A daily reading, or "No data" when the archive had nothing for that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temperature {
    Celsius(f64),
    NoData,
}

impl Serialize for Temperature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Temperature::Celsius(v) => serializer.serialize_f64(*v),
            Temperature::NoData => serializer.serialize_str(NO_DATA),
        }
    }
}

impl From<Option<f64>> for Temperature {
    fn from(value: Option<f64>) -> Self {
        value.map(Temperature::Celsius).unwrap_or(Temperature::NoData)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WeatherSummary {
    Daily {
        apparent_temperature_min: Temperature,
        apparent_temperature_max: Temperature,
    },
    Error {
        error: String,
    },
}

impl WeatherSummary {
    pub fn no_data() -> Self {
        WeatherSummary::Daily {
            apparent_temperature_min: Temperature::NoData,
            apparent_temperature_max: Temperature::NoData,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        WeatherSummary::Error {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_data_serializes_as_sentinel_strings() {
        let value = serde_json::to_value(WeatherSummary::no_data()).unwrap();
        assert_eq!(
            value,
            json!({"apparent_temperature_min": "No data", "apparent_temperature_max": "No data"})
        );
    }

    #[test]
    fn mixed_reading_keeps_numbers() {
        let summary = WeatherSummary::Daily {
            apparent_temperature_min: Temperature::Celsius(17.5),
            apparent_temperature_max: Temperature::NoData,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["apparent_temperature_min"], json!(17.5));
        assert_eq!(value["apparent_temperature_max"], json!("No data"));
    }

    #[test]
    fn error_marker_shape() {
        let value = serde_json::to_value(WeatherSummary::error("boom")).unwrap();
        assert_eq!(value, json!({"error": "boom"}));
    }
}
