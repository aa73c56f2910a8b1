use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::advisory::advise_for;

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub label: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Current conditions, normalized. Every field may be missing in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: Option<f64>,
    pub windspeed: Option<f64>,
    pub wind_direction_degrees: Option<f64>,
    /// Local observation time as sent by the service (`2024-05-01T12:00`)
    pub observation_time: Option<String>,
}

impl WeatherSnapshot {
    /// Advisory for the observed temperature, if there is one.
    pub fn advisory(&self) -> Option<&'static str> {
        self.temperature_celsius.map(advise_for)
    }

    /// Observation time parsed as a local timestamp.
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        let raw = self.observation_time.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }
}

/// Open-Meteo forecast response, reduced to the `current_weather` block.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current_weather: Option<CurrentWeatherBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherBlock {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddirection: Option<f64>,
    pub time: Option<String>,
}

impl From<CurrentWeatherBlock> for WeatherSnapshot {
    fn from(block: CurrentWeatherBlock) -> Self {
        Self {
            temperature_celsius: block.temperature,
            windspeed: block.windspeed,
            wind_direction_degrees: block.winddirection,
            observation_time: block.time,
        }
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Response has no current weather block")]
    MissingCurrent,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_block_maps_onto_snapshot() {
        let body = r#"{
            "latitude": 37.5,
            "longitude": 127.04,
            "current_weather": {
                "temperature": 21.4,
                "windspeed": 7.9,
                "winddirection": 250,
                "weathercode": 1,
                "time": "2024-05-01T12:00"
            }
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        let snapshot = WeatherSnapshot::from(parsed.current_weather.unwrap());

        assert_eq!(snapshot.temperature_celsius, Some(21.4));
        assert_eq!(snapshot.windspeed, Some(7.9));
        assert_eq!(snapshot.wind_direction_degrees, Some(250.0));
        assert_eq!(snapshot.observation_time.as_deref(), Some("2024-05-01T12:00"));
    }

    #[test]
    fn test_partial_block_keeps_nulls() {
        let body = r#"{"current_weather": {"temperature": null, "time": "2024-05-01T12:00"}}"#;
        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        let snapshot = WeatherSnapshot::from(parsed.current_weather.unwrap());

        assert_eq!(snapshot.temperature_celsius, None);
        assert_eq!(snapshot.advisory(), None);
    }

    #[test]
    fn test_observed_at_formats() {
        let mut snapshot = WeatherSnapshot {
            observation_time: Some("2024-05-01T12:15".to_string()),
            ..Default::default()
        };
        assert_eq!(
            snapshot.observed_at().unwrap().format("%H:%M").to_string(),
            "12:15"
        );

        snapshot.observation_time = Some("2024-05-01T12:15:30".to_string());
        assert!(snapshot.observed_at().is_some());

        snapshot.observation_time = Some("noon".to_string());
        assert!(snapshot.observed_at().is_none());
    }
}
