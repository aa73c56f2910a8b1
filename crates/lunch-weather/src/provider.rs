use crate::types::{ForecastResponse, Location, WeatherError, WeatherSnapshot};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

const FORECAST_PATH: &str = "/v1/forecast";
const USER_AGENT: &str = concat!("lunch/", env!("CARGO_PKG_VERSION"));

/// Open-Meteo client for the current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    timezone: String,
}

impl WeatherProvider {
    pub fn new(
        base_url: impl Into<String>,
        timezone: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into(),
            timezone: timezone.into(),
        })
    }

    fn forecast_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), FORECAST_PATH)
    }

    /// Fetch current conditions for a location.
    ///
    /// # Errors
    /// Network failures, timeouts and non-2xx statuses surface as
    /// `WeatherError::Network`; an unreadable body as `Parse`; a body without
    /// a `current_weather` block as `MissingCurrent`.
    pub async fn fetch(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError> {
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();

        tracing::debug!(%latitude, %longitude, "Fetching current weather");

        let response = self
            .client
            .get(self.forecast_url())
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current_weather", "true"),
                ("timezone", self.timezone.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        let current = parsed.current_weather.ok_or(WeatherError::MissingCurrent)?;
        Ok(WeatherSnapshot::from(current))
    }

    /// Like [`fetch`](Self::fetch), but any failure means "no weather today".
    pub async fn fetch_or_unavailable(&self, location: &Location) -> Option<WeatherSnapshot> {
        match self.fetch(location).await {
            Ok(snapshot) => {
                tracing::info!(
                    temperature = ?snapshot.temperature_celsius,
                    "Weather data fetched"
                );
                Some(snapshot)
            }
            Err(e) => {
                tracing::warn!("Weather unavailable: {}", e);
                None
            }
        }
    }
}
