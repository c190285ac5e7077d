//! OpenWeatherMap client
//!
//! One endpoint: current weather by city name, metric units. The caller
//! never sees the error detail; every failure (transport, non-2xx,
//! malformed body) collapses into [`FETCH_ERROR_MESSAGE`] at the effect
//! boundary.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// The single user-facing message for any failed lookup.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch weather data. Please check the city name.";

/// Current weather for a single city, held until superseded by the next
/// successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSnapshot {
    /// Location name as reported by the provider.
    pub location_name: String,
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Coarse condition category ("Clear", "Rain", ...), the presentation
    /// lookup key.
    pub condition_main: String,
    /// Human-readable condition description ("light rain").
    pub description: String,
}

/// Any failure to obtain and parse a weather payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather request failed with status {0}")]
    Status(StatusCode),
}

/// HTTP client for the current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }

    /// Fetch current weather for a city name.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let parsed: OwCurrentResponse = res.json().await?;
        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(response: OwCurrentResponse) -> Self {
        // Only the first weather element is meaningful
        let (condition_main, description) = response
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.description))
            .unwrap_or_else(|| ("Unknown".to_string(), "unknown".to_string()));

        WeatherSnapshot {
            location_name: response.name,
            temperature_c: response.main.temp,
            condition_main,
            description,
        }
    }
}
