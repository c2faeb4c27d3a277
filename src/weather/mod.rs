pub mod config;

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;

use crate::weather::config::CurrentConditions;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Unit system for the provider query and for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn from_toggle(use_imperial: bool) -> Self {
        if use_imperial {
            Units::Imperial
        } else {
            Units::Metric
        }
    }

    /// Value for the provider's `units` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature symbol shown on the card.
    pub fn symbol(self) -> char {
        match self {
            Units::Metric => 'C',
            Units::Imperial => 'F',
        }
    }

    /// Name used in the toggle confirmation message.
    pub fn name(self) -> &'static str {
        match self {
            Units::Metric => "Celsius",
            Units::Imperial => "Fahrenheit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: String,
}

impl WeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }
}

/// Current conditions for a city, extracted from a successful provider
/// response. `city` is the name as queried, not the provider's echo.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub humidity: u8,
    pub description: String,
    pub icon: String,
}

/// Outcome of a weather lookup. Network failures, non-200 provider statuses
/// and malformed payloads all collapse into `Unavailable` — the caller never
/// sees the distinction.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherLookup {
    Report(WeatherReport),
    Unavailable { city: String },
}

/// Client for the OpenWeather current-conditions endpoint.
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }

    /// Fetch current conditions for a city. One best-effort attempt; every
    /// failure mode is converted into `WeatherLookup::Unavailable`.
    pub async fn current(&self, city: &str, units: Units) -> WeatherLookup {
        match self.fetch(city, units).await {
            Ok(report) => WeatherLookup::Report(report),
            Err(e) => {
                log::warn!("Weather lookup failed for '{}': {}", city, e);
                WeatherLookup::Unavailable {
                    city: city.to_string(),
                }
            }
        }
    }

    async fn fetch(&self, city: &str, units: Units) -> Result<WeatherReport> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", units.as_query()),
            ])
            .send()
            .await?;

        // The provider returns a JSON body with an embedded status even on
        // HTTP-level errors, so parse the body before looking at anything else.
        let conditions: CurrentConditions = response.json().await?;

        if conditions.cod.as_u64() != Some(200) {
            bail!("provider returned status {}", conditions.cod);
        }

        let main = conditions.main.context("missing main readings")?;
        let entry = conditions
            .weather
            .into_iter()
            .next()
            .context("missing weather entry")?;

        Ok(WeatherReport {
            city: city.to_string(),
            temperature: main.temp,
            humidity: main.humidity,
            description: entry.description,
            icon: entry.icon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Build a client pointed at the mock server.
    fn client_for(server: &MockServer) -> WeatherClient {
        WeatherClient::new(WeatherConfig {
            base_url: format!("{}/data/2.5/weather", server.uri()),
            api_key: "test-key".to_string(),
        })
    }

    fn success_body() -> serde_json::Value {
        serde_json::json!({
            "cod": 200,
            "name": "Paris",
            "main": { "temp": 15, "humidity": 60, "pressure": 1012 },
            "weather": [
                { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
            ]
        })
    }

    #[tokio::test]
    async fn successful_lookup_returns_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Paris"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let lookup = client.current("Paris", Units::Metric).await;

        assert_eq!(
            lookup,
            WeatherLookup::Report(WeatherReport {
                city: "Paris".to_string(),
                temperature: 15.0,
                humidity: 60,
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn imperial_units_are_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("units", "imperial"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let lookup = client.current("Paris", Units::Imperial).await;
        assert!(matches!(lookup, WeatherLookup::Report(_)));
    }

    #[tokio::test]
    async fn embedded_error_status_is_unavailable() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "cod": "404", "message": "city not found" });
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(body))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let lookup = client.current("Atlantis", Units::Metric).await;

        assert_eq!(
            lookup,
            WeatherLookup::Unavailable {
                city: "Atlantis".to_string()
            }
        );
    }

    #[tokio::test]
    async fn malformed_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let lookup = client.current("Paris", Units::Metric).await;
        assert!(matches!(lookup, WeatherLookup::Unavailable { .. }));
    }

    #[tokio::test]
    async fn ok_status_with_missing_fields_is_unavailable() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "cod": 200 });
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let lookup = client.current("Paris", Units::Metric).await;
        assert!(matches!(lookup, WeatherLookup::Unavailable { .. }));
    }

    #[tokio::test]
    async fn connection_failure_is_unavailable() {
        let client = WeatherClient::new(WeatherConfig {
            base_url: "http://127.0.0.1:1/data/2.5/weather".to_string(),
            api_key: "test-key".to_string(),
        });

        let lookup = client.current("Paris", Units::Metric).await;
        assert_eq!(
            lookup,
            WeatherLookup::Unavailable {
                city: "Paris".to_string()
            }
        );
    }

    #[test]
    fn units_mapping() {
        assert_eq!(Units::from_toggle(false), Units::Metric);
        assert_eq!(Units::from_toggle(true), Units::Imperial);
        assert_eq!(Units::Metric.as_query(), "metric");
        assert_eq!(Units::Imperial.as_query(), "imperial");
        assert_eq!(Units::Metric.symbol(), 'C');
        assert_eq!(Units::Imperial.symbol(), 'F');
        assert_eq!(Units::Metric.name(), "Celsius");
        assert_eq!(Units::Imperial.name(), "Fahrenheit");
    }
}
