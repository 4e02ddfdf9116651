// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::ProviderConfig, constants::USER_AGENT, models::api::WeatherApiResponse,
  WeatherReading,
};
use async_trait::async_trait;
use error::Error;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, instrument, warn};
use url::Url;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
  async fn weather_by_city(&self, city: &str) -> Result<WeatherReading, Error>;
}

/// Current conditions from WeatherAPI.com.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
  client: Client,
  base_url: String,
  api_key: String,
}

impl WeatherApiClient {
  pub fn new(config: &ProviderConfig) -> Result<Self, Error> {
    let client = Client::builder()
      .timeout(config.timeout)
      .user_agent(USER_AGENT)
      .build()?;

    Ok(Self {
      client,
      base_url: config.weather_api_url.clone(),
      api_key: config.api_key.clone(),
    })
  }

  fn build_api_url(&self, city: &str) -> Result<Url, Error> {
    Url::parse_with_params(
      &self.base_url,
      &[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")],
    )
    .map_err(|e| Error::ConfigError(format!("Invalid weather API URL: {}", e)))
  }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
  #[instrument(name = "GetWeatherByCity", skip(self))]
  async fn weather_by_city(&self, city: &str) -> Result<WeatherReading, Error> {
    if city.trim().is_empty() {
      return Err(Error::InvalidCity("City name cannot be empty".into()));
    }

    let url = self.build_api_url(city)?;
    let response = telemetry::inject_context(self.client.get(url))
      .send()
      .await
      .map_err(|e| {
        error!(city, error = %e, "Weather request failed");
        Error::from_transport(e)
      })?;

    match response.status() {
      StatusCode::OK => (),
      StatusCode::TOO_MANY_REQUESTS => return Err(Error::RateLimitExceeded),
      status => {
        warn!(city, %status, "Weather API answered with an error status");
        return Err(Error::ApiError(format!(
          "Weather API request failed: {}",
          status
        )));
      }
    }

    let data: WeatherApiResponse = response.json().await.map_err(|e| {
      error!(city, error = %e, "Failed to decode weather response");
      Error::ParseError(format!("Weather API response: {}", e))
    })?;

    debug!(city, celsius = data.current.temp_c, "Fetched current weather");
    Ok(WeatherReading::new(data.current.temp_c))
  }
}
