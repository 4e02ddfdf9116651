// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{builders::OrchestratorClientBuilder, settings::ClientConfig};
use config::{HttpConfig, InputConfig};
use error::Error;
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

/// HTTP client for the orchestration service's `GET /cep/{zipcode}`.
#[derive(Clone, Debug)]
pub struct OrchestratorClient {
  pub(crate) config: ClientConfig,
  pub(crate) client: Client,
}

impl OrchestratorClient {
  pub fn builder() -> OrchestratorClientBuilder {
    OrchestratorClientBuilder::default()
  }

  pub fn from_settings(input: &InputConfig, http: &HttpConfig) -> Result<Self, Error> {
    Self::builder()
      .base_url(input.orchestrator_url())
      .timeout(http.timeout())
      .retry_attempts(http.retry_attempts)
      .retry_delay(http.retry_delay())
      .build()
  }

  /// Returns the orchestration service's response body untouched.
  #[instrument(name = "GetWeatherByZipCode", skip(self))]
  pub async fn temperature_by_zipcode(&self, zipcode: &str) -> Result<Vec<u8>, Error> {
    let url = format!("{}/cep/{}", self.config.base_url, zipcode);

    for attempt in 0..=self.config.retry_attempts {
      match self.try_fetch(&url).await {
        Ok(body) => {
          debug!(bytes = body.len(), "Temperature received");
          return Ok(body);
        }
        Err(e) => {
          if attempt == self.config.retry_attempts || !e.is_retryable() {
            error!(url = %url, error = %e, "Unable to fetch temperature");
            return Err(e);
          }
          warn!("Attempt {} failed: {}. Retrying...", attempt + 1, e);
          tokio::time::sleep(self.config.retry_delay).await;
        }
      }
    }

    Err(Error::ApiError("Max retry attempts reached".into()))
  }

  async fn try_fetch(&self, url: &str) -> Result<Vec<u8>, Error> {
    let response = telemetry::inject_context(self.client.get(url))
      .send()
      .await
      .map_err(Error::from_transport)?;

    let status = response.status();
    let body = response.bytes().await.map_err(Error::HttpError)?;

    if !status.is_success() {
      return Err(Error::UpstreamStatus {
        status: status.as_u16(),
        body: String::from_utf8_lossy(&body).trim().to_string(),
      });
    }

    Ok(body.to_vec())
  }
}
