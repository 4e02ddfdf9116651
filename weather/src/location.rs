// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::ProviderConfig, constants::USER_AGENT, models::api::ViaCepResponse,
  LocationResult,
};
use async_trait::async_trait;
use error::Error;
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

#[async_trait]
pub trait LocationProvider: Send + Sync {
  async fn location_by_cep(&self, zipcode: &str) -> Result<LocationResult, Error>;
}

/// Postal-code lookup backed by ViaCEP (`<base>/<cep>/json/`).
#[derive(Debug, Clone)]
pub struct ViaCepClient {
  client: Client,
  base_url: String,
}

impl ViaCepClient {
  pub fn new(config: &ProviderConfig) -> Result<Self, Error> {
    let client = Client::builder()
      .timeout(config.timeout)
      .user_agent(USER_AGENT)
      .build()?;

    Ok(Self {
      client,
      base_url: config.viacep_url.clone(),
    })
  }

  fn endpoint(&self, zipcode: &str) -> String {
    format!("{}/{}/json/", self.base_url, zipcode)
  }
}

#[async_trait]
impl LocationProvider for ViaCepClient {
  #[instrument(name = "GetLocationByCEP", skip(self))]
  async fn location_by_cep(&self, zipcode: &str) -> Result<LocationResult, Error> {
    let request = telemetry::inject_context(self.client.get(self.endpoint(zipcode)));
    let response = request.send().await.map_err(|e| {
      error!(zipcode, error = %e, "ViaCEP request failed");
      Error::from_transport(e)
    })?;

    let status = response.status();
    if !status.is_success() {
      warn!(zipcode, %status, "ViaCEP answered with an error status");
      return Err(Error::ApiError(format!(
        "ViaCEP request failed: {}",
        status
      )));
    }

    let body: ViaCepResponse = response.json().await.map_err(|e| {
      error!(zipcode, error = %e, "Failed to decode ViaCEP response");
      Error::ParseError(format!("ViaCEP response: {}", e))
    })?;

    if body.erro || body.localidade.trim().is_empty() {
      warn!(zipcode, "ViaCEP has no locality for zipcode");
      return Err(Error::LocationNotFound(zipcode.to_string()));
    }

    debug!(zipcode, city = %body.localidade, "Resolved location");
    Ok(LocationResult::new(body.localidade))
  }
}
