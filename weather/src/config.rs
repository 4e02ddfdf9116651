// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use config::{HttpConfig, OrchestratorConfig};
use error::Error;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ProviderConfig {
  pub(crate) viacep_url: String,
  pub(crate) weather_api_url: String,
  pub(crate) api_key: String,
  pub(crate) timeout: Duration,
}

impl ProviderConfig {
  pub fn new(
    viacep_url: impl Into<String>,
    weather_api_url: impl Into<String>,
    api_key: impl Into<String>,
    timeout: Duration,
  ) -> Result<Self, Error> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    Ok(Self {
      viacep_url: viacep_url.into().trim_end_matches('/').to_string(),
      weather_api_url: weather_api_url.into(),
      api_key,
      timeout,
    })
  }

  pub fn from_settings(settings: &OrchestratorConfig, http: &HttpConfig) -> Result<Self, Error> {
    settings.validate()?;
    Self::new(
      settings.viacep_url.as_str(),
      settings.weather_api_url.as_str(),
      settings.weather_api_key.as_str(),
      http.timeout(),
    )
  }
}
