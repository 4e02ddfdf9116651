// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{client::OrchestratorClient, settings::ClientConfig};
use error::Error;
use std::time::Duration;

#[derive(Default)]
pub struct OrchestratorClientBuilder {
  pub(crate) config: ClientConfig,
}

impl OrchestratorClientBuilder {
  pub fn base_url(mut self, url: impl Into<String>) -> Self {
    self.config.base_url = url.into();
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn retry_attempts(mut self, attempts: u32) -> Self {
    self.config.retry_attempts = attempts;
    self
  }

  pub fn retry_delay(mut self, delay: Duration) -> Self {
    self.config.retry_delay = delay;
    self
  }

  pub fn build(mut self) -> Result<OrchestratorClient, Error> {
    let base_url = self.config.base_url.trim().trim_end_matches('/');
    if base_url.is_empty() {
      return Err(Error::ConfigError(
        "Orchestration service URL cannot be empty".into(),
      ));
    }
    self.config.base_url = base_url.to_string();

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(Error::HttpError)?;

    Ok(OrchestratorClient {
      config: self.config,
      client,
    })
  }
}
