// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use serde::Deserialize;
use std::{env, fmt::Display, fs, path::Path, str::FromStr, time::Duration};
use tracing::instrument;

/// Names a TOML file read before the environment overrides are applied.
pub const CONFIG_PATH_VAR: &str = "CEP_CONFIG";

const DEFAULT_HOST: &str = "localhost";
const ZIPKIN_PORT: u16 = 9411;
const ORCHESTRATOR_PORT: u16 = 9090;
const VIACEP_URL: &str = "http://viacep.com.br/ws";
const WEATHER_API_URL: &str = "http://api.weatherapi.com/v1/current.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub telemetry: TelemetryConfig,
  pub http: HttpConfig,
  pub input: InputConfig,
  pub orchestrator: OrchestratorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
  pub enabled: bool,
  pub zipkin_host: String,
  pub zipkin_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
  pub timeout_secs: u64,
  pub retry_attempts: u32,
  pub retry_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
  pub bind_addr: String,
  pub orchestrator_host: String,
  pub orchestrator_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
  pub bind_addr: String,
  pub viacep_url: String,
  pub weather_api_url: String,
  pub weather_api_key: String,
}

impl Default for TelemetryConfig {
  fn default() -> Self {
    Self {
      enabled: true,
      zipkin_host: DEFAULT_HOST.into(),
      zipkin_port: ZIPKIN_PORT,
    }
  }
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      timeout_secs: 10,
      retry_attempts: 0,
      retry_delay_ms: 1000,
    }
  }
}

impl Default for InputConfig {
  fn default() -> Self {
    Self {
      bind_addr: "0.0.0.0:8080".into(),
      orchestrator_host: DEFAULT_HOST.into(),
      orchestrator_port: ORCHESTRATOR_PORT,
    }
  }
}

impl Default for OrchestratorConfig {
  fn default() -> Self {
    Self {
      bind_addr: format!("0.0.0.0:{}", ORCHESTRATOR_PORT),
      viacep_url: VIACEP_URL.into(),
      weather_api_url: WEATHER_API_URL.into(),
      weather_api_key: String::new(),
    }
  }
}

impl TelemetryConfig {
  pub fn collector_endpoint(&self) -> String {
    format!(
      "http://{}:{}/api/v2/spans",
      self.zipkin_host, self.zipkin_port
    )
  }
}

impl HttpConfig {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  pub fn retry_delay(&self) -> Duration {
    Duration::from_millis(self.retry_delay_ms)
  }
}

impl InputConfig {
  pub fn orchestrator_url(&self) -> String {
    format!(
      "http://{}:{}",
      self.orchestrator_host, self.orchestrator_port
    )
  }
}

impl OrchestratorConfig {
  pub fn validate(&self) -> Result<(), Error> {
    if self.weather_api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }
    if self.viacep_url.trim().is_empty() || self.weather_api_url.trim().is_empty() {
      return Err(Error::ConfigError("provider URLs cannot be empty".into()));
    }
    Ok(())
  }
}

impl Config {
  /// Reads the file named by `CEP_CONFIG` when set, then applies the process environment.
  pub fn load() -> Result<Self, Error> {
    let mut config = match env::var(CONFIG_PATH_VAR) {
      Ok(path) => Self::from_file(path)?,
      Err(_) => Self::default(),
    };
    config.apply_overrides(|key| env::var(key).ok())?;
    Ok(config)
  }

  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let content = fs::read_to_string(path)?;
    let config = Self::from_toml(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  pub fn from_toml(content: &str) -> Result<Self, Error> {
    toml::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))
  }

  pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), Error>
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(host) = lookup("URL_ZIPKIN") {
      self.telemetry.zipkin_host = host;
    }
    if let Some(enabled) = lookup("TRACING_ENABLED") {
      self.telemetry.enabled = parse_flag("TRACING_ENABLED", &enabled)?;
    }
    if let Some(host) = lookup("URL_TEMP") {
      self.input.orchestrator_host = host;
    }
    if let Some(addr) = lookup("BIND_ADDR") {
      self.input.bind_addr = addr.clone();
      self.orchestrator.bind_addr = addr;
    }
    if let Some(secs) = lookup("HTTP_TIMEOUT_SECS") {
      self.http.timeout_secs = parse_value("HTTP_TIMEOUT_SECS", &secs)?;
    }
    if let Some(attempts) = lookup("RETRY_ATTEMPTS") {
      self.http.retry_attempts = parse_value("RETRY_ATTEMPTS", &attempts)?;
    }
    if let Some(delay) = lookup("RETRY_DELAY_MS") {
      self.http.retry_delay_ms = parse_value("RETRY_DELAY_MS", &delay)?;
    }
    if let Some(url) = lookup("VIACEP_URL") {
      self.orchestrator.viacep_url = url;
    }
    if let Some(url) = lookup("WEATHER_API_URL") {
      self.orchestrator.weather_api_url = url;
    }
    if let Some(key) = lookup("WEATHER_API_KEY") {
      self.orchestrator.weather_api_key = key;
    }
    Ok(())
  }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, Error>
where
  T: FromStr,
  T::Err: Display,
{
  value
    .trim()
    .parse()
    .map_err(|e| Error::ConfigError(format!("{}={:?}: {}", key, value, e)))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, Error> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(Error::ConfigError(format!(
      "{}={:?}: expected a boolean",
      key, value
    ))),
  }
}
