// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("API error: {0}")]
  ApiError(String),
  #[error("Upstream returned {status}: {body}")]
  UpstreamStatus { status: u16, body: String },
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Location not found for zipcode: {0}")]
  LocationNotFound(String),
  #[error("Invalid city name: {0}")]
  InvalidCity(String),
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Rate limit exceeded")]
  RateLimitExceeded,
  #[error("Timeout error")]
  TimeoutError,
  #[error("Telemetry error: {0}")]
  TelemetryError(String),
}

impl Error {
  /// Maps a failed send so that timeouts stay distinguishable from other HTTP errors.
  pub fn from_transport(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Error::TimeoutError
    } else {
      Error::HttpError(err)
    }
  }

  /// Provider answered, but had nothing for the requested input.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::LocationNotFound(_))
  }

  /// Worth another attempt: the peer was unreachable, slow or failing on its side.
  pub fn is_retryable(&self) -> bool {
    match self {
      Error::HttpError(e) => e.is_connect() || e.is_timeout() || e.is_request(),
      Error::TimeoutError => true,
      Error::UpstreamStatus { status, .. } => *status >= 500,
      _ => false,
    }
  }

  /// Failed to reach a provider or to read its answer.
  pub fn is_transport(&self) -> bool {
    matches!(
      self,
      Error::HttpError(_)
        | Error::TimeoutError
        | Error::RateLimitExceeded
        | Error::ApiError(_)
        | Error::UpstreamStatus { .. }
        | Error::ParseError(_)
    )
  }
}
