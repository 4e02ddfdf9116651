// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{validate::is_valid_zipcode, AppState};
use actix_web::{
  http::{header::ContentType, StatusCode},
  web, HttpRequest, HttpResponse, ResponseError,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, info_span, warn, Instrument};

/// A missing or `null` `cep` reads as the empty string and fails validation.
#[derive(Debug, Deserialize)]
pub struct ZipcodeInput {
  #[serde(default)]
  pub cep: Option<String>,
}

#[derive(Debug, Error)]
pub enum ZipcodeError {
  /// Malformed request JSON. Kept as a 500 for compatibility with existing clients.
  #[error("{0}")]
  Decode(String),
  #[error("invalid zipcode")]
  InvalidZipcode,
  #[error("unable to fetch temperature by zipcode: {0}")]
  Upstream(String),
}

impl ResponseError for ZipcodeError {
  fn status_code(&self) -> StatusCode {
    match self {
      ZipcodeError::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
      ZipcodeError::Decode(_) | ZipcodeError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code())
      .content_type(ContentType::plaintext())
      .body(self.to_string())
  }
}

/// `POST /cep` with `{ "cep": "<8 digits>" }`.
pub async fn handle_zipcode(
  req: HttpRequest,
  body: web::Bytes,
  state: web::Data<AppState>,
) -> Result<HttpResponse, ZipcodeError> {
  let span = info_span!("handleZipcode");
  telemetry::set_remote_parent(&span, req.headers());

  relay_temperature(&state, &body).instrument(span).await
}

async fn relay_temperature(state: &AppState, body: &[u8]) -> Result<HttpResponse, ZipcodeError> {
  let input: ZipcodeInput = serde_json::from_slice(body).map_err(|e| {
    error!(
      body = %String::from_utf8_lossy(body),
      error = %e,
      "Unable to decode zipcode request"
    );
    ZipcodeError::Decode(e.to_string())
  })?;

  let zipcode = input.cep.unwrap_or_default();
  if !is_valid_zipcode(&zipcode) {
    warn!(zipcode = %zipcode, "Rejected invalid zipcode");
    return Err(ZipcodeError::InvalidZipcode);
  }

  let temperature = state
    .client
    .temperature_by_zipcode(&zipcode)
    .await
    .map_err(|e| {
      error!(zipcode = %zipcode, error = %e, "Orchestration service call failed");
      ZipcodeError::Upstream(e.to_string())
    })?;

  info!(zipcode = %zipcode, "Relaying temperature");
  Ok(
    HttpResponse::Ok()
      .content_type(ContentType::json())
      .body(temperature),
  )
}
