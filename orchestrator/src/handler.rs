// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::AppState;
use actix_web::{
  http::{header::ContentType, StatusCode},
  web, HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;
use tracing::{error, info, info_span, Instrument};
use weather::TemperatureReport;

/// Failures surfaced to the caller. The display text is the response body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemperatureError {
  #[error("cannot find zipCode")]
  ZipcodeNotFound,
  #[error("could not get weather")]
  WeatherUnavailable,
  #[error("could not get temperature")]
  Serialization,
}

impl ResponseError for TemperatureError {
  fn status_code(&self) -> StatusCode {
    match self {
      TemperatureError::ZipcodeNotFound => StatusCode::NOT_FOUND,
      TemperatureError::WeatherUnavailable | TemperatureError::Serialization => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code())
      .content_type(ContentType::plaintext())
      .body(self.to_string())
  }
}

/// `GET /cep/{zipcode}`
///
/// The zipcode is expected to be format-checked by the caller; here it is
/// only "found" or "not found".
pub async fn handle_temperature(
  req: HttpRequest,
  zipcode: web::Path<String>,
  state: web::Data<AppState>,
) -> Result<HttpResponse, TemperatureError> {
  let zipcode = zipcode.into_inner();
  let span = info_span!("HandleTemperature", zipcode = %zipcode);
  telemetry::set_remote_parent(&span, req.headers());

  let report = temperature_report(&state, &zipcode).instrument(span).await?;

  let body = serde_json::to_vec(&report).map_err(|e| {
    error!(zipcode = %zipcode, error = %e, "Failed to serialize temperature report");
    TemperatureError::Serialization
  })?;

  Ok(
    HttpResponse::Ok()
      .content_type(ContentType::json())
      .body(body),
  )
}

async fn temperature_report(
  state: &AppState,
  zipcode: &str,
) -> Result<TemperatureReport, TemperatureError> {
  let location = state
    .location
    .location_by_cep(zipcode)
    .await
    .map_err(|e| {
      error!(
        zipcode,
        error = %e,
        not_found = e.is_not_found(),
        transport = e.is_transport(),
        "Failed to fetch location by zipcode"
      );
      TemperatureError::ZipcodeNotFound
    })?;

  let reading = state
    .weather
    .weather_by_city(&location.city_name)
    .await
    .map_err(|e| {
      error!(city = %location.city_name, error = %e, "Failed to fetch temperature by location");
      TemperatureError::WeatherUnavailable
    })?;

  let report = TemperatureReport::new(location, reading);
  info!(zipcode, city = %report.city, celsius = %report.celsius, "Temperature resolved");
  Ok(report)
}
