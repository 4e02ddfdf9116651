// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Orchestration service: zipcode → city → current temperature in three units.
pub mod handler;

use actix_web::web;
use error::Error;
use std::sync::Arc;
use weather::{LocationProvider, ProviderConfig, ViaCepClient, WeatherApiClient, WeatherProvider};

pub use handler::{handle_temperature, TemperatureError};

pub const SERVICE_NAME: &str = "service-B";

/// Read-only per-process state shared by every request.
#[derive(Clone)]
pub struct AppState {
  pub(crate) location: Arc<dyn LocationProvider>,
  pub(crate) weather: Arc<dyn WeatherProvider>,
}

impl AppState {
  pub fn new(location: Arc<dyn LocationProvider>, weather: Arc<dyn WeatherProvider>) -> Self {
    Self { location, weather }
  }

  pub fn from_config(config: &ProviderConfig) -> Result<Self, Error> {
    Ok(Self::new(
      Arc::new(ViaCepClient::new(config)?),
      Arc::new(WeatherApiClient::new(config)?),
    ))
  }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
  cfg.route("/cep/{zipcode}", web::get().to(handle_temperature));
}
