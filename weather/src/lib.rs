// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod location;
pub mod models;
pub mod service;

pub use config::ProviderConfig;
pub use location::{LocationProvider, ViaCepClient};
pub use models::temperature::{
  celsius_to_fahrenheit, celsius_to_kelvin, format_temperature, LocationResult, TemperatureReport,
  WeatherReading,
};
pub use service::{WeatherApiClient, WeatherProvider};

pub mod constants {
  pub const USER_AGENT: &str = concat!("cep-weather/", env!("CARGO_PKG_VERSION"));
  pub const FAHRENHEIT_SCALE: f64 = 1.8;
  pub const FAHRENHEIT_OFFSET: f64 = 32.0;
  /// Rounded offset; downstream consumers expect 273, not 273.15.
  pub const KELVIN_OFFSET: f64 = 273.0;
}
