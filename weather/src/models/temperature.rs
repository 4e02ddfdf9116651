// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::{FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE, KELVIN_OFFSET};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationResult {
  pub city_name: String,
}

/// Current temperature in Celsius. Other units are always derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
  pub celsius: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureReport {
  pub city: String,
  #[serde(rename = "temp_C")]
  pub celsius: String,
  #[serde(rename = "temp_F")]
  pub fahrenheit: String,
  #[serde(rename = "temp_K")]
  pub kelvin: String,
}

impl LocationResult {
  pub fn new(city_name: impl Into<String>) -> Self {
    Self {
      city_name: city_name.into(),
    }
  }
}

impl WeatherReading {
  pub fn new(celsius: f64) -> Self {
    Self { celsius }
  }

  pub fn fahrenheit(&self) -> f64 {
    self.celsius * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
  }

  pub fn kelvin(&self) -> f64 {
    self.celsius + KELVIN_OFFSET
  }
}

impl TemperatureReport {
  pub fn new(location: LocationResult, reading: WeatherReading) -> Self {
    Self {
      city: location.city_name,
      celsius: format_temperature(reading.celsius),
      fahrenheit: celsius_to_fahrenheit(reading.celsius),
      kelvin: celsius_to_kelvin(reading.celsius),
    }
  }
}

pub fn format_temperature(value: f64) -> String {
  format!("{:.1}", value)
}

pub fn celsius_to_fahrenheit(celsius: f64) -> String {
  format_temperature(WeatherReading::new(celsius).fahrenheit())
}

pub fn celsius_to_kelvin(celsius: f64) -> String {
  format_temperature(WeatherReading::new(celsius).kelvin())
}
