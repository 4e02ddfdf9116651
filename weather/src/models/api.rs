// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

/// ViaCEP answers unknown codes with `{"erro": true}`, so every field is optional.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ViaCepResponse {
  #[serde(default)]
  pub localidade: String,
  #[serde(default)]
  pub erro: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherApiResponse {
  pub current: CurrentWeather,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CurrentWeather {
  pub temp_c: f64,
}
