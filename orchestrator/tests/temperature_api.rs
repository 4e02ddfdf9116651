// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! `GET /cep/{zipcode}` against stub providers and against mocked HTTP providers.

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use error::Error;
use orchestrator::{configure, AppState};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use std::time::Duration;
use weather::{
  LocationProvider, LocationResult, ProviderConfig, WeatherProvider, WeatherReading,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct StubLocation {
  city: Option<&'static str>,
}

#[async_trait]
impl LocationProvider for StubLocation {
  async fn location_by_cep(&self, zipcode: &str) -> Result<LocationResult, Error> {
    self
      .city
      .map(LocationResult::new)
      .ok_or_else(|| Error::LocationNotFound(zipcode.to_string()))
  }
}

#[derive(Default)]
struct StubWeather {
  celsius: Option<f64>,
  calls: AtomicUsize,
}

#[async_trait]
impl WeatherProvider for StubWeather {
  async fn weather_by_city(&self, _city: &str) -> Result<WeatherReading, Error> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    self
      .celsius
      .map(WeatherReading::new)
      .ok_or_else(|| Error::ApiError("503 Service Unavailable".into()))
  }
}

fn stub_state(city: Option<&'static str>, weather: Arc<StubWeather>) -> AppState {
  AppState::new(Arc::new(StubLocation { city }), weather)
}

#[actix_web::test]
async fn returns_temperature_in_three_units() {
  let weather = Arc::new(StubWeather {
    celsius: Some(28.5),
    ..Default::default()
  });
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(stub_state(Some("São Paulo"), weather)))
      .configure(configure),
  )
  .await;

  let req = test::TestRequest::get().uri("/cep/29902555").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(
    resp.headers().get("content-type").unwrap(),
    "application/json"
  );
  let body = test::read_body(resp).await;
  assert_eq!(
    std::str::from_utf8(&body).unwrap(),
    r#"{"city":"São Paulo","temp_C":"28.5","temp_F":"83.3","temp_K":"301.5"}"#
  );
}

#[actix_web::test]
async fn unknown_zipcode_is_404_without_weather_call() {
  let weather = Arc::new(StubWeather {
    celsius: Some(20.0),
    ..Default::default()
  });
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(stub_state(None, weather.clone())))
      .configure(configure),
  )
  .await;

  let req = test::TestRequest::get().uri("/cep/99999999").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body = test::read_body(resp).await;
  assert_eq!(&body[..], b"cannot find zipCode");
  assert_eq!(weather.calls.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn weather_failure_is_500_without_partial_data() {
  let weather = Arc::new(StubWeather::default());
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(stub_state(Some("Recife"), weather.clone())))
      .configure(configure),
  )
  .await;

  let req = test::TestRequest::get().uri("/cep/50030230").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body = test::read_body(resp).await;
  assert_eq!(&body[..], b"could not get weather");
  assert_eq!(weather.calls.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn only_get_is_routed() {
  let weather = Arc::new(StubWeather::default());
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(stub_state(Some("Recife"), weather.clone())))
      .configure(configure),
  )
  .await;

  let req = test::TestRequest::post().uri("/cep/50030230").to_request();
  let resp = test::call_service(&app, req).await;

  assert!(resp.status().is_client_error());
  assert_eq!(weather.calls.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn resolves_through_http_providers() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/ws/29902555/json/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "cep": "29902-555",
      "localidade": "São Paulo"
    })))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/v1/current.json"))
    .and(query_param("q", "São Paulo"))
    .and(query_param("key", "test-key"))
    .and(query_param("aqi", "no"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "current": { "temp_c": 28.5 }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let providers = ProviderConfig::new(
    format!("{}/ws", server.uri()),
    format!("{}/v1/current.json", server.uri()),
    "test-key",
    Duration::from_secs(2),
  )
  .unwrap();
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(AppState::from_config(&providers).unwrap()))
      .configure(configure),
  )
  .await;

  let req = test::TestRequest::get().uri("/cep/29902555").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let report: weather::TemperatureReport = test::read_body_json(resp).await;
  assert_eq!(report.city, "São Paulo");
  assert_eq!(report.celsius, "28.5");
  assert_eq!(report.fahrenheit, "83.3");
  assert_eq!(report.kelvin, "301.5");
}

#[actix_web::test]
async fn viacep_outage_is_reported_as_not_found() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/ws/01001000/json/"))
    .respond_with(ResponseTemplate::new(502))
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/v1/current.json"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&server)
    .await;

  let providers = ProviderConfig::new(
    format!("{}/ws", server.uri()),
    format!("{}/v1/current.json", server.uri()),
    "test-key",
    Duration::from_secs(2),
  )
  .unwrap();
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(AppState::from_config(&providers).unwrap()))
      .configure(configure),
  )
  .await;

  let req = test::TestRequest::get().uri("/cep/01001000").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body = test::read_body(resp).await;
  assert_eq!(&body[..], b"cannot find zipCode");
}
