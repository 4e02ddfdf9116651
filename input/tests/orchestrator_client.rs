// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Retry and timeout policy of `OrchestratorClient`.

use error::Error;
use input::OrchestratorClient;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, retry_attempts: u32) -> OrchestratorClient {
  OrchestratorClient::builder()
    .base_url(server.uri())
    .timeout(Duration::from_millis(300))
    .retry_attempts(retry_attempts)
    .retry_delay(Duration::from_millis(10))
    .build()
    .unwrap()
}

#[tokio::test]
async fn retries_server_errors() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/cep/29902555"))
    .respond_with(ResponseTemplate::new(503))
    .up_to_n_times(1)
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/cep/29902555"))
    .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"city":"Vitória"}"#))
    .expect(1)
    .mount(&server)
    .await;

  let body = client(&server, 1)
    .temperature_by_zipcode("29902555")
    .await
    .unwrap();

  assert_eq!(body, r#"{"city":"Vitória"}"#.as_bytes().to_vec());
}

#[tokio::test]
async fn does_not_retry_client_errors() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/cep/99999999"))
    .respond_with(ResponseTemplate::new(404).set_body_string("cannot find zipCode"))
    .expect(1)
    .mount(&server)
    .await;

  let err = client(&server, 3)
    .temperature_by_zipcode("99999999")
    .await
    .unwrap_err();

  match err {
    Error::UpstreamStatus { status, body } => {
      assert_eq!(status, 404);
      assert_eq!(body, "cannot find zipCode");
    }
    other => panic!("unexpected error: {}", other),
  }
}

#[tokio::test]
async fn no_retry_by_default() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(500).set_body_string("could not get weather"))
    .expect(1)
    .mount(&server)
    .await;

  let client = OrchestratorClient::builder()
    .base_url(server.uri())
    .build()
    .unwrap();
  let err = client.temperature_by_zipcode("29902555").await.unwrap_err();

  assert!(err.to_string().contains("could not get weather"));
}

#[tokio::test]
async fn slow_orchestrator_times_out() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
    .mount(&server)
    .await;

  let err = client(&server, 0)
    .temperature_by_zipcode("29902555")
    .await
    .unwrap_err();

  assert!(matches!(err, Error::TimeoutError), "unexpected error: {}", err);
}
