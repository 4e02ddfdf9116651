// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use config::Config;
use input::{configure, AppState, OrchestratorClient, SERVICE_NAME};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<()> {
  let config = Config::load().context("Failed to load configuration")?;
  let _telemetry = telemetry::init(SERVICE_NAME, &config.telemetry)?;

  let client = OrchestratorClient::from_settings(&config.input, &config.http)
    .context("Invalid orchestration service configuration")?;
  let state = web::Data::new(AppState::new(client));

  let bind_addr = config.input.bind_addr.clone();
  info!(
    addr = %bind_addr,
    orchestrator = %config.input.orchestrator_url(),
    "Starting input service"
  );

  HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
    .bind(bind_addr.as_str())
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await
    .context("Input service stopped unexpectedly")?;

  info!("Input service stopped");
  Ok(())
}
