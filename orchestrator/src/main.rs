// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use config::Config;
use orchestrator::{configure, AppState, SERVICE_NAME};
use tracing::info;
use weather::ProviderConfig;

#[actix_web::main]
async fn main() -> Result<()> {
  let config = Config::load().context("Failed to load configuration")?;
  let _telemetry = telemetry::init(SERVICE_NAME, &config.telemetry)?;

  let providers = ProviderConfig::from_settings(&config.orchestrator, &config.http)
    .context("Invalid provider configuration")?;
  let state = web::Data::new(AppState::from_config(&providers)?);

  let bind_addr = config.orchestrator.bind_addr.clone();
  info!(addr = %bind_addr, "Starting orchestration service");

  HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
    .bind(bind_addr.as_str())
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await
    .context("Orchestration service stopped unexpectedly")?;

  info!("Orchestration service stopped");
  Ok(())
}
