// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Input service: validates a zipcode and relays it to the orchestration service.
mod builders;
mod client;
mod settings;
pub mod handler;
pub mod validate;

use actix_web::web;

pub use crate::{
  builders::OrchestratorClientBuilder,
  client::OrchestratorClient,
  handler::{handle_zipcode, ZipcodeError, ZipcodeInput},
  validate::is_valid_zipcode,
};

pub const SERVICE_NAME: &str = "service-A";

#[derive(Clone)]
pub struct AppState {
  pub(crate) client: OrchestratorClient,
}

impl AppState {
  pub fn new(client: OrchestratorClient) -> Self {
    Self { client }
  }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
  cfg.route("/cep", web::post().to(handle_zipcode));
}
