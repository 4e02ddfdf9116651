// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Logging and distributed tracing shared by both services.
//!
//! Spans created with `tracing` are printed by the `fmt` layer, recorded by
//! OpenTelemetry and, when enabled, exported to a Zipkin collector. Trace context travels between
//! services as B3 headers.
mod propagation;
mod subscriber;

pub use crate::{
  propagation::{extract_context, inject_context, inject_context_from, set_remote_parent},
  subscriber::{init, install_propagator, local_tracer, TelemetryGuard},
};
