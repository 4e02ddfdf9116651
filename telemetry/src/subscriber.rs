// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use config::TelemetryConfig;
use error::Error;
use opentelemetry::{global, trace::TracerProvider as _};
use opentelemetry_sdk::{
  runtime,
  trace::{Tracer, TracerProvider},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Flushes buffered spans to the collector when dropped.
#[must_use = "spans are only flushed when the guard is dropped"]
pub struct TelemetryGuard {
  exporting: bool,
}

impl Drop for TelemetryGuard {
  fn drop(&mut self) {
    if self.exporting {
      global::shutdown_tracer_provider();
    }
  }
}

/// Installs the global subscriber and the B3 propagator.
///
/// Spans are exported to Zipkin only when `config.enabled` is set. Otherwise
/// they are recorded by a local tracer, so inbound B3 headers are still
/// forwarded on outbound requests.
pub fn init(service_name: &str, config: &TelemetryConfig) -> Result<TelemetryGuard, Error> {
  install_propagator();

  let tracer = if config.enabled {
    opentelemetry_zipkin::new_pipeline()
      .with_service_name(service_name)
      .with_collector_endpoint(config.collector_endpoint())
      .install_batch(runtime::TokioCurrentThread)
      .map_err(|e| Error::TelemetryError(e.to_string()))?
  } else {
    local_tracer(service_name)
  };

  tracing_subscriber::registry()
    .with(env_filter())
    .with(fmt_layer())
    .with(tracing_opentelemetry::layer().with_tracer(tracer))
    .try_init()
    .map_err(|e| Error::TelemetryError(e.to_string()))?;

  tracing::info!(
    service = service_name,
    exporting = config.enabled,
    collector = %config.collector_endpoint(),
    "Telemetry initialized"
  );

  Ok(TelemetryGuard {
    exporting: config.enabled,
  })
}

/// Sets the Zipkin B3 propagator used by `extract_context` and `inject_context`.
pub fn install_propagator() {
  global::set_text_map_propagator(opentelemetry_zipkin::Propagator::new());
}

/// A tracer that assigns span ids but never exports. Its provider becomes the global one.
pub fn local_tracer(service_name: &str) -> Tracer {
  let provider = TracerProvider::builder().build();
  let tracer = provider.tracer(service_name.to_string());
  global::set_tracer_provider(provider);
  tracer
}

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(debug_assertions)]
fn fmt_layer<S>() -> fmt::Layer<S> {
  fmt::layer()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
}

#[cfg(not(debug_assertions))]
fn fmt_layer<S>() -> fmt::Layer<S> {
  fmt::layer()
}
