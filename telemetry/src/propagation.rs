// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use actix_web::http::header::HeaderMap;
use opentelemetry::{global, propagation::Extractor, Context};
use std::collections::HashMap;
use tracing_opentelemetry::OpenTelemetrySpanExt;

struct HeaderExtractor<'a>(&'a HeaderMap);

impl Extractor for HeaderExtractor<'_> {
  fn get(&self, key: &str) -> Option<&str> {
    self.0.get(key).and_then(|value| value.to_str().ok())
  }

  fn keys(&self) -> Vec<&str> {
    self.0.keys().map(|name| name.as_str()).collect()
  }
}

/// Reads the caller's trace context from inbound request headers.
pub fn extract_context(headers: &HeaderMap) -> Context {
  global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(headers)))
}

/// Makes `span` a child of the trace carried by inbound request headers.
pub fn set_remote_parent(span: &tracing::Span, headers: &HeaderMap) {
  span.set_parent(extract_context(headers));
}

/// Adds trace headers for the current span to an outbound request.
pub fn inject_context(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
  inject_context_from(&tracing::Span::current().context(), request)
}

pub fn inject_context_from(
  cx: &Context,
  request: reqwest::RequestBuilder,
) -> reqwest::RequestBuilder {
  let mut carrier: HashMap<String, String> = HashMap::new();
  global::get_text_map_propagator(|propagator| propagator.inject_context(cx, &mut carrier));

  carrier
    .into_iter()
    .fold(request, |request, (name, value)| request.header(name, value))
}
