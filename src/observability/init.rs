//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with OpenTelemetry integration, wiring
//! span filtering, export, and file placement together.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::export;
use crate::Config;

/// Service name attached to exported spans.
const SERVICE_NAME: &str = "velobook";

/// Initializes the tracing subscriber with file-based span export.
///
/// Spans are filtered at the level named by `config.trace_level` (default
/// `"info"`) and written to `velobook-trace.json` in the plugin data
/// directory. Idempotent: only the first call installs a subscriber, and a
/// data directory that cannot be created disables tracing silently, since
/// observability is optional.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let trace_file = data_dir.join("velobook-trace.json");
    let provider = export::create_tracer_provider(trace_file, SERVICE_NAME.to_string(), resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
