//! JSON-lines span exporter with size-capped rollover.
//!
//! Implements a custom OpenTelemetry `SpanExporter` that appends one JSON
//! object per finished span to a file. When the file grows past the size cap
//! it is renamed to a single `.old` sibling (replacing any previous one), so
//! disk usage stays bounded without a backup-retention scheme.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;

/// Size cap before the trace file is rolled over (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Span exporter writing one JSON line per span.
struct JsonLineExporter {
    file_path: PathBuf,
    service_name: String,
    is_shutdown: AtomicBool,
}

impl JsonLineExporter {
    fn new(file_path: PathBuf, service_name: String) -> Self {
        Self {
            file_path,
            service_name,
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Appends the batch to the trace file, rolling it over first if it has
    /// outgrown the cap.
    fn write_batch(&self, batch: &[SpanData]) -> std::io::Result<()> {
        self.roll_over_if_needed()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        for span in batch {
            let line = self.format_span(span);
            writeln!(file, "{line}")?;
        }
        file.flush()
    }

    fn roll_over_if_needed(&self) -> std::io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.file_path) else {
            return Ok(());
        };
        if metadata.len() > MAX_FILE_SIZE_BYTES {
            let rolled = self.file_path.with_extension("json.old");
            fs::rename(&self.file_path, rolled)?;
        }
        Ok(())
    }

    /// Flattens a span into a single JSON object.
    ///
    /// Keeps the fields needed to reconstruct a trace tree (ids, parent,
    /// timing, attributes, status); events and links are not recorded.
    fn format_span(&self, span: &SpanData) -> serde_json::Value {
        let attributes: serde_json::Map<String, serde_json::Value> = span
            .attributes
            .iter()
            .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
            .collect();

        let (status, status_message) = match &span.status {
            Status::Unset => ("unset", String::new()),
            Status::Ok => ("ok", String::new()),
            Status::Error { description } => ("error", description.to_string()),
        };

        serde_json::json!({
            "service": self.service_name,
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": if span.parent_span_id == SpanId::INVALID {
                String::new()
            } else {
                format!("{:016x}", span.parent_span_id)
            },
            "name": span.name,
            "startNs": unix_nanos(span.start_time),
            "endNs": unix_nanos(span.end_time),
            "attributes": attributes,
            "status": status,
            "statusMessage": status_message,
        })
    }
}

/// Nanoseconds since the Unix epoch, as a string (nanosecond timestamps
/// overflow JSON numbers).
fn unix_nanos(time: std::time::SystemTime) -> String {
    time.duration_since(std::time::UNIX_EPOCH)
        .unwrap_or(std::time::Duration::ZERO)
        .as_nanos()
        .to_string()
}

fn attribute_value(value: &opentelemetry::Value) -> serde_json::Value {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => serde_json::json!(b),
        Value::I64(i) => serde_json::json!(i),
        Value::F64(f) => serde_json::json!(f),
        Value::String(s) => serde_json::json!(s.to_string()),
        Value::Array(_) => serde_json::json!(format!("{value:?}")),
    }
}

impl SpanExporter for JsonLineExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let result = self
            .write_batch(&batch)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for JsonLineExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLineExporter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Creates a tracer provider exporting to the given trace file.
///
/// Uses a simple (immediate, non-batched) export strategy: the plugin runs
/// event-driven with long idle gaps, so batching would only delay spans
/// reaching disk.
pub fn create_tracer_provider(
    file_path: PathBuf,
    service_name: String,
    resource: Resource,
) -> TracerProvider {
    let exporter = JsonLineExporter::new(file_path, service_name);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
