//! File-based OTLP span exporter.
//!
//! Zellij plugins have no network access of their own, so spans are written
//! as OTLP JSON documents, one batch per line, to a rotating file under the
//! plugin's data directory.

use super::file_writer::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, SpanKind, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Value as JsonValue};
use std::time::SystemTime;

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "userdeck";

/// Span exporter appending OTLP JSON batches to a [`FileWriter`].
#[derive(Debug)]
pub struct FileSpanExporter {
    writer: FileWriter,
    resource_attributes: Vec<JsonValue>,
    is_shutdown: bool,
}

impl FileSpanExporter {
    #[must_use]
    pub fn new(writer: FileWriter, resource: &Resource) -> Self {
        Self {
            writer,
            resource_attributes: resource_attributes(resource),
            is_shutdown: false,
        }
    }

    /// Builds the OTLP document for one batch.
    #[must_use]
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        json!({
            "resourceSpans": [{
                "resource": { "attributes": self.resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": SCOPE_NAME },
                    "spans": batch.iter().map(format_span).collect::<Vec<_>>(),
                }]
            }]
        })
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.format_batch(&batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource_attributes = resource_attributes(resource);
    }
}

/// Creates a tracer provider exporting every finished span to `writer`.
///
/// Spans are exported one by one as they end; the plugin has no background
/// runtime to drive a batch processor.
#[must_use]
pub fn create_tracer_provider(writer: FileWriter, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(writer, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn resource_attributes(resource: &Resource) -> Vec<JsonValue> {
    resource
        .iter()
        .map(|(key, value)| json!({ "key": key.as_str(), "value": format_value(value) }))
        .collect()
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let (status_code, status_message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": format_attributes(&event.attributes),
            })
        })
        .collect();

    let links: Vec<JsonValue> = span
        .links
        .iter()
        .map(|link| {
            json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": format_attributes(&link.attributes),
            })
        })
        .collect();

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent_span_id,
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": events,
        "links": links,
        "status": { "code": status_code, "message": status_message },
    })
}

const fn span_kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.as_str(), "value": format_value(&kv.value) }))
        .collect()
}

/// OTLP encodes 64-bit integers as strings; arrays fall back to their debug
/// rendering.
fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_use_otlp_encoding() {
        assert_eq!(format_value(&Value::I64(7)), json!({ "intValue": "7" }));
        assert_eq!(format_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            format_value(&Value::from("x")),
            json!({ "stringValue": "x" })
        );
    }

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("trace.json"));
        let resource = Resource::new(vec![KeyValue::new("service.name", "userdeck")]);
        let exporter = FileSpanExporter::new(writer, &resource);

        let doc = exporter.format_batch(&[]);
        let resource_spans = &doc["resourceSpans"][0];
        let attributes = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attributes.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "userdeck" }
        })));
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));
    }

    #[test]
    fn export_after_shutdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let mut exporter = FileSpanExporter::new(FileWriter::new(path.clone()), &Resource::empty());

        exporter.shutdown();
        let result = futures_util::FutureExt::now_or_never(exporter.export(vec![]));
        assert!(matches!(result, Some(Err(_))));
        assert!(!path.exists());
    }
}
