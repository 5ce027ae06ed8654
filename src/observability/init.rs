//! Tracing subscriber setup.

use super::exporter::{create_tracer_provider, SCOPE_NAME};
use super::file_writer::FileWriter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Data directory inside the Zellij sandbox.
///
/// `/host` is the directory Zellij was started from, usually the home
/// directory, so this is normally `~/.local/share/zellij/userdeck`.
pub const DATA_DIR: &str = "/host/.local/share/zellij/userdeck";

/// Name of the trace file inside [`DATA_DIR`].
pub const TRACE_FILE: &str = "userdeck-otlp.json";

/// Level used when the configuration names none.
pub const DEFAULT_LEVEL: &str = "info";

/// Returns the path spans are exported to.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    Path::new(DATA_DIR).join(TRACE_FILE)
}

/// Installs the global subscriber exporting spans to [`trace_file_path`].
///
/// The filter comes from `config.trace_level` (an `EnvFilter` directive such
/// as `debug` or `userdeck=trace`); an invalid directive falls back to
/// [`DEFAULT_LEVEL`]. Tracing is optional: if the data directory cannot be
/// created nothing is installed. Only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = Path::new(DATA_DIR);
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let filter = config
        .trace_level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = create_tracer_provider(FileWriter::new(trace_file_path()), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
