//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/userdeck/userdeck-otlp.json` as one
//! OTLP JSON document per exported batch. The file rotates at 10 MB and keeps
//! three backups.
//!
//! The level is taken from the `trace_level` plugin option and defaults to
//! `info`:
//!
//! ```kdl
//! plugin location="file:/path/to/userdeck.wasm" {
//!     trace_level "userdeck=debug"
//! }
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: OTLP JSON span exporter
//! - [`file_writer`]: Rotating line writer

pub mod exporter;
pub mod file_writer;
pub mod init;

pub use init::{init_tracing, trace_file_path};
