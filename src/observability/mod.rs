//! Tracing with file-based span export.
//!
//! This module wires the `tracing` macros used throughout the plugin into an
//! OpenTelemetry pipeline that writes finished spans to a JSON-lines file
//! under the plugin data directory. Network export is not an option inside
//! the Zellij sandbox, so traces land on disk for offline inspection.
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → JsonLineExporter → trace file
//! ```
//!
//! The trace level is controlled by the `trace_level` plugin configuration
//! option (default `"info"`). Export failures are silently ignored:
//! observability must never take the booking form down with it.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`export`]: JSON-lines span exporter with size-capped rollover

mod export;
mod init;

pub use init::init_tracing;
