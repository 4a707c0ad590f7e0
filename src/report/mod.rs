//! Report layer: raw payload shapes + one-shot decode into a tagged variant.
//!
//! This module is intentionally separate from ingestion and rendering.
//! It owns:
//! - the serde shapes of the two accepted file formats
//! - `decode_report`, the only place `logType` is ever inspected

pub mod decode;
pub mod payload;

pub use decode::{ReportKind, SchemaError, decode_report};
pub use payload::{GeneralLog, Hotspot, LogEntry, PerformanceReport};
