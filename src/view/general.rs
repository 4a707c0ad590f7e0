//! View model for the general (plain text) log view.
//!
//! One line per entry, input order, nothing filtered or sorted. The
//! timestamp stays raw epoch millis; the paint surface formats it with the
//! viewer's locale.

use crate::report::LogEntry;
use crate::view::color::{ColorBand, tps_impact_band};
use serde::Serialize;

/// Levels that get their own line styling. Anything else keeps its tag
/// text but paints neutral.
const KNOWN_LEVELS: [&str; 7] = [
    "INFO",
    "WARN",
    "ERROR",
    "DEBUG",
    "TRACE",
    "PERFORMANCE",
    "EVENT",
];

pub const UNKNOWN_LEVEL: &str = "UNKNOWN";

/// Optional trailing detail on a log line, e.g. "Duration: 12.5ms".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtraView {
    pub text: String,
    /// Set only for the TPS impact detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<ColorBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogLineView {
    pub level_tag: String,
    pub level_class: String,
    pub timestamp_ms: f64,
    pub module: String,
    pub message: String,
    pub extras: Vec<ExtraView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralView {
    pub lines: Vec<LogLineView>,
}

impl GeneralView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn build_general_view(entries: &[LogEntry]) -> GeneralView {
    GeneralView {
        lines: entries.iter().map(build_line).collect(),
    }
}

fn build_line(entry: &LogEntry) -> LogLineView {
    let level_tag = entry
        .level
        .clone()
        .unwrap_or_else(|| UNKNOWN_LEVEL.to_string());

    let level_class = if KNOWN_LEVELS.contains(&level_tag.as_str()) {
        format!("level-{}", level_tag.to_ascii_lowercase())
    } else {
        "level-unknown".to_string()
    };

    let mut extras = Vec::new();
    if let Some(details) = &entry.details {
        extras.push(plain(format!("Details: {}", details)));
    }
    if let Some(duration) = entry.duration_ms {
        extras.push(plain(format!("Duration: {}ms", duration)));
    }
    if let Some(impact) = entry.tps_impact {
        extras.push(ExtraView {
            text: format!("TPS Impact: {:.2}", impact),
            band: Some(tps_impact_band(impact)),
        });
    }
    if let Some(event_type) = &entry.event_type {
        extras.push(plain(format!("Event Type: {}", event_type)));
    }
    if let Some(throwable) = &entry.throwable {
        extras.push(plain(format!("Exception: {}", throwable)));
    }

    LogLineView {
        level_tag,
        level_class,
        timestamp_ms: entry.timestamp,
        module: entry.module.clone(),
        message: entry.message.clone(),
        extras,
    }
}

fn plain(text: String) -> ExtraView {
    ExtraView { text, band: None }
}
