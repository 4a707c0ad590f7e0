//! Raw payload shapes for the two accepted report files.
//!
//! General log:
//! {
//!   "logType": "GENERAL",
//!   "logs": [
//!     {
//!       "level": "INFO",              // optional; absent renders as UNKNOWN
//!       "timestamp": 1723111200000,    // epoch millis
//!       "module": "ChunkLoader",
//!       "source": "ChunkLoader.java:88",
//!       "message": "...",
//!       "details": "...",              // optional extras, see view::general
//!       "durationMs": 12.5,
//!       "tpsImpact": 0.4,
//!       "eventType": "WORLD_SAVE",
//!       "throwable": "java.io.IOException: ..."
//!     },
//!     ...
//!   ]
//! }
//!
//! Performance report:
//! {
//!   "logType": "PERFORMANCE_REPORT",
//!   "summary": {
//!     "tps": { "current": 19.8, "average": 19.5 },
//!     "mspt": { "average": 42.1, "p95": 48.0, "max": 112.3 },
//!     "cpu": { "process": 31.0, "system": 55.2, "idle": 44.8 },
//!     "memory": { "usedMB": 2048, "totalMB": 4096 }
//!   },
//!   "hotspots": [
//!     { "source": "...", "selfTimePercent": 12.3,
//!       "totalTimePercent": 45.6, "count": 789 },
//!     ...
//!   ]
//! }
//!
//! Every field defaults rather than failing: payloads in the wild are
//! written by several mod versions and routinely omit entries.

use serde::Deserialize;

/// One line of a general log. Never mutated after decode.
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub level: Option<String>,

    /// Epoch millis. The paint surface formats it with the viewer locale.
    #[serde(default)]
    pub timestamp: f64,

    #[serde(default)]
    pub module: String,

    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default, rename = "durationMs")]
    pub duration_ms: Option<f64>,

    #[serde(default, rename = "tpsImpact")]
    pub tps_impact: Option<f64>,

    #[serde(default, rename = "eventType")]
    pub event_type: Option<String>,

    #[serde(default)]
    pub throwable: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralLog {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceReport {
    pub summary: SummarySpec,

    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarySpec {
    #[serde(default)]
    pub tps: TpsSpec,
    #[serde(default)]
    pub mspt: MsptSpec,
    #[serde(default)]
    pub cpu: CpuSpec,
    #[serde(default)]
    pub memory: MemorySpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TpsSpec {
    #[serde(default)]
    pub current: f64,
    #[serde(default)]
    pub average: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MsptSpec {
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub p95: f64,
    #[serde(default)]
    pub max: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CpuSpec {
    #[serde(default)]
    pub process: f64,
    #[serde(default)]
    pub system: f64,
    #[serde(default)]
    pub idle: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemorySpec {
    #[serde(default, rename = "usedMB")]
    pub used_mb: f64,
    #[serde(default, rename = "totalMB")]
    pub total_mb: f64,
}

/// A named source of work in the performance report.
#[derive(Debug, Clone, Deserialize)]
pub struct Hotspot {
    #[serde(default)]
    pub source: String,

    #[serde(default, rename = "selfTimePercent")]
    pub self_time_percent: f64,

    #[serde(default, rename = "totalTimePercent")]
    pub total_time_percent: f64,

    #[serde(default)]
    pub count: u64,
}
