//! One-shot decode of a parsed JSON payload into a display-ready variant.
//!
//! The dispatch key is the top-level `logType` string, compared
//! case-insensitively. Schema problems do not abort ingestion: a file that
//! parses as JSON still becomes a tab, and its body shows the schema error
//! instead of a view. `decode_report` is therefore infallible; failures
//! fold into [`ReportKind::Unrecognized`].

use crate::report::payload::{GeneralLog, PerformanceReport};
use serde_json::Value;

/// What a report's display body is built from. Decoded once at the
/// ingestion boundary; renderers never re-validate.
#[derive(Debug, Clone)]
pub enum ReportKind {
    General(GeneralLog),
    Performance(PerformanceReport),
    Unrecognized(SchemaError),
}

/// Schema failures whose `Display` text is the user-visible error body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Invalid log format: missing `logType` key.")]
    MissingLogType,

    #[error("Invalid log format: missing both `logs` and `summary`.")]
    MissingBody,

    #[error("Unknown logType: \"{0}\".")]
    UnknownType(String),

    #[error("Invalid report content: {0}")]
    Malformed(String),
}

/// Decode a parsed payload into its report variant.
///
/// Requires a string `logType` plus at least one of `logs` / `summary`.
pub fn decode_report(value: &Value) -> ReportKind {
    let Some(log_type) = value.get("logType").and_then(Value::as_str) else {
        return ReportKind::Unrecognized(SchemaError::MissingLogType);
    };

    if value.get("logs").is_none() && value.get("summary").is_none() {
        return ReportKind::Unrecognized(SchemaError::MissingBody);
    }

    match log_type.to_ascii_uppercase().as_str() {
        "GENERAL" => match serde_json::from_value::<GeneralLog>(value.clone()) {
            Ok(general) => ReportKind::General(general),
            Err(e) => ReportKind::Unrecognized(SchemaError::Malformed(e.to_string())),
        },
        "PERFORMANCE_REPORT" => match serde_json::from_value::<PerformanceReport>(value.clone()) {
            Ok(perf) => ReportKind::Performance(perf),
            Err(e) => ReportKind::Unrecognized(SchemaError::Malformed(e.to_string())),
        },
        _ => ReportKind::Unrecognized(SchemaError::UnknownType(log_type.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn general_decodes_all_entries_in_order() {
        let value = json!({
            "logType": "GENERAL",
            "logs": [
                { "level": "INFO", "timestamp": 1000, "module": "a", "message": "first" },
                { "level": "WARN", "timestamp": 2000, "module": "b", "message": "second" },
            ]
        });

        match decode_report(&value) {
            ReportKind::General(general) => {
                assert_eq!(general.logs.len(), 2);
                assert_eq!(general.logs[0].message, "first");
                assert_eq!(general.logs[1].message, "second");
            }
            other => panic!("expected General, got {:?}", other),
        }
    }

    #[test]
    fn log_type_is_case_insensitive() {
        let value = json!({ "logType": "general", "logs": [] });
        assert!(matches!(decode_report(&value), ReportKind::General(_)));

        let value = json!({
            "logType": "performance_report",
            "summary": { "tps": { "current": 20.0, "average": 19.9 } }
        });
        assert!(matches!(decode_report(&value), ReportKind::Performance(_)));
    }

    #[test]
    fn performance_reads_summary_and_hotspots() {
        let value = json!({
            "logType": "PERFORMANCE_REPORT",
            "summary": {
                "tps": { "current": 19.8, "average": 19.5 },
                "mspt": { "average": 42.1, "p95": 48.0, "max": 112.3 },
                "cpu": { "process": 31.0, "system": 55.2, "idle": 44.8 },
                "memory": { "usedMB": 2048, "totalMB": 4096 }
            },
            "hotspots": [
                { "source": "EntityTick", "selfTimePercent": 61.2,
                  "totalTimePercent": 74.9, "count": 1203 }
            ]
        });

        match decode_report(&value) {
            ReportKind::Performance(perf) => {
                assert_eq!(perf.summary.tps.current, 19.8);
                assert_eq!(perf.summary.memory.total_mb, 4096.0);
                assert_eq!(perf.hotspots.len(), 1);
                assert_eq!(perf.hotspots[0].source, "EntityTick");
            }
            other => panic!("expected Performance, got {:?}", other),
        }
    }

    #[test]
    fn hotspots_are_optional() {
        let value = json!({
            "logType": "PERFORMANCE_REPORT",
            "summary": {}
        });

        match decode_report(&value) {
            ReportKind::Performance(perf) => assert!(perf.hotspots.is_empty()),
            other => panic!("expected Performance, got {:?}", other),
        }
    }

    #[test]
    fn missing_log_type_is_rejected() {
        let value = json!({ "logs": [] });
        match decode_report(&value) {
            ReportKind::Unrecognized(e) => assert_eq!(e, SchemaError::MissingLogType),
            other => panic!("expected Unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn non_string_log_type_is_rejected() {
        let value = json!({ "logType": 7, "logs": [] });
        assert!(matches!(
            decode_report(&value),
            ReportKind::Unrecognized(SchemaError::MissingLogType)
        ));
    }

    #[test]
    fn missing_logs_and_summary_is_rejected() {
        let value = json!({ "logType": "GENERAL" });
        match decode_report(&value) {
            ReportKind::Unrecognized(e) => assert_eq!(e, SchemaError::MissingBody),
            other => panic!("expected Unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn unknown_log_type_names_the_value() {
        let value = json!({ "logType": "FOO", "logs": [] });
        match decode_report(&value) {
            ReportKind::Unrecognized(e) => {
                assert_eq!(e, SchemaError::UnknownType("FOO".to_string()));
                assert!(e.to_string().contains("\"FOO\""));
            }
            other => panic!("expected Unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn mistyped_body_folds_into_schema_error() {
        let value = json!({ "logType": "GENERAL", "logs": "not an array" });
        assert!(matches!(
            decode_report(&value),
            ReportKind::Unrecognized(SchemaError::Malformed(_))
        ));
    }
}
