//! View layer: pure builders turning decoded reports into serializable
//! view models. No I/O and no surface coupling; the HTML adapter in
//! `render/` paints these as-is.

pub mod color;
pub mod general;
pub mod perf;
pub mod tabs;

pub use color::{ColorBand, progressive_band, tps_impact_band};
pub use general::{GeneralView, build_general_view};
pub use perf::{PerformanceView, build_performance_view};
pub use tabs::{TabStripView, build_tab_strip};

use crate::ingest::IngestError;
use crate::report::ReportKind;
use crate::store::ReportStore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Body shown when a report cannot be rendered. The message replaces the
/// display region for that report only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorView {
    pub message: String,
}

/// The display body of one report, keyed by the tagged decode result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    General(GeneralView),
    Performance(PerformanceView),
    Error(ErrorView),
}

/// Select the renderer for one report's decoded content.
pub fn build_report_body(kind: &ReportKind) -> ReportBody {
    match kind {
        ReportKind::General(general) => ReportBody::General(build_general_view(&general.logs)),
        ReportKind::Performance(perf) => ReportBody::Performance(build_performance_view(perf)),
        ReportKind::Unrecognized(err) => ReportBody::Error(ErrorView {
            message: err.to_string(),
        }),
    }
}

/// Everything the paint surface needs for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerData {
    pub tabs: TabStripView,
    /// Report bodies keyed by tab id.
    pub bodies: BTreeMap<String, ReportBody>,
    pub active: Option<String>,
    /// Ingestion failures, surfaced when there is nothing to activate.
    pub notices: Vec<String>,
}

pub fn build_viewer_data(store: &ReportStore, errors: &[IngestError]) -> ViewerData {
    let bodies = store
        .reports()
        .iter()
        .map(|r| (r.id.to_string(), build_report_body(&r.kind)))
        .collect();

    ViewerData {
        tabs: build_tab_strip(store),
        bodies,
        active: store.active_id().map(|id| id.to_string()),
        notices: errors.iter().map(|e| e.to_string()).collect(),
    }
}
