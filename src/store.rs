//! Report store: the loaded reports and which one is displayed.
//!
//! Insertion order is tab order. The active id, if set, always references
//! a report present in the sequence; an empty store has no active id. Both
//! properties are maintained by the mutating methods, never checked by
//! callers.

use crate::report::ReportKind;

/// Opaque per-session report token.
///
/// Rendered as `report-<n>`; the counter lives in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportId(u64);

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "report-{}", self.0)
    }
}

/// One ingested file: id, source file name, decoded content.
#[derive(Debug, Clone)]
pub struct Report {
    pub id: ReportId,
    pub name: String,
    pub kind: ReportKind,
}

#[derive(Debug, Default)]
pub struct ReportStore {
    reports: Vec<Report>,
    active: Option<ReportId>,
    next_id: u64,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report under a fresh id, unless a report with the same
    /// file name is already loaded. Returns `None` on a name collision
    /// (store unchanged).
    pub fn insert(&mut self, name: impl Into<String>, kind: ReportKind) -> Option<ReportId> {
        let name = name.into();
        if self.contains_name(&name) {
            return None;
        }

        let id = ReportId(self.next_id);
        self.next_id += 1;
        self.reports.push(Report { id, name, kind });
        Some(id)
    }

    /// Make `id` the displayed report. Returns false (active unchanged)
    /// if no such report is loaded.
    pub fn activate(&mut self, id: ReportId) -> bool {
        if self.reports.iter().any(|r| r.id == id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Remove one report. If it was the active one, the first remaining
    /// report (store order) becomes active; an emptied store has none.
    pub fn close(&mut self, id: ReportId) {
        self.reports.retain(|r| r.id != id);
        if self.active == Some(id) {
            self.active = self.reports.first().map(|r| r.id);
        }
    }

    pub fn clear(&mut self) {
        self.reports.clear();
        self.active = None;
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.reports.iter().any(|r| r.name == name)
    }

    pub fn active_id(&self) -> Option<ReportId> {
        self.active
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
