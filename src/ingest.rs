//! Batch file ingestion.
//!
//! Files drain through an ordered queue with exactly one in flight: each
//! buffer is decoded, parsed, and appended to the store to completion
//! before the next one starts, so store order is the selection order. A
//! single barrier step after the whole batch picks the report to display.
//!
//! A file that fails to parse is recorded and skipped; it never aborts its
//! siblings. A file whose name is already loaded is skipped with only a
//! warn-level log entry.

use crate::report::decode_report;
use crate::store::{ReportId, ReportStore};
use std::collections::VecDeque;
use tracing::{error, info, warn};

/// A named input buffer, as handed over by the file-selection surface.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Per-file parse failure. The `Display` text is the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error parsing JSON for {name}: {message}")]
pub struct IngestError {
    pub name: String,
    pub message: String,
}

/// What one batch did to the store.
#[derive(Debug, Default)]
pub struct IngestOutcome {
    /// Ids appended this batch, in ingestion order.
    pub loaded: Vec<ReportId>,
    /// Names skipped because a report with the same name was loaded.
    pub skipped: Vec<String>,
    /// Per-file parse failures, in ingestion order.
    pub errors: Vec<IngestError>,
}

/// Ingest a batch of files and activate the report to display.
///
/// Activation, once per batch: the most recently loaded report wins; if
/// nothing new loaded but the store is non-empty, the first store entry;
/// if the store is empty, nothing.
pub fn ingest_batch(store: &mut ReportStore, files: Vec<SourceFile>) -> IngestOutcome {
    info!(files = files.len(), "ingesting batch");

    let mut queue: VecDeque<SourceFile> = files.into();
    let mut outcome = IngestOutcome::default();

    while let Some(file) = queue.pop_front() {
        if store.contains_name(&file.name) {
            warn!(name = %file.name, "file is already loaded, skipping");
            outcome.skipped.push(file.name);
            continue;
        }

        // Invalid UTF-8 is substituted, not fatal; the JSON parse decides.
        let text = String::from_utf8_lossy(&file.bytes);

        let value: serde_json::Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(e) => {
                let err = IngestError {
                    name: file.name,
                    message: e.to_string(),
                };
                error!(%err, "skipping file");
                outcome.errors.push(err);
                continue;
            }
        };

        let kind = decode_report(&value);
        if let Some(id) = store.insert(&file.name, kind) {
            outcome.loaded.push(id);
        }
    }

    // Batch barrier: one activation decision for the whole batch.
    if let Some(&last) = outcome.loaded.last() {
        store.activate(last);
    } else if let Some(first) = store.reports().first().map(|r| r.id) {
        store.activate(first);
    }

    info!(
        loaded = outcome.loaded.len(),
        skipped = outcome.skipped.len(),
        errors = outcome.errors.len(),
        "batch done"
    );

    outcome
}
