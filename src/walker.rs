//! Corpus traversal
//!
//! Walks the dataset directory recursively and feeds every regular file to the
//! extractor and the aggregation engine. Symlinks are not followed, so a
//! symlink cycle cannot trap the walk. An unreadable document aborts the run.

use crate::engine::AggregationEngine;
use crate::error::{Result, ScanError};
use crate::extractor::{self, AddressCensus};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Totals for one completed corpus scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Documents processed
    pub documents: usize,

    /// Distinct address mentions found by the census scan
    pub distinct_addresses: usize,
}

/// Scan every document under `root` and return the frozen engine plus totals.
///
/// Documents are read as raw bytes and converted lossily; corpus files are not
/// guaranteed to be valid UTF-8.
pub fn scan_corpus(root: &Path, accepted_suffix: &str) -> Result<(AggregationEngine, ScanSummary)> {
    let mut engine = AggregationEngine::new();
    let mut census = AddressCensus::new(accepted_suffix);
    let mut documents = 0usize;

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let bytes = fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let doc = extractor::extract(&content, accepted_suffix);
        debug!(
            path = %path.display(),
            sender = %doc.sender,
            recipients = doc.recipients.len(),
            "processed document"
        );
        engine.record_document(&doc);
        census.observe(&content);
        documents += 1;
    }

    let summary = ScanSummary {
        documents,
        distinct_addresses: census.distinct(),
    };
    info!(
        documents = summary.documents,
        distinct_addresses = summary.distinct_addresses,
        senders = engine.sender_count(),
        known = engine.known_addresses(),
        "corpus scan complete"
    );
    Ok((engine, summary))
}
