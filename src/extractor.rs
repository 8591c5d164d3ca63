//! Header extraction from raw mail documents
//!
//! Extraction is deliberately a best-effort substring scan over the raw text:
//! the first `From: `, `To: `, `cc: ` and `bcc: ` occurrences are taken at
//! face value. Folded header values and repeated header keys beyond the first
//! match are not handled.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default accepted domain suffix for valid addresses
pub const DEFAULT_SUFFIX: &str = "@enron.com";

/// Sender and recipients extracted from one mail document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Extracted sender address, empty when absent or outside the accepted domain
    pub sender: String,

    /// Recipient addresses from To/cc/bcc, filtered to the accepted domain.
    /// Repeated recipients are kept as-is, not deduplicated.
    pub recipients: Vec<String>,
}

impl ExtractedDocument {
    /// Check whether the document yielded nothing usable
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sender.is_empty() && self.recipients.is_empty()
    }
}

/// Extract the sender and recipient addresses from raw document text
#[must_use]
pub fn extract(content: &str, accepted_suffix: &str) -> ExtractedDocument {
    ExtractedDocument {
        sender: extract_sender(content, accepted_suffix),
        recipients: extract_recipients(content, accepted_suffix),
    }
}

/// Locate a header value: first occurrence of `marker` at or after `from`,
/// value runs to the end of that line
fn header_value(content: &str, marker: &str, from: usize) -> Option<(usize, usize)> {
    let start = content[from..].find(marker)? + from + marker.len();
    let end = content[start..]
        .find('\n')
        .map_or(content.len(), |i| start + i);
    Some((start, end))
}

fn extract_sender(content: &str, suffix: &str) -> String {
    let Some((start, end)) = header_value(content, "From: ", 0) else {
        return String::new();
    };
    let sender = content[start..end].trim();
    if has_accepted_suffix(sender, suffix) {
        sender.to_string()
    } else {
        String::new()
    }
}

fn extract_recipients(content: &str, suffix: &str) -> Vec<String> {
    let Some((to_start, to_end)) = header_value(content, "To: ", 0) else {
        return Vec::new();
    };
    let mut raw = content[to_start..to_end].trim().to_string();

    // cc/bcc are searched from the end of the To line, first match only
    for marker in ["cc: ", "bcc: "] {
        if let Some((start, end)) = header_value(content, marker, to_end) {
            raw.push(',');
            raw.push_str(content[start..end].trim());
        }
    }

    raw.split(',')
        .map(str::trim)
        .filter(|r| has_accepted_suffix(r, suffix))
        .map(str::to_string)
        .collect()
}

/// Case-insensitive suffix check; the stored address keeps its original case
fn has_accepted_suffix(address: &str, suffix: &str) -> bool {
    let addr = address.as_bytes();
    let sfx = suffix.as_bytes();
    addr.len() >= sfx.len() && addr[addr.len() - sfx.len()..].eq_ignore_ascii_case(sfx)
}

/// Corpus-wide census of distinct address mentions
///
/// Scans raw document text for address-shaped tokens, either on addressed
/// header lines (any domain) or anywhere in the text within the accepted
/// domain, and accumulates the distinct set across all observed documents.
#[derive(Debug)]
pub struct AddressCensus {
    pattern: Regex,
    seen: HashSet<String>,
}

impl AddressCensus {
    /// Build a census for the given accepted domain suffix
    #[must_use]
    pub fn new(accepted_suffix: &str) -> Self {
        let domain = regex::escape(accepted_suffix.trim_start_matches('@'));
        let pattern = Regex::new(&format!(
            r"(?i)((From|To|Cc|Bcc):\s*\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{{2,}}\b|\b[A-Za-z0-9._%+-]+@{domain}\b)"
        ))
        .unwrap();
        Self {
            pattern,
            seen: HashSet::new(),
        }
    }

    /// Record every address mention found in one document
    pub fn observe(&mut self, content: &str) {
        for m in self.pattern.find_iter(content) {
            self.seen.insert(m.as_str().to_string());
        }
    }

    /// Number of distinct mentions observed so far
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.seen.len()
    }
}

impl Default for AddressCensus {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX)
    }
}
