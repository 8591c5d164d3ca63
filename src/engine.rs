//! Per-address aggregation and connector classification

use crate::extractor::ExtractedDocument;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Frozen per-address statistics returned by [`AggregationEngine::lookup`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressStats {
    /// Documents where this address was the extracted sender
    pub sent: u64,

    /// (document, recipient) occurrences naming this address
    pub received: u64,

    /// Pair-occurrence tally: one increment per valid (sender, recipient)
    /// pair this address took part in, on either side. Not a
    /// distinct-counterparty count.
    pub team_size: u64,
}

impl AddressStats {
    /// Connector predicate: one-directional communicator or team-of-one
    #[must_use]
    pub const fn is_connector(&self) -> bool {
        (self.sent > 0 && self.received == 0)
            || (self.sent == 0 && self.received > 0)
            || self.team_size == 1
    }
}

/// Running tallies over a stream of extracted documents
///
/// Constructed empty once per run, mutated monotonically while documents are
/// recorded, then used read-only for classification and lookup. Counts never
/// decrease and entries are never removed.
#[derive(Debug, Default)]
pub struct AggregationEngine {
    /// Every address ever observed as sender or recipient
    known: HashSet<String>,
    sent: HashMap<String, u64>,
    received: HashMap<String, u64>,
    team: HashMap<String, u64>,
}

impl AggregationEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document's sender/recipient pairs into the tallies.
    ///
    /// The known-address set is updated with this document's addresses before
    /// any count is applied. A document with an empty sender contributes its
    /// recipients to the known set but touches no tally.
    pub fn record_document(&mut self, doc: &ExtractedDocument) {
        if !doc.sender.is_empty() {
            self.known.insert(doc.sender.clone());
        }
        for recipient in &doc.recipients {
            self.known.insert(recipient.clone());
        }

        // Guard: no tally mutation without a valid sender
        if doc.sender.is_empty() {
            debug!(recipients = doc.recipients.len(), "document without valid sender, skipping tallies");
            return;
        }

        *self.sent.entry(doc.sender.clone()).or_insert(0) += 1;

        for recipient in &doc.recipients {
            if self.known.contains(recipient) {
                *self.received.entry(recipient.clone()).or_insert(0) += 1;
                *self.team.entry(doc.sender.clone()).or_insert(0) += 1;
                *self.team.entry(recipient.clone()).or_insert(0) += 1;
            }
        }
    }

    /// Classify connectors among the addresses that have sent at least once.
    ///
    /// Only sent-tally keys are scanned: an address that only ever received
    /// is never classified. Iteration order is unspecified; callers that feed
    /// multiple sinks must materialize the result once.
    pub fn connectors(&self) -> impl Iterator<Item = &str> {
        self.sent.iter().filter_map(|(address, &sent)| {
            let stats = AddressStats {
                sent,
                received: self.received.get(address).copied().unwrap_or(0),
                team_size: self.team.get(address).copied().unwrap_or(0),
            };
            stats.is_connector().then_some(address.as_str())
        })
    }

    /// Look up the statistics for one address.
    ///
    /// Returns `None` for any address that never appeared as a sender, even
    /// when it has a nonzero received count.
    #[must_use]
    pub fn lookup(&self, address: &str) -> Option<AddressStats> {
        let &sent = self.sent.get(address)?;
        Some(AddressStats {
            sent,
            received: self.received.get(address).copied().unwrap_or(0),
            team_size: self.team.get(address).copied().unwrap_or(0),
        })
    }

    /// Number of distinct addresses observed as sender or recipient
    #[must_use]
    pub fn known_addresses(&self) -> usize {
        self.known.len()
    }

    /// Number of distinct addresses that sent at least one document
    #[must_use]
    pub fn sender_count(&self) -> usize {
        self.sent.len()
    }

    /// Per-sender statistics table, for the JSON stats export
    #[must_use]
    pub fn stats_table(&self) -> HashMap<&str, AddressStats> {
        self.sent
            .keys()
            .map(|address| {
                // lookup never misses for a sent-tally key
                (address.as_str(), self.lookup(address).unwrap_or_default())
            })
            .collect()
    }
}
