// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Mail Corpus Connector Analysis
//!
//! Scans a directory tree of plain-text mail documents, extracts
//! sender/recipient headers, and keeps per-address tallies: documents sent,
//! documents received, and team size. Addresses that only send, only receive,
//! or sit in a team of one are classified as connectors.
//!
//! # Example
//!
//! ```rust
//! use mail_connectors::{AggregationEngine, ExtractedDocument};
//!
//! let mut engine = AggregationEngine::new();
//! engine.record_document(&ExtractedDocument {
//!     sender: "a@enron.com".into(),
//!     recipients: vec!["b@enron.com".into()],
//! });
//!
//! let stats = engine.lookup("a@enron.com").unwrap();
//! assert_eq!(stats.sent, 1);
//! assert!(stats.is_connector());
//! ```

mod engine;
mod error;
pub mod extractor;
pub mod report;
mod walker;

pub use engine::{AddressStats, AggregationEngine};
pub use error::{Result, ScanError};
pub use extractor::{extract, AddressCensus, ExtractedDocument, DEFAULT_SUFFIX};
pub use walker::{scan_corpus, ScanSummary};
