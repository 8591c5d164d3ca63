//! Output sinks and the interactive query loop
//!
//! The classified connector list is materialized once by the caller and fed to
//! each sink from the same `Vec`, so the console and the file always agree.

use crate::engine::AggregationEngine;
use crate::error::{Result, ScanError};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Write the connector list one address per line
pub fn print_connectors<W: Write>(connectors: &[String], out: &mut W) -> std::io::Result<()> {
    for address in connectors {
        writeln!(out, "{address}")?;
    }
    Ok(())
}

/// Write the identical connector list to a file, newline-separated
pub fn write_connectors(connectors: &[String], path: &Path) -> Result<()> {
    let mut body = connectors.join("\n");
    if !connectors.is_empty() {
        body.push('\n');
    }
    fs::write(path, body).map_err(|source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = connectors.len(), "connector list written");
    Ok(())
}

/// Dump the per-sender statistics table as pretty-printed JSON
pub fn write_stats_json(engine: &AggregationEngine, path: &Path) -> Result<()> {
    let encoded = serde_json::to_string_pretty(&engine.stats_table())?;
    fs::write(path, encoded).map_err(|source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Interactive lookup: one address per line, `EXIT` (case-insensitive) or EOF
/// terminates. The engine is read-only here; a miss is reported and the loop
/// continues.
pub fn query_loop<R: BufRead, W: Write>(
    engine: &AggregationEngine,
    input: R,
    output: &mut W,
) -> std::io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "Email address of the individual (or EXIT to quit): ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let query = line?;
        let query = query.trim();
        if query.eq_ignore_ascii_case("EXIT") {
            break;
        }

        match engine.lookup(query) {
            Some(stats) => {
                writeln!(output, "* {query} has sent messages to {} others", stats.sent)?;
                writeln!(
                    output,
                    "* {query} has received messages from {} others",
                    stats.received
                )?;
                writeln!(
                    output,
                    "* {query} is in a team with {} individuals",
                    stats.team_size
                )?;
            }
            None => {
                writeln!(output, "Email address ({query}) not found in the dataset.")?;
            }
        }
    }
    Ok(())
}
