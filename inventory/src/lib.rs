//! Load fresh id ranges from an inventory file and answer freshness queries.
//!
//! # Format
//!
//! An inventory is made of two sections separated by the first blank line:
//!
//! ```txt
//! 3-5
//! 10-14
//! 16-20
//! 12-18
//!
//! 1
//! 5
//! 8
//! ```
//!
//! The first section lists inclusive `start-end` ranges of fresh ids (ranges may overlap). The
//! second section lists the ids of available items, one per line.

use freshness_intervals::Store;
use std::{
    num::ParseIntError,
    time::{Duration, Instant},
};
use tracing::{debug, info};

/// Errors that can occur when parsing an inventory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: malformed range: {content:?}")]
    MalformedRange { line: usize, content: String },
    #[error("line {line}: invalid id {content:?}: {source}")]
    InvalidId {
        line: usize,
        content: String,
        source: ParseIntError,
    },
    #[error("line {line}: {source}")]
    Store {
        line: usize,
        source: freshness_intervals::Error,
    },
}

/// Fresh id ranges and the ids of available items.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    store: Store,
    queries: Vec<u64>,
}

/// Parse a single id, attributing failures to `line`.
fn parse_id(line: usize, content: &str) -> Result<u64, Error> {
    content.parse::<u64>().map_err(|source| Error::InvalidId {
        line,
        content: content.to_string(),
        source,
    })
}

impl Inventory {
    /// Parse an inventory, applying every range to a fresh [Store].
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut store = Store::new();
        let mut queries = Vec::new();
        let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

        // Ranges run until the first blank line
        for (line, content) in lines.by_ref() {
            if content.is_empty() {
                break;
            }
            let parts = content.split('-').collect::<Vec<&str>>();
            let [start, end] = parts[..] else {
                return Err(Error::MalformedRange {
                    line,
                    content: content.to_string(),
                });
            };
            let start = parse_id(line, start.trim())?;
            let end = parse_id(line, end.trim())?;
            store
                .try_set_range(start, end)
                .map_err(|source| Error::Store { line, source })?;
        }

        // Everything after is a query
        for (line, content) in lines {
            if content.is_empty() {
                continue;
            }
            queries.push(parse_id(line, content)?);
        }

        debug!(
            markers = store.len(),
            queries = queries.len(),
            "parsed inventory"
        );
        Ok(Self { store, queries })
    }

    /// Returns the store built from the range section.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the ids listed in the query section.
    pub fn queries(&self) -> &[u64] {
        &self.queries
    }

    /// Returns how many of the queried ids are fresh.
    pub fn fresh_available(&self) -> usize {
        self.queries
            .iter()
            .filter(|&&id| self.store.is_set(id))
            .count()
    }

    /// Returns how many ids are covered by the fresh ranges.
    pub fn fresh_total(&self) -> u64 {
        self.store.count_set_extent()
    }
}

/// Run `f`, returning its result along with the time it took.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    info!(label, ?elapsed, "evaluated");
    (result, elapsed)
}
