//! Event accumulation, chronological ordering and per-process grouping.

use std::collections::HashMap;
use std::io::BufRead;

use serde_json::Value;
use tracing::{debug, warn};

use report_core::error::Result;
use report_core::event::Event;

use crate::classifier;

// ── EventStore ─────────────────────────────────────────────────────────────────

/// Accumulates classified events for the duration of one run.
///
/// Line-level failures are recovered locally: a line that is not valid JSON
/// or carries a bad timestamp is reported and skipped, never aborting the
/// batch. Events already ingested are never discarded.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    lines_seen: u64,
    lines_skipped: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and classify a single line, appending the resulting event.
    ///
    /// Errors bubble up so the caller can report them per line; the store
    /// itself is left untouched on failure.
    pub fn ingest(&mut self, line: &str) -> Result<()> {
        let record: Value = serde_json::from_str(line)?;
        let event = classifier::classify(&record)?;
        self.events.push(event);
        Ok(())
    }

    /// Ingest every line from `reader`, skipping and reporting bad ones.
    pub fn ingest_lines(&mut self, reader: impl BufRead) {
        for (index, line_result) in reader.lines().enumerate() {
            let line = match line_result {
                Ok(line) => line,
                Err(err) => {
                    warn!("Skipping unreadable line {}: {}", index + 1, err);
                    self.lines_skipped += 1;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            self.lines_seen += 1;

            if let Err(err) = self.ingest(&line) {
                warn!("Skipping line {}: {}", index + 1, err);
                self.lines_skipped += 1;
            }
        }

        debug!(
            "Ingested {} lines: {} events retained, {} skipped",
            self.lines_seen,
            self.events.len(),
            self.lines_skipped
        );
    }

    /// Number of events retained so far.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of lines that were reported and skipped.
    pub fn skipped(&self) -> u64 {
        self.lines_skipped
    }

    /// Sort all retained events chronologically and partition them by
    /// originating process.
    ///
    /// The sort is stable, so events with identical timestamps keep their
    /// original line order, and each group inherits that order.
    pub fn finalize(mut self) -> GroupedEvents {
        self.events.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        let mut groups: HashMap<String, Vec<Event>> = HashMap::new();
        for event in self.events {
            groups
                .entry(event.process_path.clone())
                .or_default()
                .push(event);
        }
        GroupedEvents { groups }
    }
}

// ── GroupedEvents ──────────────────────────────────────────────────────────────

/// Events partitioned by process path, each group internally time-ordered.
///
/// Storage is an ordinary `HashMap`; render-order determinism comes from
/// the explicit key sort in [`GroupedEvents::iter_sorted`], not from the
/// container.
#[derive(Debug)]
pub struct GroupedEvents {
    groups: HashMap<String, Vec<Event>>,
}

impl GroupedEvents {
    /// Groups in ascending lexicographic key order.
    ///
    /// Both renderers iterate through this, which makes repeated runs over
    /// the same input byte-identical.
    pub fn iter_sorted(&self) -> Vec<(&str, &[Event])> {
        let mut keys: Vec<&String> = self.groups.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| (key.as_str(), self.groups[key].as_slice()))
            .collect()
    }

    /// The event sequence for one process, if any.
    pub fn group(&self, process_path: &str) -> Option<&[Event]> {
        self.groups.get(process_path).map(Vec::as_slice)
    }

    /// Number of distinct process groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of events across all groups.
    pub fn event_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
