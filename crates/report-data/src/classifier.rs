//! Per-record classification: one parsed JSON value in, one [`Event`] out.
//!
//! Field extraction is best-effort. A missing intermediate key leaves the
//! corresponding path empty; a key that is present but holds a value of the
//! wrong shape is a [`ReportError::MalformedField`], which is reduced to
//! "leave empty" here rather than failing the record. Only a bad `time`
//! value fails the whole record.

use serde_json::Value;
use tracing::debug;

use report_core::error::{ReportError, Result};
use report_core::event::{Event, EventKind};
use report_core::timestamp::Timestamp;

// ── Extraction paths ───────────────────────────────────────────────────────────

/// Where the originating process path lives in a record.
const PROCESS_PATH: &[&str] = &["process", "executable", "path"];

/// Where each kind's target path lives inside the record's `event` object.
///
/// One declarative table instead of four near-identical extraction
/// functions; every path is walked by the same [`walk_string`] logic.
fn target_path(kind: EventKind) -> &'static [&'static str] {
    match kind {
        EventKind::Exec => &["exec", "target", "executable", "path"],
        EventKind::Fork => &["fork", "child", "executable", "path"],
        EventKind::Create => &["create", "destination", "existing_file", "path"],
        EventKind::Open => &["open", "file", "path"],
    }
}

// ── Classification ─────────────────────────────────────────────────────────────

/// Classify one syntactically valid JSON record into an [`Event`].
///
/// * A `time` field that fails to parse (or is not a string) is a
///   [`ReportError::MalformedTimestamp`]; the caller skips the line.
/// * A record with no `time` keeps the all-zero timestamp.
/// * The kind is the first key of `event` matching, in fixed precedence
///   order, one of [`EventKind::ALL`].
/// * Records matching no kind are retained unclassified, with empty paths.
pub fn classify(record: &Value) -> Result<Event> {
    let timestamp = match record.get("time") {
        Some(Value::String(text)) => Timestamp::parse(text)?,
        Some(other) => return Err(ReportError::MalformedTimestamp(other.to_string())),
        None => Timestamp::default(),
    };

    let event_obj = record.get("event");
    let kind = event_obj.and_then(|event| {
        EventKind::ALL
            .into_iter()
            .find(|k| event.get(k.key()).is_some())
    });

    let (process_path, target) = match (event_obj, kind) {
        (Some(event), Some(kind)) => (
            extract_string(record, PROCESS_PATH),
            extract_string(event, target_path(kind)),
        ),
        // Unclassified records keep empty paths even when `process` exists.
        _ => (String::new(), String::new()),
    };

    Ok(Event {
        timestamp,
        kind,
        process_path,
        target_path: target,
    })
}

// ── Field walking ──────────────────────────────────────────────────────────────

/// Walk `path` under `root`, reducing any [`ReportError::MalformedField`]
/// to an empty string.
fn extract_string(root: &Value, path: &[&str]) -> String {
    match walk_string(root, path) {
        Ok(Some(text)) => text.to_string(),
        Ok(None) => String::new(),
        Err(err) => {
            debug!("Reducing malformed field to empty: {}", err);
            String::new()
        }
    }
}

/// Follow a key path through nested objects down to a string leaf.
///
/// Returns `Ok(None)` when any key along the path is absent, and
/// [`ReportError::MalformedField`] when a key is present but its value has
/// the wrong shape (a non-object where the path continues, or a non-string
/// leaf).
fn walk_string<'a>(root: &'a Value, path: &[&str]) -> Result<Option<&'a str>> {
    let Some((leaf, branches)) = path.split_last() else {
        return Ok(None);
    };

    let mut current = root;
    for key in branches {
        current = match current.get(key) {
            Some(value) if value.is_object() => value,
            Some(_) => {
                return Err(ReportError::MalformedField {
                    field: (*key).to_string(),
                    expected: "object",
                })
            }
            None => return Ok(None),
        };
    }

    match current.get(leaf) {
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(ReportError::MalformedField {
            field: (*leaf).to_string(),
            expected: "string",
        }),
        None => Ok(None),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
