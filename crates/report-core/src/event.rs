use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

// ── EventKind ──────────────────────────────────────────────────────────────────

/// The closed set of event kinds the classifier recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A process image was executed.
    Exec,
    /// A child process was forked.
    Fork,
    /// A file was created.
    Create,
    /// A file was opened.
    Open,
}

impl EventKind {
    /// Classification precedence order.
    ///
    /// When a record pathologically carries more than one kind key, the
    /// first match in this order wins. Upstream leaves the ambiguity
    /// unspecified; the fixed order is intentional, not a bug.
    pub const ALL: [EventKind; 4] = [
        EventKind::Exec,
        EventKind::Fork,
        EventKind::Create,
        EventKind::Open,
    ];

    /// The key naming this kind inside a record's `event` object, which is
    /// also its display label.
    pub fn key(self) -> &'static str {
        match self {
            EventKind::Exec => "exec",
            EventKind::Fork => "fork",
            EventKind::Create => "create",
            EventKind::Open => "open",
        }
    }
}

// ── Event ──────────────────────────────────────────────────────────────────────

/// A single normalized log record.
///
/// Constructed once per successfully parsed line and immutable thereafter.
/// Records whose `event` object matches none of the known kinds are still
/// retained, with `kind` unset and both paths empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred; all-zero when the record had no `time`.
    pub timestamp: Timestamp,
    /// Classified kind, or `None` for an unclassified record.
    #[serde(default)]
    pub kind: Option<EventKind>,
    /// Executable path of the originating process; may be empty.
    #[serde(default)]
    pub process_path: String,
    /// Path the event acted on; may be empty.
    #[serde(default)]
    pub target_path: String,
}

impl Event {
    /// The kind's display label, or `""` for an unclassified event.
    pub fn kind_label(&self) -> &'static str {
        self.kind.map(EventKind::key).unwrap_or("")
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
