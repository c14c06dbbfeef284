use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

// ── Timestamp ──────────────────────────────────────────────────────────────────

/// An event timestamp as it appears in the log, kept as raw fields.
///
/// The log format carries no timezone and the upstream producer does not
/// guarantee calendar-valid values, so the fields are stored verbatim rather
/// than as a validated date type: month 13 parses and compares fine.
///
/// The derived `Ord` is lexicographic over the fields in declaration order,
/// which is exactly the 7-tuple order the comparison is defined over.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Timestamp {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub microsecond: i64,
}

impl Timestamp {
    /// Parse a timestamp from its textual form.
    ///
    /// Reads 7 integers positionally with exactly one arbitrary separator
    /// character between consecutive tokens, e.g.
    /// `"2024-01-02 03:04:05.678901"`. The separators are not validated, so
    /// `"2024/01/02T03.04.05,678901"` parses to the same value.
    ///
    /// Fails with [`ReportError::MalformedTimestamp`] when any integer token
    /// is absent. Calendar correctness is not checked.
    pub fn parse(text: &str) -> Result<Self> {
        let mut scanner = Scanner::new(text);

        let year = scanner.read_int()?;
        scanner.skip_separator();
        let month = scanner.read_int()?;
        scanner.skip_separator();
        let day = scanner.read_int()?;
        scanner.skip_separator();
        let hour = scanner.read_int()?;
        scanner.skip_separator();
        let minute = scanner.read_int()?;
        scanner.skip_separator();
        let second = scanner.read_int()?;
        scanner.skip_separator();
        let microsecond = scanner.read_int()?;

        Ok(Self {
            year: year as i32,
            month: month as i32,
            day: day as i32,
            hour: hour as i32,
            minute: minute as i32,
            second: second as i32,
            microsecond,
        })
    }
}

impl fmt::Display for Timestamp {
    /// Canonical text form: `YYYY-MM-DD HH:MM:SS.ssssss`, zero-padded.
    ///
    /// The widths are minimums. A microsecond value wider than 6 digits
    /// overflows its field instead of being truncated; upstream tooling
    /// depends on that rendering, so it is kept as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.microsecond
        )
    }
}

// ── Scanner ────────────────────────────────────────────────────────────────────

/// Positional integer scanner over the timestamp text.
struct Scanner<'a> {
    text: &'a str,
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, rest: text }
    }

    /// Read an optionally signed run of ASCII digits.
    fn read_int(&mut self) -> Result<i64> {
        let bytes = self.rest.as_bytes();
        let mut end = 0;
        if matches!(bytes.first(), Some(&b'-') | Some(&b'+')) {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits_start {
            return Err(self.malformed());
        }
        let value = self.rest[..end].parse().map_err(|_| self.malformed())?;
        self.rest = &self.rest[end..];
        Ok(value)
    }

    /// Advance past exactly one character, whatever it is.
    fn skip_separator(&mut self) {
        let mut chars = self.rest.chars();
        if chars.next().is_some() {
            self.rest = chars.as_str();
        }
    }

    fn malformed(&self) -> ReportError {
        ReportError::MalformedTimestamp(self.text.to_string())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
