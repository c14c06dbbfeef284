//! Report renderers for grouped endpoint security events.
//!
//! Both renderers share one table shape — per process group a
//! `Time / Process / Event / Target` header, a dashed rule, one row per
//! event and a blank separator — and differ only in column widths and
//! destination. See [`layout`] for the widths, [`table`] for the shared
//! writer, and [`console`] / [`file`] for the two front-ends.

pub mod console;
pub mod file;
pub mod layout;
pub mod table;
