//! Console front-end: the report table on stdout.
//!
//! Diagnostics go to stderr via `tracing`, so stdout carries nothing but
//! the rendered report.

use std::io::{self, Write};

use report_data::store::GroupedEvents;

use crate::{layout, table};

/// Print the grouped events to stdout using the console layout.
pub fn print_report(grouped: &GroupedEvents) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    table::write_grouped(&mut handle, grouped, &layout::CONSOLE)?;
    handle.flush()
}
