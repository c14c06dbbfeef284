//! File front-end: the report table persisted as a UTF-8 text file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use report_core::error::{ReportError, Result};
use report_data::store::GroupedEvents;

use crate::{layout, table};

/// Write the grouped events to `path` using the file layout.
///
/// A destination that cannot be created is
/// [`ReportError::UnwritableDestination`]: the render is aborted and
/// nothing is written, rather than leaving a partial file behind.
pub fn save_report(path: &Path, grouped: &GroupedEvents) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::UnwritableDestination {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    table::write_grouped(&mut writer, grouped, &layout::FILE)?;
    writer.flush()?;
    Ok(())
}
