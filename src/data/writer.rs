use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::data::model::Table;
use crate::error::{Error, Result};
use crate::progress::ProgressSink;

// ---------------------------------------------------------------------------
// Write mode
// ---------------------------------------------------------------------------

/// Whether a write creates a fresh file or extends an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Create or overwrite, emitting a header row first.
    #[default]
    New,
    /// Append rows to an existing file, no header.
    Append,
}

impl WriteMode {
    /// Look up a mode by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "new" => Ok(WriteMode::New),
            "append" => Ok(WriteMode::Append),
            _ => Err(Error::UnknownWriteMode(name.to_string())),
        }
    }
}

impl std::str::FromStr for WriteMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        WriteMode::from_name(s)
    }
}

// ---------------------------------------------------------------------------
// Delimited output
// ---------------------------------------------------------------------------

/// Write a table as comma-delimited text, one row per sample index, column
/// values in the table's column order.
///
/// `New` mode truncates and writes the header first; `Append` adds rows to
/// whatever is already there. The sink receives `(done, total)` after each
/// row. The writer is flushed before return so filesystem errors surface
/// through the `Result`, and the handle closes on every exit path by scope.
pub fn write_table_csv(
    table: &Table,
    path: &Path,
    mode: WriteMode,
    progress: &mut dyn ProgressSink,
) -> Result<()> {
    let file = match mode {
        WriteMode::New => File::create(path)?,
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path)?,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if mode == WriteMode::New {
        writer.write_record(table.columns().iter().map(|c| c.name.as_str()))?;
    }

    let total = table.rows();
    log::debug!("writing {total} rows to {}", path.display());

    for i in 0..total {
        let row: Vec<String> = table
            .columns()
            .iter()
            .map(|c| c.values[i].to_string())
            .collect();
        writer.write_record(&row)?;
        progress.report(i + 1, total);
    }

    writer.flush()?;
    Ok(())
}
