//! CSV writing operations.

use std::{io::Write, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::CsvWriter};
use tempfile::NamedTempFile;

/// Write a DataFrame to CSV bytes with a header row. Nulls become empty fields.
fn write_csv_bytes(df: &mut DataFrame) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    CsvWriter::new(&mut out)
        .include_header(true)
        .finish(df)
        .context("[io::csv::write] Failed to write CSV to bytes")?;
    Ok(out)
}

/// Write a DataFrame to a CSV string.
pub fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    String::from_utf8(write_csv_bytes(df)?)
        .context("[io::csv::write] CSV output is not valid UTF-8")
}

/// A CSV fully written to a temporary file beside its destination, not yet visible there.
pub(crate) struct StagedCsv {
    file: NamedTempFile,
    path: PathBuf,
}

impl StagedCsv {
    /// Destination the file will appear at once persisted.
    #[inline] pub(crate) fn path(&self) -> &Path { &self.path }

    /// Move the staged file to its destination. Dropping instead discards it.
    pub(crate) fn persist(self) -> Result<()> {
        let Self { file, path } = self;
        file.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("[io::csv::write] Failed to write CSV to {}", path.display()))?;
        Ok(())
    }
}

/// Write a DataFrame to a temporary file in the directory of `path`.
pub(crate) fn stage_csv(df: &mut DataFrame, path: &Path) -> Result<StagedCsv> {
    let bytes = write_csv_bytes(df)?;
    let dir = path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("[io::csv::write] Failed to create temporary file in {}", dir.display()))?;
    file.write_all(&bytes)
        .and_then(|_| file.flush())
        .with_context(|| format!("[io::csv::write] Failed to write CSV for {}", path.display()))?;
    Ok(StagedCsv { file, path: path.to_path_buf() })
}
