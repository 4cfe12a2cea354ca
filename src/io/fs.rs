use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Create the directory if it doesn't exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            anyhow::bail!("[io::fs] Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("[io::fs] Failed to create directory {}", path.display()))?;
    }
    Ok(())
}
