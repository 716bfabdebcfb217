//! CSV output for the final dealer set.

use std::path::{Path, PathBuf};

use crate::error::SinkError;
use crate::locator::DealerRecord;

/// What [`write_dealers_csv`] did with the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOutcome {
    Written { path: PathBuf, count: usize },
    /// Nothing to write; no file was created or truncated.
    Skipped,
}

/// Write `dealers` to `path` as CSV with a `name,address,website,email` header,
/// replacing any existing file.
///
/// Rows go to a temporary file next to `path` that is renamed over it once
/// complete, so a failed write leaves the previous file in place.
/// An empty slice performs no write at all and returns [`SinkOutcome::Skipped`].
///
/// # Errors
///
/// Returns [`SinkError`] if the parent directory cannot be created or the
/// file cannot be written or moved into place.
pub fn write_dealers_csv(dealers: &[DealerRecord], path: &Path) -> Result<SinkOutcome, SinkError> {
    if dealers.is_empty() {
        tracing::info!(path = %path.display(), "no dealers found to save");
        return Ok(SinkOutcome::Skipped);
    }

    let path_str = path.display().to_string();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).map_err(|e| SinkError::CreateDir {
        path: parent.display().to_string(),
        source: e,
    })?;

    let staging = tempfile::Builder::new()
        .prefix(".dealerscan-")
        .suffix(".csv.tmp")
        .tempfile_in(parent)
        .map_err(|e| SinkError::TempFile {
            path: parent.display().to_string(),
            source: e,
        })?;

    let mut writer = csv::Writer::from_writer(staging);
    for dealer in dealers {
        writer.serialize(dealer).map_err(|e| SinkError::Csv {
            path: path_str.clone(),
            source: e,
        })?;
    }
    let staging = writer.into_inner().map_err(|e| SinkError::Flush {
        path: path_str.clone(),
        source: e.into_error(),
    })?;

    staging.persist(path).map_err(|e| SinkError::Persist {
        path: path_str.clone(),
        source: e.error,
    })?;

    tracing::info!(count = dealers.len(), path = %path_str, "saved unique dealers");

    Ok(SinkOutcome::Written {
        path: path.to_path_buf(),
        count: dealers.len(),
    })
}
