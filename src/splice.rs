//! Marker-delimited README region replacement

use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome of a successful splice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// The file was rewritten with new content
    Updated,
    /// The recomputed content was byte-identical, nothing was written
    Unchanged,
}

/// Failures that abort a splice before any write
#[derive(Debug, Error)]
pub enum SpliceError {
    #[error("target file not found: {0}")]
    MissingTarget(PathBuf),

    #[error("start marker '{marker}' not found in {path}")]
    StartMarkerNotFound { marker: String, path: PathBuf },

    #[error("end marker '{marker}' not found in {path}")]
    EndMarkerNotFound { marker: String, path: PathBuf },

    #[error("failed to build marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Replace the marker-delimited region of `path` with `fragment`
///
/// The replaced span runs from the start marker through the end marker
/// inclusive and may contain newlines. The new region is the start marker, a
/// blank line, the fragment, a newline and the end marker. The file is only
/// rewritten when the resulting content differs byte-for-byte.
pub fn splice(
    path: &Path,
    start_marker: &str,
    end_marker: &str,
    fragment: &str,
) -> Result<SpliceOutcome, SpliceError> {
    if !path.exists() {
        return Err(SpliceError::MissingTarget(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if !content.contains(start_marker) {
        return Err(SpliceError::StartMarkerNotFound {
            marker: start_marker.to_string(),
            path: path.to_path_buf(),
        });
    }

    if !content.contains(end_marker) {
        return Err(SpliceError::EndMarkerNotFound {
            marker: end_marker.to_string(),
            path: path.to_path_buf(),
        });
    }

    // Non-greedy match spanning newlines, so the region between the markers
    // may be arbitrarily long
    let pattern = format!(
        "(?s){}.*?{}",
        regex::escape(start_marker),
        regex::escape(end_marker)
    );
    let region = Regex::new(&pattern)?;

    let new_section = format!("{start_marker}\n\n{fragment}\n{end_marker}");
    let updated = region.replace_all(&content, regex::NoExpand(&new_section));

    if updated.as_ref() == content.as_str() {
        return Ok(SpliceOutcome::Unchanged);
    }

    std::fs::write(path, updated.as_ref())?;
    Ok(SpliceOutcome::Updated)
}
