//! Note path resolution
//!
//! Turns paper references into wiki note paths: one safe file-name
//! component per reference, joined under the wiki directory, deduplicated
//! while preserving first-seen order. Pure computation; nothing here
//! touches the file system or the editor.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{PaperwikiError, Result};
use crate::filter::PaperFilter;
use crate::paper::Library;

/// The two mutually exclusive ways references reach the resolver
#[derive(Debug, Clone)]
pub enum ReferenceSource {
    /// Filter words selecting papers from the library
    Filter(PaperFilter),
    /// One reference per line of piped input, verbatim
    Piped(Vec<String>),
}

impl ReferenceSource {
    /// Produce the paper references this source names.
    ///
    /// Filter mode consumes the already-filtered library selection; piped
    /// lines are taken as-is, with blank lines ignored.
    pub fn references(&self, library: Option<&Library>) -> Result<Vec<String>> {
        match self {
            ReferenceSource::Filter(filter) => {
                let library = library.ok_or(PaperwikiError::LibraryNotConfigured)?;
                Ok(library
                    .select(filter)
                    .into_iter()
                    .map(|paper| paper.reference().to_string())
                    .collect())
            }
            ReferenceSource::Piped(lines) => Ok(lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()),
        }
    }
}

/// Sanitize a reference into a single safe file-name component.
///
/// Alphanumerics and `-` pass through unchanged; any other character
/// becomes `_`, runs collapse to one, and edge underscores are trimmed.
/// The result never contains a path separator, so a reference cannot
/// escape the wiki directory. Returns an empty string when nothing
/// survives sanitization.
pub fn as_filename(reference: &str) -> String {
    let mut out = String::with_capacity(reference.len());
    let mut pending_sep = false;
    for ch in reference.trim().chars() {
        if ch.is_alphanumeric() || ch == '-' {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            out.push(ch);
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Resolve references to wiki note paths.
///
/// Each reference maps to `wiki_dir/<as_filename(reference)>.<extension>`.
/// References that sanitize to nothing are skipped. Duplicate paths keep
/// only their first occurrence, in input order, so the opener is never
/// handed the same path twice. Fails with `EmptyInput` when no paths
/// remain.
pub fn resolve(references: &[String], wiki_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for reference in references {
        let name = as_filename(reference);
        if name.is_empty() {
            tracing::debug!(%reference, "skip_unsanitizable_reference");
            continue;
        }
        let path = wiki_dir.join(format!("{}.{}", name, extension));
        if seen.insert(path.clone()) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(PaperwikiError::EmptyInput);
    }
    Ok(paths)
}
