//! Report loading.
//!
//! Reports are often captured from a noisy `npx eslint -f json` run, so any
//! text before the first `[` can be skipped when `strip_preamble` is set.

use crate::error::LoadError;
use crate::models::Report;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Parse report text. `origin` is only used for error messages.
pub fn parse_report(text: &str, origin: &Path, strip_preamble: bool) -> Result<Report, LoadError> {
    let body = if strip_preamble && !text.trim_start().starts_with('[') {
        match text.find('[') {
            Some(start) => &text[start..],
            None => {
                return Err(LoadError::NoJsonStart {
                    path: origin.to_path_buf(),
                })
            }
        }
    } else {
        text
    };
    serde_json::from_str(body).map_err(|e| LoadError::from_json(origin.to_path_buf(), e))
}

/// Read and parse one report file.
pub fn load_report(path: &Path, strip_preamble: bool) -> Result<Report, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse_report(&text, path, strip_preamble)
}

/// Load every report matched by `pattern` (relative to `root`) and
/// concatenate them in sorted path order.
///
/// An existing file, or a pattern without glob metacharacters, is treated
/// as a plain path.
pub fn load_reports(root: &Path, pattern: &str, strip_preamble: bool) -> Result<Report, LoadError> {
    let paths = resolve_paths(root, pattern)?;
    let mut report = Report::default();
    for p in &paths {
        report.extend(load_report(p, strip_preamble)?);
    }
    Ok(report)
}

fn resolve_paths(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
    let joined = root.join(pattern);
    if joined.is_file() || !pattern.contains(['*', '?', '[']) {
        return Ok(vec![joined]);
    }
    // Only the pattern part may carry metacharacters
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let pat = Path::new(&escaped_root).join(pattern).to_string_lossy().to_string();
    let entries = glob::glob(&pat).map_err(|source| LoadError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries.filter_map(Result::ok).filter(|p| p.is_file()).collect();
    if paths.is_empty() {
        return Err(LoadError::NotFound { path: joined });
    }
    paths.sort();
    Ok(paths)
}
