//! Supporting helpers: colored stderr prefixes and path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are on unless `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colors_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Show `file` relative to `root` when it is absolute and lives under it.
pub fn display_path(file: &str, root: Option<&Path>) -> String {
    let p = Path::new(file);
    match root {
        Some(root) if p.is_absolute() && p.starts_with(root) => {
            pathdiff::diff_paths(p, root)
                .map(|rel| rel.to_string_lossy().to_string())
                .unwrap_or_else(|| file.to_string())
        }
        _ => file.to_string(),
    }
}
