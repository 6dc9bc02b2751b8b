//! Configuration discovery and effective settings resolution.
//!
//! lintstat reads `lintstat.toml|yaml|yml` from the root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `limit`: 10 samples per category
//! - `top`: 10 rows per frequency table
//! - `strip_preamble`, `relative_paths`: true
//! - `reports.categories`: `lint_report_phase4_check2.json`
//! - `reports.warnings`: `eslint_report_after.json`
//! - `categories`: explicit-any and unused-vars
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::aggregate::{default_categories, Category};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATEGORIES_REPORT: &str = "lint_report_phase4_check2.json";
pub const DEFAULT_WARNINGS_REPORT: &str = "eslint_report_after.json";
pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Default, Deserialize, Clone)]
/// Default report locations under `[reports]`.
pub struct ReportsCfg {
    pub categories: Option<String>,
    pub warnings: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// One `[[categories]]` entry.
pub struct CategoryCfg {
    pub title: String,
    #[serde(default)]
    pub rules: Vec<String>,
    pub pattern: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintstat.toml|yaml`.
pub struct LintstatConfig {
    pub output: Option<String>,
    pub limit: Option<usize>,
    pub top: Option<usize>,
    pub strip_preamble: Option<bool>,
    pub relative_paths: Option<bool>,
    #[serde(default)]
    pub reports: Option<ReportsCfg>,
    #[serde(default)]
    pub categories: Option<Vec<CategoryCfg>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            _ => Err(ConfigError::Output(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which subcommand's defaults to resolve.
pub enum Mode {
    Categories,
    Warnings,
}

/// CLI values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides<'a> {
    pub root: Option<&'a str>,
    pub report: Option<&'a str>,
    pub output: Option<&'a str>,
    pub limit: Option<usize>,
    pub top: Option<usize>,
    pub no_strip: bool,
    pub absolute_paths: bool,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    /// Directory the report path is resolved against (`--root` or cwd).
    pub base: PathBuf,
    /// Detected root: where config was found, used for relative display.
    pub root: PathBuf,
    pub config_found: bool,
    pub report: String,
    pub output: OutputMode,
    pub limit: usize,
    pub top: usize,
    pub strip_preamble: bool,
    pub relative_paths: bool,
    pub categories: Vec<Category>,
}

/// Walk upward from `start` to detect the root.
///
/// Stops when a `lintstat.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("lintstat.toml").exists()
            || cur.join("lintstat.yaml").exists()
            || cur.join("lintstat.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LintstatConfig` from `lintstat.toml` or `lintstat.yaml|yml` if present.
///
/// A config file that exists but cannot be read or parsed is an error.
pub fn load_config(root: &Path) -> Result<Option<LintstatConfig>, ConfigError> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })
    };
    let toml_path = root.join("lintstat.toml");
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: toml_path.clone(),
            source,
        })?;
        return Ok(Some(cfg));
    }
    for yml in ["lintstat.yaml", "lintstat.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
                path: p.clone(),
                source,
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(mode: Mode, cli: &CliOverrides) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli.root.unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let root = detect_root(&start);
    let loaded = load_config(&root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let reports = cfg.reports.unwrap_or_default();
    let report = cli
        .report
        .map(|s| s.to_string())
        .or(match mode {
            Mode::Categories => reports.categories,
            Mode::Warnings => reports.warnings,
        })
        .unwrap_or_else(|| {
            match mode {
                Mode::Categories => DEFAULT_CATEGORIES_REPORT,
                Mode::Warnings => DEFAULT_WARNINGS_REPORT,
            }
            .to_string()
        });

    let output = cli
        .output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string())
        .parse::<OutputMode>()?;

    let limit = cli.limit.or(cfg.limit).unwrap_or(DEFAULT_LIMIT);
    let top = cli.top.or(cfg.top).unwrap_or(DEFAULT_TOP);
    let strip_preamble = !cli.no_strip && cfg.strip_preamble.unwrap_or(true);
    let relative_paths = !cli.absolute_paths && cfg.relative_paths.unwrap_or(true);

    // Configured categories replace the defaults entirely
    let categories = match cfg.categories {
        Some(list) if !list.is_empty() => list
            .into_iter()
            .map(|c| Category::with_pattern(c.title, c.rules, c.pattern.as_deref()))
            .collect::<Result<Vec<_>, _>>()?,
        _ => default_categories(),
    };

    Ok(Effective {
        base: start,
        root,
        config_found,
        report,
        output,
        limit,
        top,
        strip_preamble,
        relative_paths,
        categories,
    })
}
