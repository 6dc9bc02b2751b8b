//! Single-pass aggregation of report messages.
//!
//! Produces a total, per-rule and per-file tallies, and per-category samples.
//! Samples stay in report order; only the tallies are frequency-ordered.

use crate::error::ConfigError;
use crate::models::{Report, SEVERITY_ERROR, SEVERITY_WARNING};
use crate::tally::Tally;
use crate::utils::display_path;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Key used in the per-rule tally for messages without a `ruleId`.
pub const NO_RULE: &str = "(none)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which messages take part in aggregation.
pub enum SeverityFilter {
    Any,
    Warning,
    Error,
}

impl SeverityFilter {
    pub fn accepts(self, severity: u8) -> bool {
        match self {
            SeverityFilter::Any => true,
            SeverityFilter::Warning => severity == SEVERITY_WARNING,
            SeverityFilter::Error => severity == SEVERITY_ERROR,
        }
    }

    /// Plural noun used in report headers.
    pub fn noun(self) -> &'static str {
        match self {
            SeverityFilter::Any => "messages",
            SeverityFilter::Warning => "warnings",
            SeverityFilter::Error => "errors",
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" | "all" => Ok(SeverityFilter::Any),
            "warning" | "warn" | "1" => Ok(SeverityFilter::Warning),
            "error" | "2" => Ok(SeverityFilter::Error),
            _ => Err(ConfigError::Severity(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
/// A titled group of rule identifiers.
pub struct Category {
    pub title: String,
    pub rules: Vec<String>,
    pub pattern: Option<Regex>,
}

impl Category {
    pub fn new(title: &str, rules: &[&str]) -> Self {
        Category {
            title: title.to_string(),
            rules: rules.iter().map(|r| r.to_string()).collect(),
            pattern: None,
        }
    }

    /// Build a category with an optional regex, as read from config.
    pub fn with_pattern(
        title: String,
        rules: Vec<String>,
        pattern: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let pattern = match pattern {
            Some(p) => Some(Regex::new(p).map_err(|source| ConfigError::Regex {
                title: title.clone(),
                source,
            })?),
            None => None,
        };
        Ok(Category {
            title,
            rules,
            pattern,
        })
    }

    pub fn matches(&self, rule_id: &str) -> bool {
        self.rules.iter().any(|r| r == rule_id)
            || self.pattern.as_ref().is_some_and(|re| re.is_match(rule_id))
    }
}

/// Categories used when no `[[categories]]` are configured.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(
            "NO EXPLICIT ANY",
            &["@typescript-eslint/no-explicit-any", "no-explicit-any"],
        ),
        Category::new(
            "NO UNUSED VARS",
            &["@typescript-eslint/no-unused-vars", "no-unused-vars"],
        ),
    ]
}

#[derive(Debug, Clone)]
/// What to count and how to display file paths.
pub struct Selection {
    pub categories: Vec<Category>,
    pub severity: SeverityFilter,
    /// When set, absolute file paths under this root are shown relative to it.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One matched message location.
pub struct Sample {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub rule: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTally {
    pub title: String,
    pub count: usize,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone)]
/// Aggregation output.
pub struct Aggregate {
    pub severity: SeverityFilter,
    pub total: usize,
    pub categories: Vec<CategoryTally>,
    pub by_rule: Tally,
    pub by_file: Tally,
}

/// Walk every message once, in report order.
pub fn aggregate(report: &Report, sel: &Selection) -> Aggregate {
    let mut categories: Vec<CategoryTally> = sel
        .categories
        .iter()
        .map(|c| CategoryTally {
            title: c.title.clone(),
            count: 0,
            samples: Vec::new(),
        })
        .collect();
    let mut by_rule = Tally::new();
    let mut by_file = Tally::new();
    let mut total = 0usize;

    for entry in &report.files {
        let file = display_path(&entry.file_path, sel.root.as_deref());
        for msg in &entry.messages {
            if !sel.severity.accepts(msg.severity) {
                continue;
            }
            total += 1;
            by_file.add(&file);
            let Some(rule) = msg.rule_id.as_deref() else {
                by_rule.add(NO_RULE);
                continue;
            };
            by_rule.add(rule);
            for (cat, out) in sel.categories.iter().zip(categories.iter_mut()) {
                if cat.matches(rule) {
                    out.count += 1;
                    out.samples.push(Sample {
                        file: file.clone(),
                        line: msg.line,
                        column: msg.column,
                        rule: rule.to_string(),
                    });
                }
            }
        }
    }

    Aggregate {
        severity: sel.severity,
        total,
        categories,
        by_rule,
        by_file,
    }
}
