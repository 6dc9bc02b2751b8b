//! Output rendering for the `categories` and `warnings` commands.
//!
//! Supports `human` (default) and `json` outputs. Human text is built by
//! pure `render_*` functions so tests can inspect it without capturing stdout.

use crate::aggregate::{Aggregate, CategoryTally};
use crate::config::OutputMode;
use crate::tally::Tally;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: OutputMode) -> bool {
    output != OutputMode::Json && crate::utils::colors_enabled()
}

fn header(text: String, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text
    }
}

fn render_category(out: &mut String, cat: &CategoryTally, limit: usize, color: bool) {
    out.push_str(&header(format!("{} ({})", cat.title, cat.count), color));
    out.push('\n');
    for s in cat.samples.iter().take(limit) {
        out.push_str(&format!("{}:{}\n", s.file, s.line));
    }
}

fn render_table(out: &mut String, title: &str, tally: &Tally, top: usize, color: bool) {
    out.push_str(&header(format!("{}:", title), color));
    out.push('\n');
    for e in tally.most_common().into_iter().take(top) {
        let count = if color {
            format!("{:>6}", e.count).yellow().to_string()
        } else {
            format!("{:>6}", e.count)
        };
        out.push_str(&format!("{}  {}\n", count, e.key));
    }
}

/// Category headers with up to `limit` samples each, in report order.
pub fn render_categories(agg: &Aggregate, limit: usize, color: bool) -> String {
    let mut out = String::new();
    for (i, cat) in agg.categories.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_category(&mut out, cat, limit, color);
    }
    out
}

/// Totals, the top rules and files by count, then the category sections.
pub fn render_warnings(agg: &Aggregate, top: usize, limit: usize, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&header(
        format!("Total {}: {}", agg.severity.noun(), agg.total),
        color,
    ));
    out.push_str("\n\n");
    render_table(&mut out, "By rule", &agg.by_rule, top, color);
    out.push('\n');
    render_table(&mut out, "By file", &agg.by_file, top, color);
    if !agg.categories.is_empty() {
        out.push('\n');
        out.push_str(&render_categories(agg, limit, color));
    }
    out
}

/// Compose the JSON object (pure) for testing/snapshot purposes.
pub fn compose_json(agg: &Aggregate, top: usize, limit: usize) -> JsonVal {
    let categories: Vec<_> = agg
        .categories
        .iter()
        .map(|c| {
            json!({
                "title": c.title,
                "count": c.count,
                "samples": c.samples.iter().take(limit).collect::<Vec<_>>(),
            })
        })
        .collect();
    let table = |t: &Tally| -> Vec<JsonVal> {
        t.most_common()
            .into_iter()
            .take(top)
            .map(|e| json!({"key": e.key, "count": e.count}))
            .collect()
    };
    json!({
        "severity": agg.severity.noun(),
        "total": agg.total,
        "categories": categories,
        "by_rule": table(&agg.by_rule),
        "by_file": table(&agg.by_file),
    })
}

fn print_json(agg: &Aggregate, top: usize, limit: usize) {
    let out = compose_json(agg, top, limit);
    println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
}

/// Print the `categories` report in the requested format.
///
/// The JSON form still carries the top-`top` tables.
pub fn print_categories(agg: &Aggregate, output: OutputMode, top: usize, limit: usize) {
    match output {
        OutputMode::Json => print_json(agg, top, limit),
        OutputMode::Human => print!("{}", render_categories(agg, limit, use_colors(output))),
    }
}

/// Print the `warnings` report in the requested format.
pub fn print_warnings(agg: &Aggregate, output: OutputMode, top: usize, limit: usize) {
    match output {
        OutputMode::Json => print_json(agg, top, limit),
        OutputMode::Human => print!("{}", render_warnings(agg, top, limit, use_colors(output))),
    }
}
