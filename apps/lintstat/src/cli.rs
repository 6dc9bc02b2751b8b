//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintstat",
    version,
    about = "Summarize ESLint JSON reports",
    long_about = "lintstat — count lint findings in ESLint JSON reports by rule category, rule, and file.\n\nConfiguration precedence: CLI > lintstat.toml > defaults.",
    after_help = "Examples:\n  lintstat categories\n  lintstat categories --report lint_report_phase4_check2.json --limit 5\n  lintstat warnings --report 'reports/*.json' --top 20\n  lintstat warnings --severity error --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Debug, Clone, Default)]
/// Options shared by the report commands.
pub struct CommonArgs {
    #[arg(long, help = "Root directory used for config discovery and relative paths (default: current dir)")]
    pub root: Option<String>,
    #[arg(long, help = "Report file or glob, relative to root")]
    pub report: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Samples printed per category (default: 10)")]
    pub limit: Option<usize>,
    #[arg(long, help = "Rows printed per frequency table (default: 10)")]
    pub top: Option<usize>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Do not skip text before the first '['")]
    pub no_strip: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Print file paths exactly as they appear in the report")]
    pub absolute_paths: bool,
    #[arg(long, short, action = clap::ArgAction::SetTrue, help = "Suppress note/info diagnostics")]
    pub quiet: bool,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current lintstat version.")]
    Version,
    /// Count and sample findings per rule category
    #[command(
        about = "Count findings per rule category",
        long_about = "Count messages matching each rule category and print the first samples as file:line. Exits 1 when the report has no JSON start token.",
        after_help = "Examples:\n  lintstat categories\n  lintstat categories --strict --output json"
    )]
    Categories {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit 1 on any load failure, not only a missing JSON start")]
        strict: bool,
    },
    /// Tally findings of one severity by rule and file
    #[command(
        about = "Tally warnings by rule and file",
        long_about = "Filter messages by severity (warnings by default) and print totals plus the most common rules and files.",
        after_help = "Examples:\n  lintstat warnings\n  lintstat warnings --severity error --top 5"
    )]
    Warnings {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, default_value = "warning", help = "Severity filter: warning|error|any")]
        severity: String,
    },
}
