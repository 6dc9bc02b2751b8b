//! lintstat CLI binary entry point.
//! Resolves configuration, loads the report, and prints aggregates.

use clap::Parser;
use lintstat::aggregate::{aggregate, Aggregate, Selection, SeverityFilter};
use lintstat::cli::{Cli, Commands, CommonArgs};
use lintstat::config::{self, CliOverrides, Effective, Mode, OutputMode};
use lintstat::error::LoadError;
use lintstat::{loader, output, utils};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Categories { common, strict } => {
            let eff = resolve_or_exit(Mode::Categories, &common);
            match load(&eff, &common) {
                Ok(report) => {
                    let agg = run_aggregate(&report, &eff, SeverityFilter::Any);
                    output::print_categories(&agg, eff.output, eff.top, eff.limit);
                }
                Err(e @ LoadError::NoJsonStart { .. }) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(1);
                }
                Err(e) => {
                    // Other failures are reported but do not fail the run unless --strict
                    eprintln!("{} {}", utils::error_prefix(), e);
                    if strict {
                        std::process::exit(1);
                    }
                }
            }
        }
        Commands::Warnings { common, severity } => {
            let severity = match severity.parse::<SeverityFilter>() {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let eff = resolve_or_exit(Mode::Warnings, &common);
            match load(&eff, &common) {
                Ok(report) => {
                    let agg = run_aggregate(&report, &eff, severity);
                    output::print_warnings(&agg, eff.output, eff.top, eff.limit);
                }
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn resolve_or_exit(mode: Mode, common: &CommonArgs) -> Effective {
    let overrides = CliOverrides {
        root: common.root.as_deref(),
        report: common.report.as_deref(),
        output: common.output.as_deref(),
        limit: common.limit,
        top: common.top,
        no_strip: common.no_strip,
        absolute_paths: common.absolute_paths,
    };
    match config::resolve_effective(mode, &overrides) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}

fn load(eff: &Effective, common: &CommonArgs) -> Result<lintstat::models::Report, LoadError> {
    let chatty = eff.output == OutputMode::Human && !common.quiet;
    if chatty && !eff.config_found {
        eprintln!("{} No lintstat.toml found; using defaults.", utils::note_prefix());
    }
    let report = loader::load_reports(&eff.base, &eff.report, eff.strip_preamble)?;
    if chatty {
        eprintln!(
            "{} Read {} files, {} messages from {}",
            utils::info_prefix(),
            report.files.len(),
            report.message_count(),
            eff.report
        );
    }
    Ok(report)
}

fn run_aggregate(
    report: &lintstat::models::Report,
    eff: &Effective,
    severity: SeverityFilter,
) -> Aggregate {
    let sel = Selection {
        categories: eff.categories.clone(),
        severity,
        root: eff.relative_paths.then(|| eff.root.clone()),
    };
    aggregate(report, &sel)
}
