//! lintstat core library.
//!
//! Reads ESLint JSON reports and aggregates their messages into
//! frequency-ordered tallies by rule category, rule, and file.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `loader`: Report reading with log-preamble stripping.
//! - `aggregate`: Single-pass counting and category sampling.
//! - `tally`: Insertion-ordered counter with stable most-common order.
//! - `models`: Report data model.
//! - `output`: Human/JSON printers.
//! - `error`: Load and configuration error types.
//! - `utils`: Supporting helpers.
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod output;
pub mod tally;
pub mod utils;
