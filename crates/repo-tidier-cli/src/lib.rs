//! Repo Tidier CLI — argument model, command runners, and terminal rendering.
//!
//! This crate contains all presentation code. Scanning and aggregation live
//! in `repo-tidier-core`; commands here build a `ScanConfig` from the parsed
//! arguments, run one scan, and render the resulting report as tables or JSON.
pub mod args;
pub mod commands;
pub mod render;
pub mod theme;

pub use args::{Cli, Command, SortArg, SummaryArgs, TypesArgs};
pub use commands::run;
