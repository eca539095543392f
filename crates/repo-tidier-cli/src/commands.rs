//! Command runners — one scan per invocation, then aggregate and render.
use crate::args::{Cli, Command, SummaryArgs, TypesArgs};
use crate::render::summary::TYPE_PANEL_ROWS;
use crate::render::{render_summary, render_types};
use crate::theme::Theme;
use anyhow::Result;
use repo_tidier_core::{
    count_types, scan_with_observer, summarize, FileRecord, ScanConfig, ScanError, ScanEvent,
    SummaryReport, TypeCountReport,
};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Run the parsed command and print its output to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let output = match &cli.command {
        Command::Summary(args) => summary(args)?,
        Command::Types(args) => types(args)?,
    };
    println!("{output}");
    Ok(())
}

/// Build the `summary` output (tables or JSON).
pub fn summary(args: &SummaryArgs) -> Result<String> {
    let config = ScanConfig::new(&args.path)
        .exclude(args.exclude.iter().cloned())
        .extensions(&args.extensions)
        .files_only(args.files_only);
    let scanned = scan_tree(&config)?;

    let report = summarize(
        &scanned.records,
        args.sort_by.into(),
        args.reverse(),
        args.limit,
    );
    // The type panel describes files only, even when directories are listed.
    let files: Vec<FileRecord> = scanned
        .records
        .iter()
        .filter(|r| !r.is_directory)
        .cloned()
        .collect();
    let file_types = count_types(&files, Some(TYPE_PANEL_ROWS), false);
    debug!(
        "Summary: {} records, {} shown",
        report.total_files,
        report.entries.len()
    );

    if args.json {
        let doc = SummaryJson {
            root: &args.path,
            skipped: scanned.skipped,
            report: &report,
            file_types: &file_types,
        };
        return Ok(serde_json::to_string_pretty(&doc)?);
    }
    Ok(render_summary(
        &args.path,
        &report,
        &file_types,
        scanned.skipped,
        &Theme::standard(),
    ))
}

/// Build the `types` output (tables or JSON). Always counts files only.
pub fn types(args: &TypesArgs) -> Result<String> {
    let config = ScanConfig::new(&args.path)
        .exclude(args.exclude.iter().cloned())
        .files_only(true);
    let scanned = scan_tree(&config)?;

    let report = count_types(&scanned.records, args.top, args.summary_only);
    debug!(
        "Types: {} unique, {} shown",
        report.total_unique_types,
        report.counts.len()
    );

    if args.json {
        let doc = TypesJson {
            root: &args.path,
            skipped: scanned.skipped,
            report: &report,
        };
        return Ok(serde_json::to_string_pretty(&doc)?);
    }
    Ok(render_types(&args.path, &report, &Theme::standard()))
}

/// Records from one scan plus how many entries were unreadable.
struct Scanned {
    records: Vec<FileRecord>,
    skipped: u64,
}

fn scan_tree(config: &ScanConfig) -> Result<Scanned, ScanError> {
    let mut skipped = 0;
    let records = scan_with_observer(config, |event| {
        if let ScanEvent::Complete { skipped: n, .. } = event {
            skipped = n;
        }
    })?;
    Ok(Scanned { records, skipped })
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    root: &'a Path,
    skipped: u64,
    #[serde(flatten)]
    report: &'a SummaryReport,
    file_types: &'a TypeCountReport,
}

#[derive(Serialize)]
struct TypesJson<'a> {
    root: &'a Path,
    skipped: u64,
    #[serde(flatten)]
    report: &'a TypeCountReport,
}
