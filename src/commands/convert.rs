use std::path::Path;

use anyhow::{Result, bail};
use chrono::Utc;
use tracing::{info, warn};

use crate::cli::ConvertArgs;
use crate::engine::{ResolvedRange, RowRange, Scanner};
use crate::model::{ConversionCounts, ConversionSummary, RequestedRange};
use crate::sheet::load_table;
use crate::util::{
    now_utc_string, sha256_file, utc_compact_string, write_json_pretty, write_json_stdout,
};

pub fn run(args: ConvertArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("convert-{}", utc_compact_string(started_ts));

    info!(input = %args.input.display(), run_id = %run_id, "starting conversion");

    let table = load_table(&args.input, args.sheet.as_deref(), args.column_map.as_deref())?;
    let unknown_columns = table.unknown_columns();
    if !unknown_columns.is_empty() {
        warn!(
            count = unknown_columns.len(),
            columns = %unknown_columns.join(", "),
            "columns do not match any document field"
        );
    }

    let range = RowRange::new(args.start_row, args.end_row);
    selected_range(range, table.rows.len())?;

    let conversion = Scanner::new(&table.columns)?
        .with_progress_every(args.progress_every)
        .run(&table.rows, range)?;

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &conversion.documents)?;
            info!(path = %path.display(), "wrote documents");
        }
        None => write_json_stdout(&conversion.documents)?,
    }

    if let Some(summary_path) = &args.summary_path {
        let summary = ConversionSummary {
            manifest_version: 1,
            run_id,
            started_at,
            completed_at: now_utc_string(),
            input_path: args.input.display().to_string(),
            input_sha256: sha256_file(&args.input)?,
            sheet: table.name.clone(),
            output_path: args.output.as_deref().map(display_path),
            column_map_path: args.column_map.as_deref().map(display_path),
            requested_range: RequestedRange {
                start_row: args.start_row,
                end_row: args.end_row,
            },
            counts: conversion.counts.clone(),
            unknown_columns,
        };
        write_json_pretty(summary_path, &summary)?;
        info!(path = %summary_path.display(), "wrote conversion summary");
    }

    log_counts(&conversion.counts);
    Ok(())
}

fn selected_range(range: RowRange, total_rows: usize) -> Result<ResolvedRange> {
    let resolved = range.resolve(total_rows);
    if !range.is_partial() {
        return Ok(resolved);
    }
    if resolved.is_empty() && total_rows > 0 {
        bail!(
            "start row {} is after end row {}",
            resolved.first,
            resolved.last
        );
    }

    let clamped = range.start.is_some_and(|start| start != resolved.first)
        || range.end.is_some_and(|end| end != resolved.last);
    if clamped {
        warn!(
            requested_start = ?range.start,
            requested_end = ?range.end,
            first_row = resolved.first,
            last_row = resolved.last,
            "row range clamped to sheet bounds"
        );
    }
    Ok(resolved)
}

fn log_counts(counts: &ConversionCounts) {
    info!(
        total_rows = counts.total_rows,
        processed_rows = counts.processed_rows,
        blank_rows_skipped = counts.blank_rows_skipped,
        empty_documents_pruned = counts.empty_documents_pruned,
        documents_saved = counts.documents_saved,
        "conversion completed"
    );
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
