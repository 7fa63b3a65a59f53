use anyhow::{Context, Result};
use tracing::{debug, info};

use super::document::OutputDocument;
use super::fill::fill_document;
use super::normalize::{CellNormalizer, FillDownState, RawCell};
use super::prune::carries_data;
use super::row::PathKeyedRow;
use crate::model::ConversionCounts;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowRange {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl RowRange {
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    pub fn is_partial(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn resolve(&self, total_rows: usize) -> ResolvedRange {
        if total_rows == 0 {
            return ResolvedRange { first: 1, last: 0 };
        }
        let clamp = |row: usize| row.clamp(1, total_rows);

        ResolvedRange {
            first: clamp(self.start.unwrap_or(1)),
            last: clamp(self.end.unwrap_or(total_rows)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub first: usize,
    pub last: usize,
}

impl ResolvedRange {
    pub fn contains(&self, row_number: usize) -> bool {
        (self.first..=self.last).contains(&row_number)
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.last - self.first + 1
        }
    }
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub documents: Vec<OutputDocument>,
    pub counts: ConversionCounts,
}

pub struct Scanner<'a> {
    columns: &'a [String],
    normalizer: CellNormalizer,
    fill_down: FillDownState,
    progress_every: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(columns: &'a [String]) -> Result<Self> {
        Ok(Self {
            columns,
            normalizer: CellNormalizer::new()?,
            fill_down: FillDownState::new(),
            progress_every: 0,
        })
    }

    pub fn with_progress_every(mut self, rows: usize) -> Self {
        self.progress_every = rows;
        self
    }

    pub fn normalize_row(&mut self, cells: &[RawCell]) -> PathKeyedRow {
        let empty = RawCell::Empty;
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let cell = cells.get(index).unwrap_or(&empty);
                let value = self.fill_down.resolve(&self.normalizer, column, cell);
                (column.as_str(), value)
            })
            .collect()
    }

    pub fn run(mut self, rows: &[Vec<RawCell>], range: RowRange) -> Result<Conversion> {
        let total_rows = rows.len();
        let resolved = range.resolve(total_rows);
        let mut counts = ConversionCounts {
            total_rows,
            first_row: resolved.first,
            last_row: resolved.last,
            ..ConversionCounts::default()
        };
        let mut documents = Vec::new();

        info!(
            total_rows,
            columns = self.columns.len(),
            first_row = resolved.first,
            last_row = resolved.last,
            selected_rows = resolved.len(),
            "scanning rows"
        );

        for (index, cells) in rows.iter().enumerate() {
            let row_number = index + 1;
            if row_number > resolved.last {
                break;
            }

            if self.progress_every > 0 && row_number % self.progress_every == 0 {
                info!(rows_scanned = row_number, "conversion progress");
            }

            let row = self.normalize_row(cells);
            if !resolved.contains(row_number) {
                continue;
            }
            counts.processed_rows += 1;

            if row.is_all_null() {
                debug!(row = row_number, "skipping blank row");
                counts.blank_rows_skipped += 1;
                continue;
            }

            let document = build_document(&row)
                .with_context(|| format!("failed to map row {row_number}"))?;
            if carries_data(&document)
                .with_context(|| format!("failed to check row {row_number}"))?
            {
                documents.push(document);
            } else {
                debug!(row = row_number, "dropping row with no mapped data");
                counts.empty_documents_pruned += 1;
            }
        }

        counts.documents_saved = documents.len();
        info!(
            processed_rows = counts.processed_rows,
            documents_saved = counts.documents_saved,
            filled_columns = self.fill_down.len(),
            "scan completed"
        );

        Ok(Conversion { documents, counts })
    }
}

pub fn build_document(row: &PathKeyedRow) -> Result<OutputDocument> {
    let mut document = OutputDocument::template();
    fill_document(&mut document, row)?;
    Ok(document)
}
