use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use crate::engine::RawCell;
use crate::engine::paths;
use crate::model::ColumnMap;

#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    pub sheet_names: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl SheetTable {
    pub fn apply_column_map(self, map: &ColumnMap) -> Self {
        let keep: Vec<(usize, String)> = map
            .columns
            .iter()
            .enumerate()
            .take(self.columns.len())
            .filter_map(|(index, label)| {
                let label = label.as_deref()?.trim();
                (!label.is_empty()).then(|| (index, label.to_string()))
            })
            .collect();

        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                keep.iter()
                    .map(|(index, _)| row.get(*index).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Self {
            name: self.name,
            sheet_names: self.sheet_names,
            columns: keep.into_iter().map(|(_, label)| label).collect(),
            rows,
        }
    }

    pub fn unknown_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|label| !paths::is_known(label))
            .cloned()
            .collect()
    }
}

pub fn load_table(path: &Path, sheet: Option<&str>, column_map: Option<&Path>) -> Result<SheetTable> {
    let table = read_sheet(path, sheet)?;
    match column_map {
        Some(map_path) => Ok(table.apply_column_map(&load_column_map(map_path)?)),
        None => Ok(table),
    }
}

pub fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<SheetTable> {
    if !path.is_file() {
        bail!("spreadsheet not found: {}", path.display());
    }

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open spreadsheet: {}", path.display()))?;
    let sheet_names = workbook.sheet_names();

    let name = match sheet {
        Some(name) => name.to_string(),
        None => sheet_names
            .first()
            .cloned()
            .with_context(|| format!("no worksheets in {}", path.display()))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .with_context(|| format!("failed to read sheet '{name}' in {}", path.display()))?;

    let table = table_from_range(&name, sheet_names, &range)?;
    info!(
        path = %path.display(),
        sheet = %table.name,
        rows = table.rows.len(),
        columns = table.columns.len(),
        "read spreadsheet"
    );
    Ok(table)
}

pub fn table_from_range(
    name: &str,
    sheet_names: Vec<String>,
    range: &Range<Data>,
) -> Result<SheetTable> {
    let mut rows_iter = range.rows();
    let header = rows_iter
        .next()
        .with_context(|| format!("sheet '{name}' has no header row"))?;
    let columns = header_labels(header);

    let rows = rows_iter
        .map(|row| {
            (0..columns.len())
                .map(|index| row.get(index).map(convert_cell).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(SheetTable {
        name: name.to_string(),
        sheet_names,
        columns,
        rows,
    })
}

pub fn header_labels(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut labels = Vec::with_capacity(header.len());

    for (index, cell) in header.iter().enumerate() {
        let raw = cell_text(cell);
        let base = if raw.is_empty() {
            format!("Unnamed: {index}")
        } else {
            raw
        };

        let label = match seen.get_mut(&base) {
            Some(count) => {
                *count += 1;
                let renamed = format!("{base}.{count}");
                warn!(column = %base, renamed = %renamed, "duplicate column label");
                renamed
            }
            None => {
                seen.insert(base.clone(), 0);
                base
            }
        };
        labels.push(label);
    }

    labels
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(text) => text.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

pub fn convert_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::String(text) => RawCell::Text(text.clone()),
        Data::Int(value) => RawCell::Int(*value),
        Data::Float(value) => RawCell::Float(*value),
        Data::Bool(value) => RawCell::Bool(*value),
        Data::DateTime(value) => match value.as_datetime() {
            Some(ts) => RawCell::Timestamp(ts),
            None => RawCell::Float(value.as_f64()),
        },
        Data::DateTimeIso(text) => parse_iso_timestamp(text)
            .map(RawCell::Timestamp)
            .unwrap_or_else(|| RawCell::Text(text.clone())),
        Data::DurationIso(text) => RawCell::Text(text.clone()),
    }
}

fn parse_iso_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub fn load_column_map(path: &Path) -> Result<ColumnMap> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let map: ColumnMap = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!(
        path = %path.display(),
        mapped = map.columns.iter().flatten().count(),
        "loaded column map"
    );
    Ok(map)
}
