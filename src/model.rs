use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionCounts {
    pub total_rows: usize,
    pub processed_rows: usize,
    pub blank_rows_skipped: usize,
    pub empty_documents_pruned: usize,
    pub documents_saved: usize,
    pub first_row: usize,
    pub last_row: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestedRange {
    pub start_row: Option<usize>,
    pub end_row: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub manifest_version: u32,
    pub run_id: String,
    pub started_at: String,
    pub completed_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub sheet: String,
    pub output_path: Option<String>,
    pub column_map_path: Option<String>,
    pub requested_range: RequestedRange,
    pub counts: ConversionCounts,
    pub unknown_columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetInventory {
    pub input_path: String,
    pub sheet: String,
    pub sheet_names: Vec<String>,
    pub total_rows: usize,
    pub columns: Vec<String>,
    pub unknown_columns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnMap {
    pub columns: Vec<Option<String>>,
}
