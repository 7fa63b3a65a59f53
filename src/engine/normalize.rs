use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use regex::Regex;

use super::value::CellValue;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawCell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl RawCell {
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty() || text.trim() == "nan",
            Self::Float(value) => value.is_nan(),
            Self::Int(_) | Self::Bool(_) | Self::Timestamp(_) => false,
        }
    }
}

pub struct CellNormalizer {
    numeric: Regex,
}

impl CellNormalizer {
    pub fn new() -> Result<Self> {
        let numeric =
            Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").context("failed to compile numeric cell regex")?;
        Ok(Self { numeric })
    }

    pub fn normalize(&self, cell: &RawCell) -> CellValue {
        match cell {
            _ if cell.is_blank() => CellValue::Null,
            RawCell::Timestamp(ts) => CellValue::Text(ts.format("%Y-%m-%d").to_string()),
            RawCell::Int(value) => self.coerce_text(&value.to_string()),
            RawCell::Float(value) => self.coerce_text(&value.to_string()),
            RawCell::Bool(true) => CellValue::Text("True".to_string()),
            RawCell::Bool(false) => CellValue::Text("False".to_string()),
            RawCell::Text(text) => self.coerce_text(text),
            RawCell::Empty => CellValue::Null,
        }
    }

    fn coerce_text(&self, text: &str) -> CellValue {
        let trimmed = text.trim();
        // codes such as "01" or "007" keep their leading zeros
        if !self.numeric.is_match(trimmed) || has_leading_zero(trimmed) {
            return CellValue::Text(trimmed.to_string());
        }

        if !trimmed.contains('.') {
            return match trimmed.parse::<i64>() {
                Ok(value) => CellValue::Integer(value),
                Err(_) => CellValue::Text(trimmed.to_string()),
            };
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.fract() != 0.0 => CellValue::Float(value),
            Ok(value) if value.abs() < i64::MAX as f64 => CellValue::Integer(value as i64),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }
}

fn has_leading_zero(digits: &str) -> bool {
    let integer_part = digits.split('.').next().unwrap_or_default();
    integer_part.len() > 1 && integer_part.starts_with('0')
}

#[derive(Debug, Default)]
pub struct FillDownState {
    last_seen: HashMap<String, CellValue>,
}

impl FillDownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(
        &mut self,
        normalizer: &CellNormalizer,
        column: &str,
        cell: &RawCell,
    ) -> CellValue {
        if cell.is_blank() {
            return self.last_seen.get(column).cloned().unwrap_or_default();
        }

        let value = normalizer.normalize(cell);
        self.last_seen.insert(column.to_string(), value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.last_seen.len()
    }
}
