use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

pub fn has_any_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => {
            let trimmed = text.trim();
            !trimmed.is_empty() && trimmed != "nan"
        }
        Value::Number(_) | Value::Bool(_) => true,
        Value::Array(items) => items.iter().any(has_any_value),
        Value::Object(fields) => fields.values().any(has_any_value),
    }
}

pub fn carries_data<T: Serialize>(part: &T) -> Result<bool> {
    let value = serde_json::to_value(part).context("failed to convert document part to json")?;
    Ok(has_any_value(&value))
}
