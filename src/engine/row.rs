use std::collections::HashMap;

use super::value::CellValue;

static NULL: CellValue = CellValue::Null;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathKeyedRow {
    cells: HashMap<String, CellValue>,
}

impl PathKeyedRow {
    pub fn get(&self, path: &str) -> &CellValue {
        self.cells.get(path).unwrap_or(&NULL)
    }

    pub fn present(&self, path: &str) -> Option<&CellValue> {
        self.get(path).present()
    }

    pub fn is_all_null(&self) -> bool {
        self.cells.values().all(CellValue::is_null)
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for PathKeyedRow {
    fn from_iter<T: IntoIterator<Item = (K, CellValue)>>(iter: T) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(path, value)| (path.into(), value))
                .collect(),
        }
    }
}
