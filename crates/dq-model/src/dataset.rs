#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::{ColumnName, RecordId};

const MISSING: CellValue = CellValue::Missing;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Text content of the cell, with `Missing` reading as the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Text(text) => text,
            CellValue::Missing => "",
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub cells: BTreeMap<ColumnName, CellValue>,
}

impl Record {
    /// Cell under `column`; a cell that was never ingested reads as `Missing`.
    pub fn cell(&self, column: &ColumnName) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    /// Stable source identifier, e.g. the ingested file name.
    pub source: String,
    /// Columns in the order the source declared them.
    pub columns: Vec<ColumnName>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, columns: Vec<ColumnName>) -> Self {
        Self {
            source: source.into(),
            columns,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn has_column(&self, column: &ColumnName) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}
