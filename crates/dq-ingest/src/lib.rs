#![deny(unsafe_code)]

//! CSV ingest for dq validation runs.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use sha2::Digest;

use dq_model::{CellValue, ColumnName, Dataset, Record, RecordId};

#[derive(Debug, Clone)]
pub struct CsvIngestOptions {
    /// Stable source identifier for provenance and record-id derivation
    /// (e.g. the data file name).
    pub source_id: String,
}

impl CsvIngestOptions {
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
        }
    }
}

fn derive_record_id(source_id: &str, record_number: u64) -> RecordId {
    // Deterministic: sha256("<source_id>\0<record_number>"), first 16 bytes.
    let mut hasher = sha2::Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(record_number.to_string().as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    RecordId::from_sha256(digest)
}

pub fn ingest_csv_file(csv_path: &Path, options: &CsvIngestOptions) -> anyhow::Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(csv_path)
        .with_context(|| format!("open data file {}", csv_path.display()))?;
    let headers = reader.headers()?.clone();

    let columns: Vec<ColumnName> = headers
        .iter()
        .map(ColumnName::new)
        .collect::<Result<Vec<_>, _>>()?;

    let mut dataset = Dataset::new(options.source_id.clone(), columns);

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let record_number = (idx as u64) + 1;

        let mut cells: BTreeMap<ColumnName, CellValue> = BTreeMap::new();
        for (h, v) in headers.iter().zip(record.iter()) {
            let name = ColumnName::new(h)?;
            let value = v.trim();
            let cell = if value.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value.to_string())
            };
            cells.insert(name, cell);
        }

        dataset.push_record(Record {
            id: derive_record_id(&options.source_id, record_number),
            cells,
        });
    }

    Ok(dataset)
}
