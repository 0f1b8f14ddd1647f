//! JSON report output.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;

use dq_model::{FeedbackAction, ValidationReport, Verdict};

const REPORT_SCHEMA: &str = "dq.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub dataset: String,
    pub record_count: usize,
    pub passed_count: usize,
    pub failed_count: usize,
    pub verdicts: Vec<Verdict>,
    pub actions: Vec<FeedbackAction>,
}

/// Builds the report payload with an explicit timestamp so callers (and
/// tests) control the only non-deterministic field.
pub fn report_payload(
    report: &ValidationReport,
    record_count: usize,
    generated_at: String,
) -> ValidationReportPayload {
    ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at,
        dataset: report.dataset.clone(),
        record_count,
        passed_count: report.passed_count(),
        failed_count: report.failed_count(),
        verdicts: report.verdicts.clone(),
        actions: report.actions.clone(),
    }
}

pub fn write_validation_report_json(
    output_path: &Path,
    report: &ValidationReport,
    record_count: usize,
) -> anyhow::Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    let payload = report_payload(report, record_count, Utc::now().to_rfc3339());
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))
        .with_context(|| format!("write report {}", output_path.display()))?;
    Ok(output_path.to_path_buf())
}
