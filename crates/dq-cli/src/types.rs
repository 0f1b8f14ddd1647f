use std::path::PathBuf;

use dq_api::DeliveryOutcome;
use dq_model::ValidationReport;

#[derive(Debug)]
pub struct CheckResult {
    pub dataset: String,
    pub record_count: usize,
    pub report: ValidationReport,
    pub deliveries: Vec<DeliveryOutcome>,
    pub report_path: Option<PathBuf>,
    pub has_failures: bool,
}
