//! Rule evaluation and validation sessions.
//!
//! A `ValidationSession` takes an ingested dataset and a resolved rule
//! catalog, evaluates every configured rule in a fixed order, and produces a
//! `ValidationReport` of verdicts plus any feedback actions. Delivery of
//! those actions lives elsewhere; this crate never performs I/O beyond the
//! optional JSON report writer.

pub mod evaluator;
pub mod report;
pub mod session;

pub use evaluator::{
    INVALID_CARD_NUMBER, INVALID_DATE, RuleError, RuleEvaluator, normalize_card_number,
};
pub use report::{ValidationReportPayload, report_payload, write_validation_report_json};
pub use session::ValidationSession;
