//! Rule evaluation against ingested datasets.
//!
//! One evaluator, one checker per rule kind:
//!
//! - **MinRecordCount / MaxRecordCount**: record count against a numeric
//!   threshold.
//! - **DateFormat**: every cell of the bound date column must match the
//!   rule's pattern in full.
//! - **CardNumberFormat**: like DateFormat, but values are compared on a
//!   whitespace-stripped canonical form.
//!
//! Evaluation is pure. The same dataset and rule always produce the same
//! verdict, and nothing here touches the network.

use regex::Regex;
use thiserror::Error;

use dq_model::{ColumnBindings, ColumnName, Dataset, MetadataId, RuleEntry, RuleKind, Verdict};

/// `actual` text for a failed date rule.
pub const INVALID_DATE: &str = "INVALID DATE FORMAT";
/// `actual` text for a failed card-number rule.
pub const INVALID_CARD_NUMBER: &str = "INVALID CREDIT CARD NUMBER FORMAT";

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule {id}: threshold {value:?} is not a non-negative integer")]
    InvalidRuleValue { id: MetadataId, value: String },
    #[error("rule {id}: invalid pattern: {reason}")]
    InvalidRulePattern { id: MetadataId, reason: String },
    #[error("dataset has no '{column}' column")]
    MissingColumn { column: ColumnName },
}

/// Evaluates a single rule against a dataset.
#[derive(Debug, Clone)]
pub struct RuleEvaluator {
    columns: ColumnBindings,
}

impl RuleEvaluator {
    pub fn new(columns: ColumnBindings) -> Self {
        Self { columns }
    }

    pub fn evaluate(&self, dataset: &Dataset, entry: &RuleEntry) -> Result<Verdict, RuleError> {
        match entry.kind {
            RuleKind::MinRecordCount => self.check_min_records(dataset, entry),
            RuleKind::MaxRecordCount => self.check_max_records(dataset, entry),
            RuleKind::DateFormat => self.check_date_format(dataset, entry),
            RuleKind::CardNumberFormat => self.check_card_number_format(dataset, entry),
        }
    }

    fn check_min_records(
        &self,
        dataset: &Dataset,
        entry: &RuleEntry,
    ) -> Result<Verdict, RuleError> {
        let threshold = parse_threshold(entry)?;
        let actual = dataset.record_count() as u64;
        Ok(verdict(
            entry,
            actual >= threshold,
            threshold.to_string(),
            actual.to_string(),
        ))
    }

    fn check_max_records(
        &self,
        dataset: &Dataset,
        entry: &RuleEntry,
    ) -> Result<Verdict, RuleError> {
        let threshold = parse_threshold(entry)?;
        let actual = dataset.record_count() as u64;
        Ok(verdict(
            entry,
            actual <= threshold,
            threshold.to_string(),
            actual.to_string(),
        ))
    }

    fn check_date_format(
        &self,
        dataset: &Dataset,
        entry: &RuleEntry,
    ) -> Result<Verdict, RuleError> {
        let column = require_column(dataset, &self.columns.date)?;
        let pattern = compile_pattern(entry)?;

        // Vacuously true when there are no records.
        let all_match = dataset
            .records
            .iter()
            .all(|record| pattern.is_match(record.cell(column).as_str()));

        let actual = if all_match {
            entry.value.clone()
        } else {
            INVALID_DATE.to_string()
        };
        Ok(verdict(entry, all_match, entry.value.clone(), actual))
    }

    fn check_card_number_format(
        &self,
        dataset: &Dataset,
        entry: &RuleEntry,
    ) -> Result<Verdict, RuleError> {
        let column = require_column(dataset, &self.columns.card_number)?;
        let pattern = compile_pattern(entry)?;

        let all_match = dataset.records.iter().all(|record| {
            pattern.is_match(&normalize_card_number(record.cell(column).as_str()))
        });

        let expected = format!("{}-digits", entry.value);
        let actual = if all_match {
            expected.clone()
        } else {
            INVALID_CARD_NUMBER.to_string()
        };
        Ok(verdict(entry, all_match, expected, actual))
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn verdict(entry: &RuleEntry, passed: bool, expected: String, actual: String) -> Verdict {
    Verdict {
        rule_id: entry.id,
        kind: entry.kind,
        passed,
        expected,
        actual,
    }
}

fn require_column<'a>(
    dataset: &Dataset,
    column: &'a ColumnName,
) -> Result<&'a ColumnName, RuleError> {
    if dataset.has_column(column) {
        Ok(column)
    } else {
        Err(RuleError::MissingColumn {
            column: column.clone(),
        })
    }
}

fn parse_threshold(entry: &RuleEntry) -> Result<u64, RuleError> {
    entry
        .value
        .trim()
        .parse::<u64>()
        .map_err(|_| RuleError::InvalidRuleValue {
            id: entry.id,
            value: entry.value.clone(),
        })
}

/// Compiles a format rule's pattern, anchored so it must match whole values.
fn compile_pattern(entry: &RuleEntry) -> Result<Regex, RuleError> {
    let Some(pattern) = entry.pattern.as_deref() else {
        return Err(RuleError::InvalidRulePattern {
            id: entry.id,
            reason: "format rule carries no pattern".to_string(),
        });
    };
    Regex::new(&format!("^(?:{pattern})$")).map_err(|err| RuleError::InvalidRulePattern {
        id: entry.id,
        reason: err.to_string(),
    })
}

/// Canonical card-number form: all whitespace stripped, so
/// `"4111 1111 1111 1111"` and `"4111111111111111"` compare equal.
pub fn normalize_card_number(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}
