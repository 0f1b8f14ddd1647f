//! Ordered, fail-soft evaluation of a rule catalog.

use tracing::{debug, info, warn};

use dq_catalog::RuleCatalog;
use dq_model::{
    Dataset, FeedbackAction, FieldId, RuleEntry, RuleKind, ValidationConfig, ValidationReport,
    Verdict,
};

use crate::evaluator::{INVALID_CARD_NUMBER, RuleError, RuleEvaluator};

/// Runs every configured rule against one dataset.
pub struct ValidationSession {
    evaluator: RuleEvaluator,
    flag_field: FieldId,
}

impl ValidationSession {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            evaluator: RuleEvaluator::new(config.columns.clone()),
            flag_field: config.flag_field,
        }
    }

    /// Evaluates the catalog's rules in the fixed order, one verdict per
    /// configured rule.
    ///
    /// A rule that cannot be evaluated is recorded as a failed verdict with
    /// the error text as its `actual`, and the run moves on to the next rule.
    /// A card-number rule that evaluated cleanly and failed also queues a
    /// `FeedbackAction`; rule errors never queue one.
    pub fn run(&self, dataset: &Dataset, catalog: &RuleCatalog) -> ValidationReport {
        let mut report = ValidationReport::new(&dataset.source);

        for kind in RuleKind::EVALUATION_ORDER {
            let Some(entry) = catalog.get(kind) else {
                debug!(rule = %kind, "rule not configured, skipping");
                continue;
            };
            match self.evaluator.evaluate(dataset, entry) {
                Ok(verdict) => {
                    debug!(
                        rule = %kind,
                        id = %verdict.rule_id,
                        passed = verdict.passed,
                        "rule evaluated"
                    );
                    if !verdict.passed && kind == RuleKind::CardNumberFormat {
                        report.actions.push(self.flag_action(entry));
                    }
                    report.verdicts.push(verdict);
                }
                Err(error) => {
                    warn!(rule = %kind, id = %entry.id, %error, "rule could not be evaluated");
                    report.verdicts.push(error_verdict(entry, &error));
                }
            }
        }

        info!(
            dataset = %report.dataset,
            rules = report.verdicts.len(),
            failed = report.failed_count(),
            actions = report.actions.len(),
            "validation run complete"
        );
        report
    }

    fn flag_action(&self, entry: &RuleEntry) -> FeedbackAction {
        FeedbackAction {
            target_field_id: self.flag_field,
            note: format!(
                "ERROR: Data validation failed. {INVALID_CARD_NUMBER}. Expected format {}-digits.",
                entry.value
            ),
        }
    }
}

/// An errored rule still yields a verdict so the report stays complete; the
/// error text takes the place of the observed value.
fn error_verdict(entry: &RuleEntry, error: &RuleError) -> Verdict {
    let expected = match entry.kind {
        RuleKind::CardNumberFormat => format!("{}-digits", entry.value),
        _ => entry.value.clone(),
    };
    Verdict {
        rule_id: entry.id,
        kind: entry.kind,
        passed: false,
        expected,
        actual: error.to_string(),
    }
}
