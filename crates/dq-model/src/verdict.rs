use serde::{Deserialize, Serialize};

use crate::{FeedbackAction, MetadataId, RuleKind};

/// Outcome of evaluating one rule against one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub rule_id: MetadataId,
    pub kind: RuleKind,
    pub passed: bool,
    /// What the rule required, e.g. `"10"` or `"16-digits"`.
    pub expected: String,
    /// What the dataset showed, e.g. `"5"` or `"INVALID DATE FORMAT"`.
    pub actual: String,
}

/// Everything one validation run produced, verdicts in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub dataset: String,
    pub verdicts: Vec<Verdict>,
    pub actions: Vec<FeedbackAction>,
}

impl ValidationReport {
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            verdicts: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn failed_count(&self) -> usize {
        self.verdicts.iter().filter(|verdict| !verdict.passed).count()
    }

    pub fn passed_count(&self) -> usize {
        self.verdicts.len() - self.failed_count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}
