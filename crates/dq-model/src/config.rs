use serde::{Deserialize, Serialize};

use crate::{ColumnName, FieldId, MetadataId, RuleKind};

/// Which extra-metadata items carry each rule. Fixed per deployment; a rule
/// whose id is absent is simply never evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleIdMap {
    pub min_expected_records: Option<MetadataId>,
    pub max_expected_records: Option<MetadataId>,
    pub date_format_pattern: Option<MetadataId>,
    pub date_format_label: Option<MetadataId>,
    pub card_number_pattern: Option<MetadataId>,
    pub card_number_digits: Option<MetadataId>,
}

impl RuleIdMap {
    /// Item holding the rule's operative value (threshold or pattern).
    pub fn primary_id(&self, kind: RuleKind) -> Option<MetadataId> {
        match kind {
            RuleKind::MinRecordCount => self.min_expected_records,
            RuleKind::MaxRecordCount => self.max_expected_records,
            RuleKind::DateFormat => self.date_format_pattern,
            RuleKind::CardNumberFormat => self.card_number_pattern,
        }
    }

    /// Companion item holding the human descriptor for a format rule.
    pub fn descriptor_id(&self, kind: RuleKind) -> Option<MetadataId> {
        match kind {
            RuleKind::DateFormat => self.date_format_label,
            RuleKind::CardNumberFormat => self.card_number_digits,
            RuleKind::MinRecordCount | RuleKind::MaxRecordCount => None,
        }
    }
}

/// Dataset columns the format rules read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnBindings {
    pub date: ColumnName,
    pub card_number: ColumnName,
}

impl Default for ColumnBindings {
    fn default() -> Self {
        Self {
            date: ColumnName::from_static("Date"),
            card_number: ColumnName::from_static("Credit Card Number"),
        }
    }
}

/// Deployment wiring for a validation run, usually loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub rule_ids: RuleIdMap,
    #[serde(default)]
    pub columns: ColumnBindings,
    /// Governance field flagged when card-number validation fails.
    pub flag_field: FieldId,
}
