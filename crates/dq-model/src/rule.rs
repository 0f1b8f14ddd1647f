use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MetadataId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    MinRecordCount,
    MaxRecordCount,
    DateFormat,
    CardNumberFormat,
}

impl RuleKind {
    /// Rules are always evaluated in this order, regardless of payload order.
    pub const EVALUATION_ORDER: [RuleKind; 4] = [
        RuleKind::MinRecordCount,
        RuleKind::MaxRecordCount,
        RuleKind::DateFormat,
        RuleKind::CardNumberFormat,
    ];

    /// Format rules match cell text against a pattern; the rest count records.
    pub fn is_format(self) -> bool {
        matches!(self, RuleKind::DateFormat | RuleKind::CardNumberFormat)
    }

    /// Short label used in summaries and log lines.
    pub fn label(self) -> &'static str {
        match self {
            RuleKind::MinRecordCount => "min record count",
            RuleKind::MaxRecordCount => "max record count",
            RuleKind::DateFormat => "date format",
            RuleKind::CardNumberFormat => "card number format",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rule resolved from the extra-metadata payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Metadata item the rule's operative value was read from.
    pub id: MetadataId,
    pub kind: RuleKind,
    /// Threshold text for count rules; human descriptor for format rules.
    pub value: String,
    /// Regular expression source, present for format rules only.
    pub pattern: Option<String>,
}
