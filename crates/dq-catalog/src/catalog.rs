use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use dq_model::{MetadataId, RuleEntry, RuleIdMap, RuleKind};

use crate::payload::ExtraMetadataPayload;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed extra-metadata payload: {reason}")]
    MalformedPayload { reason: String },
}

/// Rules resolved from one extra-metadata payload, keyed by kind.
///
/// `RuleKind`'s ordering is its evaluation order, so iterating the map visits
/// rules in the order a session evaluates them.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    entries: BTreeMap<RuleKind, RuleEntry>,
}

impl RuleCatalog {
    /// Parses a raw payload and resolves the configured metadata ids into
    /// typed rules.
    ///
    /// Ids absent from the payload leave their rule unconfigured rather than
    /// failing the parse. A format rule whose descriptor item is absent falls
    /// back to the raw pattern text as its descriptor. When the payload
    /// repeats an id, the last occurrence wins.
    pub fn parse(raw: &str, ids: &RuleIdMap) -> Result<Self, CatalogError> {
        let payload: ExtraMetadataPayload =
            serde_json::from_str(raw).map_err(|err| CatalogError::MalformedPayload {
                reason: err.to_string(),
            })?;

        let mut values: BTreeMap<MetadataId, String> = BTreeMap::new();
        for item in payload.extra_metadata_list {
            values.insert(item.id, item.attributes.extra_metadata_value);
        }

        let mut entries = BTreeMap::new();
        for kind in RuleKind::EVALUATION_ORDER {
            let Some(primary) = ids.primary_id(kind) else {
                continue;
            };
            let Some(primary_value) = values.get(&primary) else {
                debug!(id = %primary, rule = %kind, "metadata item not in payload, rule skipped");
                continue;
            };
            let entry = if kind.is_format() {
                let descriptor = ids
                    .descriptor_id(kind)
                    .and_then(|id| values.get(&id))
                    .unwrap_or(primary_value)
                    .clone();
                RuleEntry {
                    id: primary,
                    kind,
                    value: descriptor,
                    pattern: Some(primary_value.clone()),
                }
            } else {
                RuleEntry {
                    id: primary,
                    kind,
                    value: primary_value.clone(),
                    pattern: None,
                }
            };
            entries.insert(kind, entry);
        }

        debug!(rules = entries.len(), "rule catalog resolved");
        Ok(Self { entries })
    }

    pub fn get(&self, kind: RuleKind) -> Option<&RuleEntry> {
        self.entries.get(&kind)
    }

    /// Resolved rules in evaluation order.
    pub fn entries(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
