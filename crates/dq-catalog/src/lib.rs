//! Rule catalog resolution from extra-metadata payloads.
//!
//! The metadata service stores rule values as free-text extra-metadata items.
//! Which item carries which rule is deployment wiring (`RuleIdMap`); this
//! crate turns a raw payload plus that wiring into typed `RuleEntry` values.
//! Format rules pair a pattern item with a human descriptor item (e.g. the
//! regex and the text `16`), which is why two ids map to one rule.

mod catalog;
mod payload;

pub use catalog::{CatalogError, RuleCatalog};
pub use payload::{ExtraMetadataItem, ExtraMetadataPayload, ItemAttributes};
