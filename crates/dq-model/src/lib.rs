//! Shared data model for dq validation runs.

pub mod config;
pub mod dataset;
pub mod error;
pub mod feedback;
pub mod ids;
pub mod rule;
pub mod verdict;

pub use config::{ColumnBindings, RuleIdMap, ValidationConfig};
pub use dataset::{CellValue, Dataset, Record};
pub use error::{ModelError, Result};
pub use feedback::{Acknowledgement, FeedbackAction};
pub use ids::{ColumnName, FieldId, MetadataId, RecordId};
pub use rule::{RuleEntry, RuleKind};
pub use verdict::{ValidationReport, Verdict};
