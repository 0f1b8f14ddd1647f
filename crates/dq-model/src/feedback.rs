use serde::{Deserialize, Serialize};

use crate::FieldId;

/// Request to flag a governance field after a failed card-number check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAction {
    pub target_field_id: FieldId,
    /// Note attached to the flag, spelling out what failed.
    pub note: String,
}

/// What the metadata service answered when a flag was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// HTTP status the service returned.
    pub status: u16,
}
