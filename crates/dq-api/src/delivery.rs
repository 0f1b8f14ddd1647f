//! Feedback delivery, decoupled from any concrete transport.

use dq_model::{Acknowledgement, FeedbackAction, FieldId};

use crate::error::Result;

/// Delivers one feedback action to whatever stands behind it.
///
/// Validation sessions produce actions without knowing how they travel;
/// tests substitute an in-memory reporter for the HTTP client.
pub trait FeedbackReporter {
    fn report(&self, action: &FeedbackAction) -> Result<Acknowledgement>;
}

/// Outcome of delivering one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { field_id: FieldId, status: u16 },
    Failed { field_id: FieldId, error: String },
}

/// Delivers every action in order, continuing past per-action failures so
/// one dead endpoint cannot swallow the rest of the run's feedback.
pub fn deliver_all(
    reporter: &dyn FeedbackReporter,
    actions: &[FeedbackAction],
) -> Vec<DeliveryOutcome> {
    actions
        .iter()
        .map(|action| match reporter.report(action) {
            Ok(ack) => {
                tracing::info!(
                    field = %action.target_field_id,
                    status = ack.status,
                    "feedback delivered"
                );
                DeliveryOutcome::Delivered {
                    field_id: action.target_field_id,
                    status: ack.status,
                }
            }
            Err(error) => {
                tracing::warn!(
                    field = %action.target_field_id,
                    %error,
                    retryable = error.is_retryable(),
                    "feedback delivery failed"
                );
                DeliveryOutcome::Failed {
                    field_id: action.target_field_id,
                    error: error.to_string(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::cell::RefCell;

    struct ScriptedReporter {
        fail_on: Option<u64>,
        seen: RefCell<Vec<FieldId>>,
    }

    impl FeedbackReporter for ScriptedReporter {
        fn report(&self, action: &FeedbackAction) -> Result<Acknowledgement> {
            self.seen.borrow_mut().push(action.target_field_id);
            if self.fail_on == Some(action.target_field_id.value()) {
                Err(ApiError::Network("connection refused".to_string()))
            } else {
                Ok(Acknowledgement { status: 200 })
            }
        }
    }

    fn action(field: u64) -> FeedbackAction {
        FeedbackAction {
            target_field_id: FieldId::new(field),
            note: "ERROR: Data validation failed.".to_string(),
        }
    }

    #[test]
    fn delivers_actions_in_order() {
        let reporter = ScriptedReporter {
            fail_on: None,
            seen: RefCell::new(Vec::new()),
        };
        let outcomes = deliver_all(&reporter, &[action(1), action(2)]);

        assert_eq!(
            outcomes,
            vec![
                DeliveryOutcome::Delivered {
                    field_id: FieldId::new(1),
                    status: 200
                },
                DeliveryOutcome::Delivered {
                    field_id: FieldId::new(2),
                    status: 200
                },
            ]
        );
        assert_eq!(
            reporter.seen.into_inner(),
            vec![FieldId::new(1), FieldId::new(2)]
        );
    }

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let reporter = ScriptedReporter {
            fail_on: Some(2),
            seen: RefCell::new(Vec::new()),
        };
        let outcomes = deliver_all(&reporter, &[action(1), action(2), action(3)]);

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(
            outcomes[1],
            DeliveryOutcome::Failed { field_id, .. } if field_id == FieldId::new(2)
        ));
        assert!(matches!(outcomes[2], DeliveryOutcome::Delivered { .. }));
    }

    #[test]
    fn no_actions_means_no_outcomes() {
        let reporter = ScriptedReporter {
            fail_on: None,
            seen: RefCell::new(Vec::new()),
        };
        assert!(deliver_all(&reporter, &[]).is_empty());
    }
}
