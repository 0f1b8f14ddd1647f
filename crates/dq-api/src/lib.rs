//! Client for the metadata service.
//!
//! Two operations: fetch the extra-metadata listing that rules are resolved
//! from, and PATCH a governance field flag when validation asks for it. The
//! `FeedbackReporter` trait keeps the second one swappable so nothing above
//! this crate needs a network to test against.

pub mod client;
pub mod delivery;
pub mod endpoints;
pub mod error;

pub use client::{ApiCredentials, GovernanceClient};
pub use delivery::{DeliveryOutcome, FeedbackReporter, deliver_all};
pub use endpoints::ApiEndpoints;
pub use error::{ApiError, Result};
