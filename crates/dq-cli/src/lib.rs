//! CLI library components for the dq validator.

pub mod logging;
pub mod pipeline;
