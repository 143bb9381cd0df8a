//! Shared domain primitives: errors and config validation issues.

pub mod error;
pub mod validation;
