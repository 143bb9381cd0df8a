//! Infrastructure layer for survey-wizard
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLogConfig, FileQuestionConfig,
    FileSubmitConfig,
};
pub use http::{DryRunSink, HttpFormSink};
pub use logging::JsonlDeliveryLog;
