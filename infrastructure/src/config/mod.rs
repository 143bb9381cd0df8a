//! Configuration loading and validation.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLogConfig, FileQuestionConfig, FileSubmitConfig,
};
pub use loader::ConfigLoader;
