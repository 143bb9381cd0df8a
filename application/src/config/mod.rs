//! Application configuration types.

mod submit_params;

pub use submit_params::SubmitParams;
