//! Ports (interfaces) between the application layer and the outside world.
//!
//! Adapters live in the infrastructure and presentation layers; tests use
//! in-memory mocks.

pub mod delivery_log;
pub mod form_sink;
pub mod observer;
