//! Ports (interfaces) the application layer depends on.
//!
//! Implementations live in the infrastructure layer.

pub mod completion_gateway;
