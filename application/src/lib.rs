//! Application layer for crosscheck.
//!
//! Defines the [`CompletionGateway`] port that infrastructure adapters
//! implement, the run configuration, and the [`RunCrosscheckUseCase`] that
//! fans a request out to every configured provider, synthesizes a
//! consensus, and assembles the final result.

pub mod config;
pub mod ports;
pub mod use_cases;

pub use config::{CrosscheckConfig, SynthesisTarget};
pub use ports::completion_gateway::{CompletionGateway, CompletionRequest};
pub use use_cases::run_crosscheck::{RunCrosscheckError, RunCrosscheckUseCase};
