//! Use cases (application services).

pub mod deadline;
pub mod run_crosscheck;

pub use run_crosscheck::{RunCrosscheckError, RunCrosscheckUseCase};
