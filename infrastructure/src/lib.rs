//! Infrastructure layer for crosscheck.
//!
//! Implements the application's [`CompletionGateway`] port over HTTP for
//! the three provider kinds (OpenAI, Anthropic, OpenRouter) and loads
//! runtime configuration from TOML files and the environment.
//!
//! [`CompletionGateway`]: crosscheck_application::CompletionGateway

pub mod config;
pub mod providers;

pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use providers::{HttpCompletionGateway, ProviderSettings};
