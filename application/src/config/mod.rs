//! Run configuration for the crosscheck use case.
//!
//! An explicit configuration object injected at construction time, rather
//! than ad-hoc environment reads inside adapters. The infrastructure
//! layer's loader builds this from files and environment; tests build it
//! directly.

use crosscheck_domain::crosscheck::request::{
    DEFAULT_MAX_TOKENS, DEFAULT_TIMEOUT_MS, TIMEOUT_CEILING_MS, TIMEOUT_FLOOR_MS, TOKEN_CEILING,
    TOKEN_FLOOR,
};
use crosscheck_domain::{Provider, ProviderCall};
use serde::{Deserialize, Serialize};

/// Which vendor/model runs the synthesis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisTarget {
    pub provider: Provider,
    pub model: String,
}

impl SynthesisTarget {
    pub fn call(&self) -> ProviderCall {
        ProviderCall::new(self.provider, self.model.clone())
    }
}

impl Default for SynthesisTarget {
    fn default() -> Self {
        Self {
            provider: Provider::Anthropic,
            model: "claude-sonnet-4-5".to_string(),
        }
    }
}

/// Configuration consumed by [`RunCrosscheckUseCase`].
///
/// [`RunCrosscheckUseCase`]: crate::use_cases::run_crosscheck::RunCrosscheckUseCase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosscheckConfig {
    /// Model for the hosted vendor A call.
    pub openai_model: String,
    /// Model for the hosted vendor B call.
    pub anthropic_model: String,
    /// Downstream models fanned out through the aggregation gateway,
    /// one call per entry.
    pub openrouter_models: Vec<String>,
    /// Vendor/model for the second-pass synthesis call.
    pub synthesis: SynthesisTarget,
    /// Per-call deadline applied when the request carries none.
    pub default_timeout_ms: u64,
    /// Token budget applied when the request carries none.
    pub default_max_tokens: u32,
}

impl Default for CrosscheckConfig {
    fn default() -> Self {
        Self {
            openai_model: "gpt-4o".to_string(),
            anthropic_model: "claude-sonnet-4-5".to_string(),
            openrouter_models: vec!["meta-llama/llama-3.1-70b-instruct".to_string()],
            synthesis: SynthesisTarget::default(),
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl CrosscheckConfig {
    /// Parse a comma-separated downstream model list, dropping empties.
    pub fn with_openrouter_models_csv(mut self, csv: &str) -> Self {
        self.openrouter_models = csv
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from)
            .collect();
        self
    }

    /// Check the configured defaults against the hard clamp bounds.
    ///
    /// Returns a description of the first impossible setting, if any.
    pub fn validate(&self) -> Result<(), String> {
        if !(TIMEOUT_FLOOR_MS..=TIMEOUT_CEILING_MS).contains(&self.default_timeout_ms) {
            return Err(format!(
                "default_timeout_ms {} outside [{TIMEOUT_FLOOR_MS}, {TIMEOUT_CEILING_MS}]",
                self.default_timeout_ms
            ));
        }
        if !(TOKEN_FLOOR..=TOKEN_CEILING).contains(&self.default_max_tokens) {
            return Err(format!(
                "default_max_tokens {} outside [{TOKEN_FLOOR}, {TOKEN_CEILING}]",
                self.default_max_tokens
            ));
        }
        if self.openai_model.trim().is_empty()
            || self.anthropic_model.trim().is_empty()
            || self.synthesis.model.trim().is_empty()
        {
            return Err("model identifiers cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CrosscheckConfig::default().validate().is_ok());
    }

    #[test]
    fn test_csv_model_list() {
        let config = CrosscheckConfig::default()
            .with_openrouter_models_csv("a/one, b/two ,, c/three");
        assert_eq!(config.openrouter_models, vec!["a/one", "b/two", "c/three"]);
    }

    #[test]
    fn test_impossible_timeout_default_rejected() {
        let config = CrosscheckConfig {
            default_timeout_ms: 1,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("default_timeout_ms"));
    }

    #[test]
    fn test_impossible_token_default_rejected() {
        let config = CrosscheckConfig {
            default_max_tokens: 1_000_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let config = CrosscheckConfig {
            openai_model: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
