//! Provider call identity
//!
//! A [`ProviderCall`] names one attempted invocation: which vendor, which
//! model. The same value tags the attempt in the run manifest and the
//! resulting [`ProviderOutput`](super::output::ProviderOutput), which is
//! what keeps the attempted/succeeded/failed bookkeeping consistent.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An external text-generation vendor integrated via an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Hosted model vendor A (chat completions API).
    OpenAi,
    /// Hosted model vendor B (messages API).
    Anthropic,
    /// Aggregation gateway addressing many third-party models by name.
    OpenRouter,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
            Provider::OpenRouter => write!(f, "openrouter"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "openrouter" => Ok(Provider::OpenRouter),
            other => Err(format!("Unknown provider: {other}")),
        }
    }
}

/// Identity of one attempted provider invocation (Value Object).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderCall {
    pub provider: Provider,
    pub model: String,
}

impl ProviderCall {
    pub fn new(provider: Provider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Stable `provider/model` label used in prompts and log lines.
    pub fn label(&self) -> String {
        format!("{}/{}", self.provider, self.model)
    }
}

impl std::fmt::Display for ProviderCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.provider, self.model)
    }
}
