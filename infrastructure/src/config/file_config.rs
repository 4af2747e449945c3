//! On-disk configuration schema.
//!
//! The TOML shape users write, deserialized leniently with full defaults
//! so an empty file is valid. Converted into the runtime types
//! ([`CrosscheckConfig`] and [`ProviderSettings`]) after merging; API
//! keys may live here but the environment takes precedence (see the
//! loader).

use crate::providers::ProviderSettings;
use crosscheck_application::{CrosscheckConfig, SynthesisTarget};
use crosscheck_domain::Provider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub models: ModelsSection,
    pub synthesis: SynthesisSection,
    pub limits: LimitsSection,
    pub endpoints: EndpointsSection,
    pub credentials: CredentialsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsSection {
    pub openai: String,
    pub anthropic: String,
    /// Downstream models fanned out through OpenRouter, one call each.
    pub openrouter: Vec<String>,
}

impl Default for ModelsSection {
    fn default() -> Self {
        let defaults = CrosscheckConfig::default();
        Self {
            openai: defaults.openai_model,
            anthropic: defaults.anthropic_model,
            openrouter: defaults.openrouter_models,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSection {
    pub provider: Provider,
    pub model: String,
}

impl Default for SynthesisSection {
    fn default() -> Self {
        let target = SynthesisTarget::default();
        Self {
            provider: target.provider,
            model: target.model,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSection {
    pub timeout_ms: u64,
    pub max_tokens: u32,
}

impl Default for LimitsSection {
    fn default() -> Self {
        let defaults = CrosscheckConfig::default();
        Self {
            timeout_ms: defaults.default_timeout_ms,
            max_tokens: defaults.default_max_tokens,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsSection {
    pub openai_base_url: String,
    pub anthropic_base_url: String,
    pub anthropic_version: String,
    pub openrouter_base_url: String,
}

impl Default for EndpointsSection {
    fn default() -> Self {
        let defaults = ProviderSettings::default();
        Self {
            openai_base_url: defaults.openai_base_url,
            anthropic_base_url: defaults.anthropic_base_url,
            anthropic_version: defaults.anthropic_version,
            openrouter_base_url: defaults.openrouter_base_url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsSection {
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
}

impl FileConfig {
    /// Runtime configuration for the use case.
    pub fn to_run_config(&self) -> CrosscheckConfig {
        CrosscheckConfig {
            openai_model: self.models.openai.clone(),
            anthropic_model: self.models.anthropic.clone(),
            openrouter_models: self.models.openrouter.clone(),
            synthesis: SynthesisTarget {
                provider: self.synthesis.provider,
                model: self.synthesis.model.clone(),
            },
            default_timeout_ms: self.limits.timeout_ms,
            default_max_tokens: self.limits.max_tokens,
        }
    }

    /// Adapter settings, with file-supplied credentials if any.
    pub fn to_provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            openai_api_key: self.credentials.openai_api_key.clone(),
            openai_base_url: self.endpoints.openai_base_url.clone(),
            anthropic_api_key: self.credentials.anthropic_api_key.clone(),
            anthropic_base_url: self.endpoints.anthropic_base_url.clone(),
            anthropic_version: self.endpoints.anthropic_version.clone(),
            openrouter_api_key: self.credentials.openrouter_api_key.clone(),
            openrouter_base_url: self.endpoints.openrouter_base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Figment;
    use figment::providers::{Format, Toml};

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: FileConfig = Figment::from(Toml::string("")).extract().unwrap();
        assert_eq!(config.to_run_config(), CrosscheckConfig::default());
        assert!(config.to_provider_settings().openai_api_key.is_none());
    }

    #[test]
    fn test_partial_file_overrides_only_named_fields() {
        let toml = r#"
            [models]
            openrouter = ["a/one", "b/two"]

            [limits]
            timeout_ms = 30000
        "#;
        let config: FileConfig = Figment::from(Toml::string(toml)).extract().unwrap();
        let run = config.to_run_config();

        assert_eq!(run.openrouter_models, vec!["a/one", "b/two"]);
        assert_eq!(run.default_timeout_ms, 30_000);
        assert_eq!(run.openai_model, CrosscheckConfig::default().openai_model);
    }

    #[test]
    fn test_synthesis_provider_parses_from_toml() {
        let toml = r#"
            [synthesis]
            provider = "openai"
            model = "gpt-4o"
        "#;
        let config: FileConfig = Figment::from(Toml::string(toml)).extract().unwrap();
        assert_eq!(config.to_run_config().synthesis.provider, Provider::OpenAi);
    }

    #[test]
    fn test_file_credentials_carried_into_settings() {
        let toml = r#"
            [credentials]
            anthropic_api_key = "sk-test"
        "#;
        let config: FileConfig = Figment::from(Toml::string(toml)).extract().unwrap();
        let settings = config.to_provider_settings();
        assert_eq!(settings.anthropic_api_key.as_deref(), Some("sk-test"));
        assert!(settings.openai_api_key.is_none());
    }
}
