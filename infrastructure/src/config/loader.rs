//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use crate::providers::ProviderSettings;
use crosscheck_application::CrosscheckConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CROSSCHECK_*` environment variables (`__` as section separator,
    ///    e.g. `CROSSCHECK_LIMITS__TIMEOUT_MS`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./crosscheck.toml` or `./.crosscheck.toml`
    /// 4. XDG config: `~/.config/crosscheck/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["crosscheck.toml", ".crosscheck.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("CROSSCHECK_").split("__"));

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Turn a merged file config into the runtime pair, filling
    /// credentials from the standard per-vendor environment variables.
    /// The environment wins over file-supplied keys.
    pub fn resolve(file: &FileConfig) -> (CrosscheckConfig, ProviderSettings) {
        let mut settings = file.to_provider_settings();
        settings.openai_api_key =
            env_credential("OPENAI_API_KEY").or(settings.openai_api_key.take());
        settings.anthropic_api_key =
            env_credential("ANTHROPIC_API_KEY").or(settings.anthropic_api_key.take());
        settings.openrouter_api_key =
            env_credential("OPENROUTER_API_KEY").or(settings.openrouter_api_key.take());

        (file.to_run_config(), settings)
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("crosscheck").join("config.toml"))
    }
}

fn env_credential(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
