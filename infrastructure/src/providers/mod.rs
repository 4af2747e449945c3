//! HTTP provider adapters
//!
//! [`HttpCompletionGateway`] implements the application's no-throw
//! [`CompletionGateway`] contract: each vendor module returns a
//! `Result<Completion, AdapterError>` internally, and the gateway folds
//! every error into a `status: error` output tagged with the call's
//! identity. Timeouts are not produced here — the application's deadline
//! wrapper owns that classification.
//!
//! Credentials come from the injected [`ProviderSettings`], checked at
//! call time, so a missing key degrades that one adapter instead of
//! failing construction.

mod anthropic;
mod openai;
mod openrouter;

use async_trait::async_trait;
use crosscheck_application::{CompletionGateway, CompletionRequest};
use crosscheck_domain::{Provider, ProviderCall, ProviderOutput, TokenUsage};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Credentials and endpoints for the three provider kinds.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub anthropic_version: String,
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            anthropic_api_key: None,
            anthropic_base_url: "https://api.anthropic.com/v1".to_string(),
            anthropic_version: "2023-06-01".to_string(),
            openrouter_api_key: None,
            openrouter_base_url: "https://openrouter.ai/api/v1".to_string(),
        }
    }
}

/// Failure modes shared by all vendor adapters.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A successful vendor completion before it is tagged as a
/// [`ProviderOutput`].
#[derive(Debug)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

/// Reqwest-backed implementation of the completion gateway.
///
/// One shared client; per-request deadlines are enforced by the caller,
/// so the client itself carries no timeout.
pub struct HttpCompletionGateway {
    client: reqwest::Client,
    settings: ProviderSettings,
}

impl HttpCompletionGateway {
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    async fn dispatch(
        &self,
        call: &ProviderCall,
        request: &CompletionRequest,
    ) -> Result<Completion, AdapterError> {
        match call.provider {
            Provider::OpenAi => {
                openai::complete(&self.client, &self.settings, &call.model, request).await
            }
            Provider::Anthropic => {
                anthropic::complete(&self.client, &self.settings, &call.model, request).await
            }
            Provider::OpenRouter => {
                openrouter::complete(&self.client, &self.settings, &call.model, request).await
            }
        }
    }
}

#[async_trait]
impl CompletionGateway for HttpCompletionGateway {
    async fn complete(&self, call: &ProviderCall, request: CompletionRequest) -> ProviderOutput {
        let started = Instant::now();
        let result = self.dispatch(call, &request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(completion) => {
                debug!(call = %call, elapsed_ms, "Completion succeeded");
                ProviderOutput::success(call.clone(), elapsed_ms, completion.text, completion.usage)
            }
            Err(error) => {
                debug!(call = %call, elapsed_ms, %error, "Completion failed");
                ProviderOutput::failure(call.clone(), elapsed_ms, error.to_string())
            }
        }
    }
}

/// Cap error bodies carried into outputs and logs.
fn truncate_body(body: String) -> String {
    const LIMIT: usize = 600;
    if body.chars().count() <= LIMIT {
        body
    } else {
        body.chars().take(LIMIT).collect()
    }
}
