//! OpenRouter adapter.
//!
//! The aggregation gateway: one configured provider that addresses many
//! third-party models by name over an OpenAI-compatible API. The fan-out
//! executor issues one call per configured downstream model; this module
//! only handles a single model's round trip.

use super::{AdapterError, Completion, ProviderSettings, openai};
use crosscheck_application::CompletionRequest;

/// Optional attribution headers OpenRouter uses for ranking.
const ATTRIBUTION_HEADERS: &[(&str, &str)] = &[
    ("HTTP-Referer", "https://github.com/crosscheck-dev/crosscheck"),
    ("X-Title", "crosscheck"),
];

pub(super) async fn complete(
    client: &reqwest::Client,
    settings: &ProviderSettings,
    model: &str,
    request: &CompletionRequest,
) -> Result<Completion, AdapterError> {
    let api_key = settings
        .openrouter_api_key
        .as_deref()
        .ok_or(AdapterError::MissingCredential("OPENROUTER_API_KEY"))?;

    openai::chat_completion(
        client,
        &settings.openrouter_base_url,
        api_key,
        ATTRIBUTION_HEADERS,
        model,
        request,
    )
    .await
}
