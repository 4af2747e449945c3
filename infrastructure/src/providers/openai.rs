//! OpenAI chat-completions adapter.
//!
//! Also carries the shared OpenAI-compatible wire format: OpenRouter
//! speaks the same `/chat/completions` protocol, so its adapter reuses
//! [`chat_completion`] with its own base URL and headers.

use super::{AdapterError, Completion, ProviderSettings, truncate_body};
use crosscheck_application::CompletionRequest;
use crosscheck_domain::TokenUsage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

pub(super) async fn complete(
    client: &reqwest::Client,
    settings: &ProviderSettings,
    model: &str,
    request: &CompletionRequest,
) -> Result<Completion, AdapterError> {
    let api_key = settings
        .openai_api_key
        .as_deref()
        .ok_or(AdapterError::MissingCredential("OPENAI_API_KEY"))?;

    chat_completion(client, &settings.openai_base_url, api_key, &[], model, request).await
}

/// One OpenAI-compatible `/chat/completions` round trip.
pub(super) async fn chat_completion(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    extra_headers: &[(&str, &str)],
    model: &str,
    request: &CompletionRequest,
) -> Result<Completion, AdapterError> {
    let body = ChatRequest {
        model,
        max_tokens: request.max_tokens,
        messages: vec![
            ChatMessage {
                role: "system",
                content: &request.system,
            },
            ChatMessage {
                role: "user",
                content: &request.user,
            },
        ],
    };

    let mut builder = client
        .post(format!("{base_url}/chat/completions"))
        .bearer_auth(api_key)
        .json(&body);
    for (name, value) in extra_headers {
        builder = builder.header(*name, *value);
    }

    let response = builder.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AdapterError::Http {
            status: status.as_u16(),
            body: truncate_body(body),
        });
    }

    let parsed: ChatResponse = response
        .json()
        .await
        .map_err(|e| AdapterError::Malformed(e.to_string()))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AdapterError::Malformed("response carried no choices".to_string()))?;

    Ok(Completion {
        text: choice.message.content.unwrap_or_default(),
        usage: parsed.usage.map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o",
            max_tokens: 900,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be careful",
                },
                ChatMessage {
                    role: "user",
                    content: "the question",
                },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["max_tokens"], 900);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "the question");
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "An answer."}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 120, "completion_tokens": 45, "total_tokens": 165}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("An answer.")
        );
        let usage = parsed.usage.unwrap();
        assert_eq!(usage.prompt_tokens, Some(120));
        assert_eq!(usage.completion_tokens, Some(45));
    }

    #[test]
    fn test_response_without_usage() {
        let raw = r#"{"choices": [{"message": {"content": null}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.usage.is_none());
        assert!(parsed.choices[0].message.content.is_none());
    }
}
