//! Anthropic messages adapter.
//!
//! The Messages API differs from the OpenAI-compatible shape: the system
//! prompt is a top-level field rather than a message, auth uses
//! `x-api-key` plus a pinned `anthropic-version`, and the response body
//! is a list of typed content blocks.

use super::{AdapterError, Completion, ProviderSettings, truncate_body};
use crosscheck_application::CompletionRequest;
use crosscheck_domain::TokenUsage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    input_tokens: Option<u32>,
    output_tokens: Option<u32>,
}

pub(super) async fn complete(
    client: &reqwest::Client,
    settings: &ProviderSettings,
    model: &str,
    request: &CompletionRequest,
) -> Result<Completion, AdapterError> {
    let api_key = settings
        .anthropic_api_key
        .as_deref()
        .ok_or(AdapterError::MissingCredential("ANTHROPIC_API_KEY"))?;

    let body = MessagesRequest {
        model,
        max_tokens: request.max_tokens,
        system: &request.system,
        messages: vec![Message {
            role: "user",
            content: &request.user,
        }],
    };

    let response = client
        .post(format!("{}/messages", settings.anthropic_base_url))
        .header("x-api-key", api_key)
        .header("anthropic-version", &settings.anthropic_version)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AdapterError::Http {
            status: status.as_u16(),
            body: truncate_body(body),
        });
    }

    let parsed: MessagesResponse = response
        .json()
        .await
        .map_err(|e| AdapterError::Malformed(e.to_string()))?;

    let text: String = parsed
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(AdapterError::Malformed(
            "response carried no text content".to_string(),
        ));
    }

    Ok(Completion {
        text,
        usage: parsed.usage.map(|u| TokenUsage {
            input_tokens: u.input_tokens,
            output_tokens: u.output_tokens,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = MessagesRequest {
            model: "claude-sonnet-4-5",
            max_tokens: 900,
            system: "be careful",
            messages: vec![Message {
                role: "user",
                content: "the question",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "claude-sonnet-4-5");
        assert_eq!(json["system"], "be careful");
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("choices").is_none());
    }

    #[test]
    fn test_response_parsing_joins_text_blocks() {
        let raw = r#"{
            "id": "msg_1",
            "content": [
                {"type": "text", "text": "Part one. "},
                {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
                {"type": "text", "text": "Part two."}
            ],
            "usage": {"input_tokens": 80, "output_tokens": 30}
        }"#;
        let parsed: MessagesResponse = serde_json::from_str(raw).unwrap();

        let text: String = parsed
            .content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect();
        assert_eq!(text, "Part one. Part two.");
        assert_eq!(parsed.usage.unwrap().input_tokens, Some(80));
    }
}
