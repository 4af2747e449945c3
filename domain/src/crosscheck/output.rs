//! Provider output types
//!
//! [`ProviderOutput`] is the tagged result of one provider invocation.
//! Adapters construct it through [`ProviderOutput::success`] /
//! [`ProviderOutput::failure`]; only the deadline wrapper constructs the
//! [`CallStatus::Timeout`] variant. Returning a tagged value instead of a
//! `Result` is what makes the fan-out aggregation a total function over a
//! list of outcomes — a failing branch can never poison the run.

use super::call::{Provider, ProviderCall};
use serde::{Deserialize, Serialize};

/// Terminal status of one provider invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    /// The provider returned a response body.
    Ok,
    /// Missing credential, transport failure, non-2xx status, or a
    /// malformed response body.
    Error,
    /// The deadline wrapper gave up waiting.
    Timeout,
}

/// Token accounting reported by the vendor, when available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: Option<u32>,
    pub output_tokens: Option<u32>,
}

/// Result of one provider invocation.
///
/// Exactly one of `text` / `error` is meaningful, selected by `status`.
/// Read-only once constructed; lives only for the duration of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOutput {
    pub provider: Provider,
    pub model: String,
    pub status: CallStatus,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl ProviderOutput {
    /// A successful completion.
    pub fn success(
        call: ProviderCall,
        elapsed_ms: u64,
        text: impl Into<String>,
        usage: Option<TokenUsage>,
    ) -> Self {
        Self {
            provider: call.provider,
            model: call.model,
            status: CallStatus::Ok,
            elapsed_ms,
            text: Some(text.into()),
            error: None,
            usage,
        }
    }

    /// A failed invocation (credentials, transport, HTTP status, parsing).
    pub fn failure(call: ProviderCall, elapsed_ms: u64, error: impl Into<String>) -> Self {
        Self {
            provider: call.provider,
            model: call.model,
            status: CallStatus::Error,
            elapsed_ms,
            text: None,
            error: Some(error.into()),
            usage: None,
        }
    }

    /// An invocation abandoned by the deadline wrapper.
    pub fn timed_out(call: ProviderCall, elapsed_ms: u64) -> Self {
        Self {
            provider: call.provider,
            model: call.model,
            status: CallStatus::Timeout,
            elapsed_ms,
            text: None,
            error: Some(format!("Deadline of {elapsed_ms} ms exceeded")),
            usage: None,
        }
    }

    /// The call identity this output is tagged with.
    pub fn call(&self) -> ProviderCall {
        ProviderCall::new(self.provider, self.model.clone())
    }

    pub fn is_ok(&self) -> bool {
        self.status == CallStatus::Ok
    }

    /// Response text for successful outputs, empty-trimmed to `None`.
    pub fn usable_text(&self) -> Option<&str> {
        if !self.is_ok() {
            return None;
        }
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::super::call::Provider;
    use super::*;

    fn call() -> ProviderCall {
        ProviderCall::new(Provider::OpenAi, "gpt-4o")
    }

    #[test]
    fn test_success_output() {
        let out = ProviderOutput::success(call(), 1200, "An answer.", None);
        assert!(out.is_ok());
        assert_eq!(out.usable_text(), Some("An answer."));
        assert!(out.error.is_none());
    }

    #[test]
    fn test_failure_output() {
        let out = ProviderOutput::failure(call(), 300, "HTTP 500: oops");
        assert_eq!(out.status, CallStatus::Error);
        assert!(out.usable_text().is_none());
        assert_eq!(out.error.as_deref(), Some("HTTP 500: oops"));
    }

    #[test]
    fn test_timeout_output() {
        let out = ProviderOutput::timed_out(call(), 8000);
        assert_eq!(out.status, CallStatus::Timeout);
        assert!(out.error.as_deref().unwrap().contains("8000"));
    }

    #[test]
    fn test_usable_text_rejects_blank_success() {
        let out = ProviderOutput::success(call(), 10, "   \n", None);
        assert!(out.is_ok());
        assert!(out.usable_text().is_none());
    }

    #[test]
    fn test_call_identity_roundtrip() {
        let out = ProviderOutput::success(call(), 10, "x", None);
        assert_eq!(out.call(), call());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&CallStatus::Timeout).unwrap();
        assert_eq!(json, "\"timeout\"");
    }
}
