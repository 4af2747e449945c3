//! Crosscheck request value object
//!
//! The single validated input to one crosscheck run. The boundary layer is
//! responsible for shaping and size-limiting the raw fields; the only
//! validation performed here is that the question is non-empty. Budget
//! fields are clamped rather than rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower bound for a per-call deadline. Provider latency routinely sits in
/// the 5-30s range, so anything below this would fail every call.
pub const TIMEOUT_FLOOR_MS: u64 = 8_000;
/// Upper bound for a per-call deadline.
pub const TIMEOUT_CEILING_MS: u64 = 120_000;
/// Deadline used when the request does not carry one.
pub const DEFAULT_TIMEOUT_MS: u64 = 45_000;

/// Lower bound for the per-call completion token budget.
pub const TOKEN_FLOOR: u32 = 200;
/// Upper bound for the per-call completion token budget.
pub const TOKEN_CEILING: u32 = 2_000;
/// Token budget used when the request does not carry one.
pub const DEFAULT_MAX_TOKENS: u32 = 900;

/// Errors from request construction
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Question cannot be empty")]
    EmptyQuestion,
}

/// A validated question for one crosscheck run (Value Object)
///
/// Immutable once constructed; owned exclusively by one run. The optional
/// free-text fields refine the per-provider prompt, the budget fields are
/// clamped to the bounds above before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosscheckRequest {
    question: String,
    /// Optional jurisdiction the question is scoped to (free text).
    pub jurisdiction: Option<String>,
    /// Optional block of known facts.
    pub facts: Option<String>,
    /// Optional tone/format guidance.
    pub constraints: Option<String>,
    /// Requested completion token budget, clamped to [200, 2000].
    pub max_tokens: Option<u32>,
    /// Requested per-call deadline, clamped to [8000, 120000] ms.
    pub timeout_ms: Option<u64>,
}

impl CrosscheckRequest {
    /// Create a request, rejecting an empty or whitespace-only question.
    pub fn new(question: impl Into<String>) -> Result<Self, RequestError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(RequestError::EmptyQuestion);
        }
        Ok(Self {
            question,
            jurisdiction: None,
            facts: None,
            constraints: None,
            max_tokens: None,
            timeout_ms: None,
        })
    }

    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = Some(jurisdiction.into());
        self
    }

    pub fn with_facts(mut self, facts: impl Into<String>) -> Self {
        self.facts = Some(facts.into());
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Get the question text
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The deadline to enforce per provider call.
    ///
    /// Uses the request value if present, otherwise `default_ms`, clamped
    /// to `[TIMEOUT_FLOOR_MS, TIMEOUT_CEILING_MS]` either way.
    pub fn effective_timeout_ms(&self, default_ms: u64) -> u64 {
        self.timeout_ms
            .unwrap_or(default_ms)
            .clamp(TIMEOUT_FLOOR_MS, TIMEOUT_CEILING_MS)
    }

    /// The completion token budget per provider call, clamped to
    /// `[TOKEN_FLOOR, TOKEN_CEILING]`.
    pub fn effective_max_tokens(&self, default_tokens: u32) -> u32 {
        self.max_tokens
            .unwrap_or(default_tokens)
            .clamp(TOKEN_FLOOR, TOKEN_CEILING)
    }
}
