//! Completion gateway port
//!
//! Defines how the application layer reaches external text-generation
//! vendors. The contract is deliberately total: `complete` returns a
//! [`ProviderOutput`] in every case — success, missing credential,
//! transport failure, HTTP error, malformed body — and never an `Err`.
//! The fan-out executor relies on this so that collecting outcomes can
//! never itself fail; the only failure shape it adds on top is the
//! deadline wrapper's `timeout`.
//!
//! The synthesis pass goes through the same port with its own
//! [`ProviderCall`], so use-case tests can drive both passes with canned
//! outputs.

use async_trait::async_trait;
use crosscheck_domain::{ProviderCall, ProviderOutput};

/// One prompt for one provider invocation.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    /// Completion token budget, already clamped by the use case.
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            max_tokens,
        }
    }
}

/// Gateway to external completion vendors.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Run one completion against the vendor/model named by `call`.
    ///
    /// Must never panic and never reject: every failure mode becomes a
    /// `status: error` output tagged with `call`'s identity.
    async fn complete(&self, call: &ProviderCall, request: CompletionRequest) -> ProviderOutput;
}
