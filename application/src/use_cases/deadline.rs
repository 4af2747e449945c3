//! Deadline wrapper
//!
//! Races one gateway call against a fixed duration. On expiry the call's
//! future is dropped and a synthetic `timeout` output tagged with the
//! call's identity takes its place; whatever the vendor eventually sends
//! back is discarded. `tokio::time::timeout` arms exactly one timer per
//! call and releases it on either path, so there is nothing to leak.
//!
//! Network-level work is not cancelled here — only the caller's wait.

use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest};
use crosscheck_domain::{ProviderCall, ProviderOutput};
use std::time::Duration;

/// Run one completion, bounded by `deadline`.
pub async fn complete_with_deadline<G: CompletionGateway + ?Sized>(
    gateway: &G,
    call: &ProviderCall,
    request: CompletionRequest,
    deadline: Duration,
) -> ProviderOutput {
    match tokio::time::timeout(deadline, gateway.complete(call, request)).await {
        Ok(output) => output,
        Err(_) => ProviderOutput::timed_out(call.clone(), deadline.as_millis() as u64),
    }
}
