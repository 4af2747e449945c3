//! Run Crosscheck use case
//!
//! Orchestrates one crosscheck run: fan the question out to every
//! configured provider concurrently, wait for all of them to settle,
//! synthesize a consensus verdict from whatever came back, and assemble
//! the final result. Provider-level failure is always data, never an
//! error — the only `Err` paths are internal misconfiguration.

use crate::config::CrosscheckConfig;
use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest};
use crate::use_cases::deadline::complete_with_deadline;
use crosscheck_domain::{
    ConsensusResult, CrosscheckRequest, CrosscheckResult, PromptTemplate, Provider, ProviderCall,
    ProviderOutput, parse_consensus, pick_best,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur during a crosscheck run.
///
/// Provider failures never appear here; they surface as `status: error`
/// or `status: timeout` entries in the result.
#[derive(Error, Debug)]
pub enum RunCrosscheckError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Use case for running one crosscheck.
pub struct RunCrosscheckUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    config: CrosscheckConfig,
}

impl<G: CompletionGateway + 'static> RunCrosscheckUseCase<G> {
    pub fn new(gateway: Arc<G>, config: CrosscheckConfig) -> Self {
        Self { gateway, config }
    }

    /// Execute the full flow: fan-out, synthesis, assembly.
    pub async fn execute(
        &self,
        request: CrosscheckRequest,
    ) -> Result<CrosscheckResult, RunCrosscheckError> {
        self.config
            .validate()
            .map_err(RunCrosscheckError::InvalidConfig)?;

        let started = Instant::now();
        let deadline = Duration::from_millis(
            request.effective_timeout_ms(self.config.default_timeout_ms),
        );
        let max_tokens = request.effective_max_tokens(self.config.default_max_tokens);

        let calls = self.build_calls();
        info!(
            calls = calls.len(),
            timeout_ms = deadline.as_millis() as u64,
            "Starting crosscheck"
        );

        let outputs = self.phase_fanout(&request, &calls, deadline, max_tokens).await;

        let succeeded = outputs.iter().filter(|o| o.is_ok()).count();
        info!(succeeded, failed = outputs.len() - succeeded, "Fan-out settled");

        let synthesis = self
            .phase_synthesis(&request, &outputs, deadline, max_tokens)
            .await;
        let consensus = Self::choose_consensus(&synthesis, &outputs, &calls);

        Ok(CrosscheckResult::assemble(
            outputs,
            consensus,
            started.elapsed().as_millis() as u64,
        ))
    }

    /// Build the explicit list of calls to attempt: one per hosted vendor,
    /// one per configured aggregation-gateway downstream model.
    fn build_calls(&self) -> Vec<ProviderCall> {
        let mut calls = vec![
            ProviderCall::new(Provider::OpenAi, self.config.openai_model.clone()),
            ProviderCall::new(Provider::Anthropic, self.config.anthropic_model.clone()),
        ];
        for model in &self.config.openrouter_models {
            calls.push(ProviderCall::new(Provider::OpenRouter, model.clone()));
        }
        calls
    }

    /// Run every call concurrently and collect every outcome.
    ///
    /// Outputs are slotted back into call-list order, so the result is
    /// deterministic regardless of completion order, and a join failure
    /// still yields an `error` entry with the call's identity — no slot
    /// is ever dropped.
    async fn phase_fanout(
        &self,
        request: &CrosscheckRequest,
        calls: &[ProviderCall],
        deadline: Duration,
        max_tokens: u32,
    ) -> Vec<ProviderOutput> {
        let mut join_set = JoinSet::new();
        let mut pending: HashMap<tokio::task::Id, usize> = HashMap::new();

        for (index, call) in calls.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let call = call.clone();
            let completion = CompletionRequest::new(
                PromptTemplate::provider_system(),
                PromptTemplate::provider_query(request),
                max_tokens,
            );

            let handle = join_set.spawn(async move {
                complete_with_deadline(gateway.as_ref(), &call, completion, deadline).await
            });
            pending.insert(handle.id(), index);
        }

        let mut slots: Vec<Option<ProviderOutput>> = calls.iter().map(|_| None).collect();

        while let Some(joined) = join_set.join_next_with_id().await {
            match joined {
                Ok((id, output)) => {
                    debug!(call = %output.call(), status = ?output.status, "Call settled");
                    if let Some(index) = pending.remove(&id) {
                        slots[index] = Some(output);
                    }
                }
                Err(join_error) => {
                    // Adapters never reject; this covers a panicked or
                    // aborted task so the manifest invariant still holds.
                    warn!("Provider task failed to join: {join_error}");
                    if let Some(index) = pending.remove(&join_error.id()) {
                        slots[index] = Some(ProviderOutput::failure(
                            calls[index].clone(),
                            0,
                            format!("Provider task failed: {join_error}"),
                        ));
                    }
                }
            }
        }

        slots
            .into_iter()
            .zip(calls)
            .map(|(slot, call)| {
                slot.unwrap_or_else(|| {
                    ProviderOutput::failure(call.clone(), 0, "Provider task vanished")
                })
            })
            .collect()
    }

    /// Second-pass synthesis call over all first-pass outputs.
    async fn phase_synthesis(
        &self,
        request: &CrosscheckRequest,
        outputs: &[ProviderOutput],
        deadline: Duration,
        max_tokens: u32,
    ) -> ProviderOutput {
        let call = self.config.synthesis.call();
        debug!(call = %call, "Running synthesis");

        let completion = CompletionRequest::new(
            PromptTemplate::synthesis_system(),
            PromptTemplate::synthesis_prompt(request, outputs),
            max_tokens,
        );
        let output =
            complete_with_deadline(self.gateway.as_ref(), &call, completion, deadline).await;
        if !output.is_ok() {
            warn!(
                error = output.error.as_deref().unwrap_or("unknown"),
                "Synthesis call failed; falling back to best raw answer"
            );
        }
        output
    }

    /// Select the consensus to report, in order of preference: parsed
    /// synthesis, the synthesis raw text, the best raw provider answer,
    /// and finally a generated message naming every attempted call.
    fn choose_consensus(
        synthesis: &ProviderOutput,
        outputs: &[ProviderOutput],
        calls: &[ProviderCall],
    ) -> ConsensusResult {
        if let Some(text) = synthesis.usable_text() {
            let parsed = parse_consensus(text);
            if !parsed.answer.trim().is_empty() {
                return parsed;
            }
        }

        if let Some(best) = pick_best(outputs) {
            let mut consensus =
                ConsensusResult::from_raw_text(best.usable_text().unwrap_or_default());
            consensus.push_caveat(format!(
                "Consensus synthesis was unavailable; this is the strongest single answer, from {}",
                best.call()
            ));
            return consensus;
        }

        let attempted = calls
            .iter()
            .map(ProviderCall::label)
            .collect::<Vec<_>>()
            .join(", ");
        ConsensusResult::from_raw_text(format!(
            "No usable answer was produced. Attempted providers: {attempted}."
        ))
    }
}
