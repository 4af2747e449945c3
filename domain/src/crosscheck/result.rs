//! Crosscheck run result
//!
//! [`CrosscheckResult`] is the complete response for one run: the call
//! manifest, wall-clock runtime, the consensus verdict, and every raw
//! provider output. The manifest is derived from the outputs in
//! [`CrosscheckResult::assemble`], which keeps the
//! `attempted == succeeded + failed == providers` invariant true by
//! construction.

use super::call::ProviderCall;
use super::consensus::ConsensusResult;
use super::output::ProviderOutput;
use serde::{Deserialize, Serialize};

/// Manifest of one run's provider calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    /// Every call that was issued, in fan-out order.
    pub attempted: Vec<ProviderCall>,
    /// Calls that returned `status: ok`.
    pub succeeded: Vec<ProviderCall>,
    /// Calls that returned `status: error` or `status: timeout`.
    pub failed: Vec<ProviderCall>,
    /// Wall-clock time for the whole run, including synthesis.
    pub runtime_ms: u64,
}

/// The full response of one crosscheck run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrosscheckResult {
    /// True iff at least one provider succeeded.
    pub ok: bool,
    pub meta: RunMeta,
    pub consensus: ConsensusResult,
    /// Raw per-provider outputs, one per attempted call, same order.
    pub providers: Vec<ProviderOutput>,
}

impl CrosscheckResult {
    /// Caveat appended whenever every provider failed, so the caveat list
    /// always explains a total failure.
    pub const NO_PROVIDERS_CAVEAT: &'static str =
        "No providers returned a successful answer; check credentials/model names/connectivity";

    /// Build the result from the collected outputs.
    ///
    /// Partitions the manifest by output status and appends
    /// [`Self::NO_PROVIDERS_CAVEAT`] when nothing succeeded.
    pub fn assemble(
        outputs: Vec<ProviderOutput>,
        mut consensus: ConsensusResult,
        runtime_ms: u64,
    ) -> Self {
        let attempted: Vec<ProviderCall> = outputs.iter().map(|o| o.call()).collect();
        let succeeded: Vec<ProviderCall> = outputs
            .iter()
            .filter(|o| o.is_ok())
            .map(|o| o.call())
            .collect();
        let failed: Vec<ProviderCall> = outputs
            .iter()
            .filter(|o| !o.is_ok())
            .map(|o| o.call())
            .collect();

        let ok = !succeeded.is_empty();
        if !ok {
            consensus.push_caveat(Self::NO_PROVIDERS_CAVEAT);
        }

        Self {
            ok,
            meta: RunMeta {
                attempted,
                succeeded,
                failed,
                runtime_ms,
            },
            consensus,
            providers: outputs,
        }
    }
}
