//! Domain layer for crosscheck.
//!
//! Pure types and logic for the crosscheck flow: the validated request,
//! provider call/output types, the synthesized consensus verdict, the
//! fallback answer selector, and defensive parsing of the synthesizer's
//! structured output. No I/O lives here.

pub mod crosscheck;
pub mod prompt;

pub use crosscheck::call::{Provider, ProviderCall};
pub use crosscheck::consensus::{Confidence, ConsensusResult};
pub use crosscheck::fallback::pick_best;
pub use crosscheck::output::{CallStatus, ProviderOutput, TokenUsage};
pub use crosscheck::parsing::parse_consensus;
pub use crosscheck::request::{CrosscheckRequest, RequestError};
pub use crosscheck::result::{CrosscheckResult, RunMeta};
pub use prompt::PromptTemplate;
