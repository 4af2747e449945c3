//! Crosscheck core types and pure logic.

pub mod call;
pub mod consensus;
pub mod fallback;
pub mod output;
pub mod parsing;
pub mod request;
pub mod result;

pub use call::{Provider, ProviderCall};
pub use consensus::{Confidence, ConsensusResult};
pub use fallback::pick_best;
pub use output::{CallStatus, ProviderOutput, TokenUsage};
pub use parsing::parse_consensus;
pub use request::{CrosscheckRequest, RequestError};
pub use result::{CrosscheckResult, RunMeta};
