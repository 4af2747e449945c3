//! Prompt templates for the crosscheck flow

use crate::crosscheck::output::{CallStatus, ProviderOutput};
use crate::crosscheck::request::CrosscheckRequest;

/// Character budget for each provider excerpt in the synthesis prompt.
/// Keeps the second-pass call within context even with many providers.
const EXCERPT_BUDGET: usize = 4_000;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the first-pass provider calls
    pub fn provider_system() -> &'static str {
        r#"You are a careful expert answering a factual or legal question.
Structure your response as:
1. A direct answer to the question.
2. The assumptions you are making.
3. The main risks or ways this answer could be wrong.
4. The facts that are still missing and would change the answer.
Cite statutes, cases, or sources only when you are confident they are real.
Never invent a citation."#
    }

    /// User prompt for a first-pass provider call
    pub fn provider_query(request: &CrosscheckRequest) -> String {
        let mut prompt = String::new();

        if let Some(jurisdiction) = &request.jurisdiction {
            prompt.push_str(&format!("Jurisdiction: {}\n\n", jurisdiction));
        }
        if let Some(facts) = &request.facts {
            prompt.push_str(&format!("Known facts:\n{}\n\n", facts));
        }
        if let Some(constraints) = &request.constraints {
            prompt.push_str(&format!("Answer constraints: {}\n\n", constraints));
        }

        prompt.push_str(&format!("Question: {}", request.question()));
        prompt
    }

    /// System prompt for the synthesis pass
    pub fn synthesis_system() -> &'static str {
        r#"You are a conservative moderator reconciling answers from several independent models.
Your task is to:
1. Identify where the answers agree (the consensus).
2. Flag contradictions between them.
3. List the facts still needed for a firmer answer.
4. Produce a single conservative best answer.
Do not invent citations; drop any citation you cannot see stated by a model.
Failed or timed-out models carry signal too: note when coverage was thin."#
    }

    /// User prompt for the synthesis pass.
    ///
    /// Packs every provider output, success or failure, labeled by
    /// provider/model/status and truncated to a fixed excerpt budget.
    pub fn synthesis_prompt(request: &CrosscheckRequest, outputs: &[ProviderOutput]) -> String {
        let mut prompt = format!("Original question: {}\n", request.question());
        if let Some(jurisdiction) = &request.jurisdiction {
            prompt.push_str(&format!("Jurisdiction: {}\n", jurisdiction));
        }
        prompt.push_str("\nProvider outputs:\n");

        for output in outputs {
            let status = match output.status {
                CallStatus::Ok => "ok",
                CallStatus::Error => "error",
                CallStatus::Timeout => "timeout",
            };
            prompt.push_str(&format!(
                "\n--- {} [{}, {} ms] ---\n",
                output.call(),
                status,
                output.elapsed_ms
            ));
            let body = output
                .text
                .as_deref()
                .or(output.error.as_deref())
                .unwrap_or("(no output)");
            prompt.push_str(&truncate_chars(body, EXCERPT_BUDGET));
            prompt.push('\n');
        }

        prompt.push_str(
            r#"
Respond with strict JSON only, no prose and no markdown fences, using exactly these keys:
{
  "answer": "the conservative best answer",
  "caveats": ["qualifications the reader must keep in mind"],
  "followups": ["facts still needed"],
  "disagreements": ["points where the models contradicted each other"],
  "confidence": "low" | "medium" | "high"
}"#,
        );

        prompt
    }
}

/// Truncate to at most `limit` characters, marking the cut.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}\n[... truncated]", cut)
}
