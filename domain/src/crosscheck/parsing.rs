//! Defensive parsing of the synthesized verdict.
//!
//! The synthesis prompt demands strict JSON, but models wrap it in prose,
//! fence it in markdown, or ignore the instruction entirely. Parsing is a
//! fallback chain: extract the outermost JSON object and deserialize it;
//! failing that, the raw text becomes the answer with low confidence. A
//! parse failure never fails the run.

use super::consensus::{Confidence, ConsensusResult};
use serde::Deserialize;

/// Wire shape the synthesis prompt asks for. Every field is optional so a
/// partially-conforming response still yields structure.
#[derive(Debug, Deserialize)]
struct ConsensusPayload {
    answer: Option<String>,
    #[serde(default)]
    caveats: Vec<String>,
    #[serde(default)]
    followups: Vec<String>,
    #[serde(default)]
    disagreements: Vec<String>,
    confidence: Option<String>,
}

/// Parse a synthesis response into a [`ConsensusResult`].
///
/// Accepts raw JSON, JSON embedded in prose or markdown fences, and (as a
/// last resort) plain text, which becomes a low-confidence answer.
pub fn parse_consensus(response: &str) -> ConsensusResult {
    if let Some(json) = extract_json_object(response)
        && let Ok(payload) = serde_json::from_str::<ConsensusPayload>(json)
    {
        let answer = payload.answer.unwrap_or_default();
        if !answer.trim().is_empty() {
            return ConsensusResult::new(
                answer.trim(),
                payload.caveats,
                payload.followups,
                payload.disagreements,
                payload
                    .confidence
                    .as_deref()
                    .map(Confidence::parse_lenient)
                    .unwrap_or(Confidence::Low),
            );
        }
    }

    ConsensusResult::from_raw_text(response.trim())
}

/// Extract the outermost `{...}` span from a response, if any.
fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response[start..].rfind('}')?;
    Some(&response[start..start + end + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strict_json() {
        let response = r#"{
            "answer": "A fixed place of business through which business is carried on.",
            "caveats": ["Treaty definitions vary."],
            "followups": ["Which tax treaty applies?"],
            "disagreements": [],
            "confidence": "high"
        }"#;

        let result = parse_consensus(response);
        assert!(result.answer.starts_with("A fixed place"));
        assert_eq!(result.caveats, vec!["Treaty definitions vary."]);
        assert_eq!(result.followups, vec!["Which tax treaty applies?"]);
        assert!(result.disagreements.is_empty());
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn test_parse_fenced_json() {
        let response = "Here is the verdict:\n```json\n{\"answer\": \"Yes.\", \"confidence\": \"medium\"}\n```\nDone.";
        let result = parse_consensus(response);
        assert_eq!(result.answer, "Yes.");
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[test]
    fn test_missing_lists_default_empty() {
        let result = parse_consensus(r#"{"answer": "Maybe."}"#);
        assert_eq!(result.answer, "Maybe.");
        assert!(result.caveats.is_empty());
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_lists_are_normalized() {
        let response = r#"{
            "answer": "ok",
            "caveats": [" a ", "a", "", "b"],
            "confidence": "low"
        }"#;
        let result = parse_consensus(response);
        assert_eq!(result.caveats, vec!["a", "b"]);
    }

    #[test]
    fn test_unparseable_becomes_raw_answer() {
        let response = "The providers broadly agree that the answer is yes.";
        let result = parse_consensus(response);
        assert_eq!(result.answer, response);
        assert!(result.caveats.is_empty());
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_json_with_empty_answer_falls_back_to_raw() {
        let response = r#"{"answer": "", "confidence": "high"}"#;
        let result = parse_consensus(response);
        // The whole raw text becomes the answer, with confidence degraded.
        assert_eq!(result.answer, response);
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_unknown_confidence_degrades_to_low() {
        let result = parse_consensus(r#"{"answer": "x", "confidence": "absolute"}"#);
        assert_eq!(result.confidence, Confidence::Low);
    }
}
