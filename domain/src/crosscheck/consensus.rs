//! Consensus verdict types
//!
//! [`ConsensusResult`] is the single structured verdict produced once per
//! run by the synthesis pass, or substituted by a degraded version when
//! synthesis fails. List fields are always normalized: trimmed, empties
//! removed, duplicates collapsed (first occurrence wins).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Coarse self-assessment emitted by the synthesis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Lenient parse used on synthesized output; anything unrecognized is
    /// treated as low.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Confidence::High,
            "medium" | "moderate" => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

/// The synthesized cross-provider verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// The conservative best answer.
    pub answer: String,
    /// Qualifications the reader must keep in mind.
    pub caveats: Vec<String>,
    /// Facts still needed for a firmer answer.
    pub followups: Vec<String>,
    /// Points where the providers contradicted each other.
    pub disagreements: Vec<String>,
    pub confidence: Confidence,
}

impl ConsensusResult {
    pub fn new(
        answer: impl Into<String>,
        caveats: Vec<String>,
        followups: Vec<String>,
        disagreements: Vec<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            answer: answer.into(),
            caveats: normalize_list(caveats),
            followups: normalize_list(followups),
            disagreements: normalize_list(disagreements),
            confidence,
        }
    }

    /// Degraded verdict wrapping unstructured text with low confidence.
    pub fn from_raw_text(text: impl Into<String>) -> Self {
        Self {
            answer: text.into(),
            caveats: Vec::new(),
            followups: Vec::new(),
            disagreements: Vec::new(),
            confidence: Confidence::Low,
        }
    }

    /// Append a caveat, keeping the list normalized.
    pub fn push_caveat(&mut self, caveat: impl Into<String>) {
        self.caveats.push(caveat.into());
        self.caveats = normalize_list(std::mem::take(&mut self.caveats));
    }
}

/// Trim entries, drop empties, collapse duplicates preserving first
/// occurrence order.
pub fn normalize_list(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .filter(|e| seen.insert(e.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_parse_lenient() {
        assert_eq!(Confidence::parse_lenient("High"), Confidence::High);
        assert_eq!(Confidence::parse_lenient(" medium "), Confidence::Medium);
        assert_eq!(Confidence::parse_lenient("low"), Confidence::Low);
        assert_eq!(Confidence::parse_lenient("certain"), Confidence::Low);
        assert_eq!(Confidence::parse_lenient(""), Confidence::Low);
    }

    #[test]
    fn test_normalize_trims_and_drops_empties() {
        let normalized = normalize_list(vec![
            "  one ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "two".to_string(),
        ]);
        assert_eq!(normalized, vec!["one", "two"]);
    }

    #[test]
    fn test_normalize_collapses_duplicates_in_order() {
        let normalized = normalize_list(vec![
            "b".to_string(),
            "a".to_string(),
            " b ".to_string(),
            "a".to_string(),
        ]);
        assert_eq!(normalized, vec!["b", "a"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_list(vec![
            "x".to_string(),
            " x".to_string(),
            "y".to_string(),
            "".to_string(),
        ]);
        let twice = normalize_list(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_new_normalizes_all_lists() {
        let result = ConsensusResult::new(
            "answer",
            vec![" c ".to_string(), "c".to_string()],
            vec!["".to_string(), "f".to_string()],
            vec!["d".to_string()],
            Confidence::Medium,
        );
        assert_eq!(result.caveats, vec!["c"]);
        assert_eq!(result.followups, vec!["f"]);
        assert_eq!(result.disagreements, vec!["d"]);
    }

    #[test]
    fn test_from_raw_text_is_low_confidence() {
        let result = ConsensusResult::from_raw_text("free text");
        assert_eq!(result.answer, "free text");
        assert!(result.caveats.is_empty());
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_push_caveat_deduplicates() {
        let mut result = ConsensusResult::from_raw_text("a");
        result.push_caveat("check sources");
        result.push_caveat(" check sources ");
        assert_eq!(result.caveats, vec!["check sources"]);
    }
}
