//! Fallback answer selection.
//!
//! When the synthesis pass cannot produce a usable structured answer, the
//! run falls back to the single best raw provider answer. "Best" is a
//! length/keyword heuristic, not a quality judgment: long answers beat
//! short ones, and answers that mostly declare ignorance are penalized.

use super::output::ProviderOutput;

/// Successful outputs shorter than this are treated as near-empty garbage.
const MIN_USABLE_LEN: usize = 50;

/// Score penalty applied when the text contains a low-information phrase.
const LOW_INFORMATION_PENALTY: i64 = 400;

/// Phrases that usually mean the model declined to answer.
const LOW_INFORMATION_PHRASES: &[&str] = &[
    "i don't know",
    "i do not know",
    "cannot",
    "unable",
    "no information",
];

/// Pick the most promising raw answer among the successful outputs.
///
/// Filters to `status == ok` with more than [`MIN_USABLE_LEN`] characters
/// of text, scores each candidate, and returns the highest scorer. Returns
/// `None` when no output qualifies.
pub fn pick_best(outputs: &[ProviderOutput]) -> Option<&ProviderOutput> {
    outputs
        .iter()
        .filter(|o| o.usable_text().is_some_and(|t| t.len() > MIN_USABLE_LEN))
        .max_by_key(|o| score(o.usable_text().unwrap_or_default()))
}

fn score(text: &str) -> i64 {
    let length = text.len() as i64;
    let lowered = text.to_lowercase();
    if LOW_INFORMATION_PHRASES.iter().any(|p| lowered.contains(p)) {
        length - LOW_INFORMATION_PENALTY
    } else {
        length
    }
}

#[cfg(test)]
mod tests {
    use super::super::call::{Provider, ProviderCall};
    use super::*;

    fn ok(model: &str, text: &str) -> ProviderOutput {
        ProviderOutput::success(ProviderCall::new(Provider::OpenAi, model), 100, text, None)
    }

    fn err(model: &str) -> ProviderOutput {
        ProviderOutput::failure(ProviderCall::new(Provider::OpenAi, model), 100, "boom")
    }

    #[test]
    fn test_picks_longest_clean_answer() {
        let long = "x".repeat(300);
        let outputs = vec![ok("a", &"y".repeat(120)), ok("b", &long), err("c")];
        assert_eq!(pick_best(&outputs).unwrap().model, "b");
    }

    #[test]
    fn test_ignores_failures_and_short_text() {
        let outputs = vec![err("a"), ok("b", "too short")];
        assert!(pick_best(&outputs).is_none());
    }

    #[test]
    fn test_low_information_phrase_is_penalized() {
        // The hedged answer is longer but loses 400 points to the penalty.
        let hedged = format!("I don't know much about this. {}", "pad ".repeat(40));
        let clean = "A permanent establishment is a fixed place of business.".repeat(2);
        let outputs = vec![ok("hedged", &hedged), ok("clean", &clean)];
        assert_eq!(pick_best(&outputs).unwrap().model, "clean");
    }

    #[test]
    fn test_penalized_answer_still_wins_alone() {
        let hedged = format!("Unable to verify this fully, but: {}", "detail ".repeat(20));
        let outputs = vec![ok("only", &hedged), err("broken")];
        assert_eq!(pick_best(&outputs).unwrap().model, "only");
    }

    #[test]
    fn test_empty_input() {
        assert!(pick_best(&[]).is_none());
    }
}
