//! Console rendering of a crosscheck result.

use crosscheck_domain::{CallStatus, CrosscheckResult};

/// Human-readable rendering: consensus first, then the call manifest.
pub fn format_full(result: &CrosscheckResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Consensus ({} confidence)\n\n{}\n",
        result.consensus.confidence, result.consensus.answer
    ));

    push_section(&mut out, "Caveats", &result.consensus.caveats);
    push_section(&mut out, "Disagreements", &result.consensus.disagreements);
    push_section(&mut out, "Facts still needed", &result.consensus.followups);

    out.push_str(&format!(
        "\nProviders ({}/{} succeeded, {} ms):\n",
        result.meta.succeeded.len(),
        result.meta.attempted.len(),
        result.meta.runtime_ms
    ));
    for provider in &result.providers {
        let status = match provider.status {
            CallStatus::Ok => "ok",
            CallStatus::Error => "error",
            CallStatus::Timeout => "timeout",
        };
        out.push_str(&format!(
            "  [{status:>7}] {} ({} ms)\n",
            provider.call(),
            provider.elapsed_ms
        ));
    }

    out
}

fn push_section(out: &mut String, title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    out.push_str(&format!("\n{title}:\n"));
    for entry in entries {
        out.push_str(&format!("  - {entry}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosscheck_domain::{
        Confidence, ConsensusResult, Provider, ProviderCall, ProviderOutput,
    };

    #[test]
    fn test_format_full_lists_providers_and_caveats() {
        let outputs = vec![
            ProviderOutput::success(
                ProviderCall::new(Provider::OpenAi, "gpt-4o"),
                1200,
                "text",
                None,
            ),
            ProviderOutput::failure(
                ProviderCall::new(Provider::Anthropic, "claude-sonnet-4-5"),
                300,
                "HTTP 401",
            ),
        ];
        let consensus = ConsensusResult::new(
            "The answer.",
            vec!["Check the treaty.".to_string()],
            vec![],
            vec![],
            Confidence::Medium,
        );
        let result = CrosscheckResult::assemble(outputs, consensus, 1500);

        let rendered = format_full(&result);
        assert!(rendered.contains("medium confidence"));
        assert!(rendered.contains("The answer."));
        assert!(rendered.contains("Check the treaty."));
        assert!(rendered.contains("openai/gpt-4o"));
        assert!(rendered.contains("1/2 succeeded"));
    }
}
