use chatdigest_llm::Completer;
use chatdigest_types::{Group, SummaryRecord};

use crate::error::{ContextError, Result};

/// Prompt prefix followed by the group's messages, one per line
pub fn build_group_prompt(prompt_prefix: &str, group: &Group) -> String {
    format!("{}{}", prompt_prefix, group.texts().join("\n"))
}

/// Summarize each group with one completion, strictly in order
pub async fn summarize_groups(
    groups: &[Group],
    prompt_prefix: &str,
    completer: &dyn Completer,
    max_response_tokens: u32,
) -> Result<Vec<SummaryRecord>> {
    let mut records = Vec::with_capacity(groups.len());

    for (index, group) in groups.iter().enumerate() {
        let (start_timestamp, stop_timestamp) = group.span().ok_or(ContextError::EmptyGroup)?;
        let prompt = build_group_prompt(prompt_prefix, group);

        tracing::info!(
            group = index + 1,
            of = groups.len(),
            messages = group.len(),
            tokens = group.token_count,
            "summarizing group"
        );

        let summary = completer.complete(&prompt, max_response_tokens).await?;

        records.push(SummaryRecord {
            start_timestamp,
            stop_timestamp,
            summary,
        });
    }

    Ok(records)
}
