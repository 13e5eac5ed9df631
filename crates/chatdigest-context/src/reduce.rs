use chatdigest_llm::Completer;
use chatdigest_persist::SummaryStore;
use chatdigest_types::{MonthSummaryFile, MonthSummaryRecord, SummaryConfig};

use crate::error::Result;
use crate::tokens::TokenCounter;

/// Reduce one month of group summaries to a single summary.
///
/// Over `config.token_ceiling` the records are split at `n / 2`, each half is
/// summarized, and a third completion merges the two partial summaries.
pub async fn reduce_month(
    file: &MonthSummaryFile,
    config: &SummaryConfig,
    counter: &dyn TokenCounter,
    completer: &dyn Completer,
) -> Result<MonthSummaryRecord> {
    let summaries = file.summaries();
    let combined = summaries.join(" ");
    let tokens = counter.count_text(&combined);
    let prefix = config.month_prompt.as_str();
    let max_response_tokens = config.max_response_tokens;

    if summaries.is_empty() {
        tracing::warn!(period = %file.period(), "month has no group summaries");
    }

    let summary = if tokens > config.token_ceiling {
        let (first_half, second_half) = summaries.split_at(summaries.len() / 2);
        tracing::info!(
            period = %file.period(),
            tokens,
            ceiling = config.token_ceiling,
            first_half = first_half.len(),
            second_half = second_half.len(),
            "month over token ceiling, summarizing halves"
        );

        let first = completer
            .complete(&format!("{}{}", prefix, first_half.join(" ")), max_response_tokens)
            .await?;
        let second = completer
            .complete(&format!("{}{}", prefix, second_half.join(" ")), max_response_tokens)
            .await?;

        completer
            .complete(&format!("{}{} {}", prefix, first, second), max_response_tokens)
            .await?
    } else {
        tracing::info!(period = %file.period(), tokens, "summarizing month");
        completer
            .complete(&format!("{}{}", prefix, combined), max_response_tokens)
            .await?
    };

    Ok(MonthSummaryRecord {
        year: file.year,
        month: file.month,
        summary,
    })
}

/// Reduce every month file in `store`, in ascending month order
pub async fn reduce_month_summaries(
    store: &SummaryStore,
    config: &SummaryConfig,
    counter: &dyn TokenCounter,
    completer: &dyn Completer,
) -> Result<Vec<MonthSummaryRecord>> {
    let months = store.list_months().await?;
    tracing::info!(dir = %store.dir().display(), months = months.len(), "reducing month summaries");

    let mut records = Vec::with_capacity(months.len());
    for file in &months {
        records.push(reduce_month(file, config, counter, completer).await?);
    }

    Ok(records)
}
