use std::path::PathBuf;
use std::sync::Arc;

use chatdigest_llm::Completer;
use chatdigest_persist::SummaryStore;
use chatdigest_types::{
    BatchConfig, ChatMessage, Group, MonthSummaryFile, MonthSummaryRecord, SummaryConfig,
    SummaryRecord, YearMonth,
};

use crate::coalesce::coalesce;
use crate::error::Result;
use crate::months::{month_window, plan_months};
use crate::reduce::reduce_month_summaries;
use crate::segment::segment;
use crate::summarize::summarize_groups;
use crate::tokens::TokenCounter;

/// Chat history → month summary files → digest.
///
/// Holds the one completer built from the loaded credential; every LLM call
/// of a run goes through it, one at a time.
pub struct DigestPipeline {
    completer: Arc<dyn Completer>,
    counter: Arc<dyn TokenCounter>,
    batch: BatchConfig,
    summary: SummaryConfig,
}

impl DigestPipeline {
    pub fn new(completer: Arc<dyn Completer>, counter: Arc<dyn TokenCounter>) -> Self {
        Self {
            completer,
            counter,
            batch: BatchConfig::default(),
            summary: SummaryConfig::default(),
        }
    }

    pub fn with_batch_config(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    pub fn with_summary_config(mut self, summary: SummaryConfig) -> Self {
        self.summary = summary;
        self
    }

    /// Segment and coalesce the messages falling in `period`
    pub fn groups_for_month(&self, messages: &[ChatMessage], period: YearMonth) -> Result<Vec<Group>> {
        let (window_start, window_end) = month_window(period)?;
        let divisions = segment(messages, &self.batch, window_start, window_end)?;
        let division_count = divisions.len();
        let groups = coalesce(divisions, &self.batch, self.counter.as_ref());

        tracing::debug!(
            period = %period,
            divisions = division_count,
            groups = groups.len(),
            "batched month"
        );
        Ok(groups)
    }

    pub async fn summarize_groups(&self, groups: &[Group]) -> Result<Vec<SummaryRecord>> {
        summarize_groups(
            groups,
            &self.summary.group_prompt,
            self.completer.as_ref(),
            self.summary.max_response_tokens,
        )
        .await
    }

    /// Write one summary file per planned month of `messages` (sorted ascending)
    pub async fn summarize_by_month(
        &self,
        messages: &[ChatMessage],
        store: &SummaryStore,
    ) -> Result<Vec<PathBuf>> {
        let months = plan_months(messages)?;
        tracing::info!(months = months.len(), messages = messages.len(), "summarizing by month");

        let mut paths = Vec::with_capacity(months.len());
        for period in months {
            let groups = self.groups_for_month(messages, period)?;
            if groups.is_empty() {
                tracing::warn!(period = %period, "no complete groups in month");
            }

            let records = self.summarize_groups(&groups).await?;
            let path = store.save_month(&MonthSummaryFile::new(period, records)).await?;
            paths.push(path);
        }

        Ok(paths)
    }

    /// Reduce every month file in `store` into month summaries
    pub async fn reduce_months(&self, store: &SummaryStore) -> Result<Vec<MonthSummaryRecord>> {
        reduce_month_summaries(
            store,
            &self.summary,
            self.counter.as_ref(),
            self.completer.as_ref(),
        )
        .await
    }
}
