use std::sync::Arc;

use anyhow::{Context, Result};
use chatdigest_context::{DigestPipeline, TiktokenCounter};
use chatdigest_llm::{ClientFactory, ProviderConfig};
use chatdigest_persist::{load_api_key, load_messages, save_digest, SummaryStore};

use crate::config::Config;

/// Build the pipeline around one completer, constructed from the loaded credential
pub async fn build_pipeline(config: &Config) -> Result<DigestPipeline> {
    let api_key = match &config.openai_api_key {
        Some(key) => key.clone(),
        None => load_api_key(&config.llm.key_file)
            .await
            .context("Failed to load API key")?,
    };

    let mut provider = ProviderConfig::openai(api_key);
    if let Some(base_url) = &config.llm.base_url {
        provider = provider.with_base_url(base_url.clone());
    }
    let completer = ClientFactory::create_completer(provider, config.llm.model.clone())?;
    let counter = TiktokenCounter::for_model(config.llm.model.clone())?;
    tracing::info!(model = counter.model(), "tokenizer ready");

    Ok(DigestPipeline::new(completer, Arc::new(counter))
        .with_batch_config(config.batch.clone())
        .with_summary_config(config.summary_config()))
}

pub async fn summarize(config: &Config, pipeline: &DigestPipeline) -> Result<()> {
    let messages = load_messages(&config.input.messages)
        .await
        .context("Failed to load messages")?;
    let store = SummaryStore::new(&config.output.summaries_dir);

    let paths = pipeline.summarize_by_month(&messages, &store).await?;

    tracing::info!(files = paths.len(), dir = %store.dir().display(), "month summaries written");
    Ok(())
}

pub async fn digest(config: &Config, pipeline: &DigestPipeline) -> Result<()> {
    let store = SummaryStore::new(&config.output.summaries_dir);

    let records = pipeline.reduce_months(&store).await?;
    save_digest(&config.output.digest, &records).await?;

    Ok(())
}
