// Prompt-in, text-out collaborator used by the summarization pipeline

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::traits::{ChatClient, ChatOptions, ChatRequest};
use crate::types::Message;

/// Single-shot text completion: one prompt, one response, no streaming.
///
/// Summaries are produced strictly one call at a time, so implementors
/// never see concurrent requests from the pipeline.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Complete `prompt`, truncating the response at `max_response_tokens`
    async fn complete(&self, prompt: &str, max_response_tokens: u32) -> Result<String>;
}

/// `Completer` backed by any chat client, sending the prompt as one user message
pub struct ChatCompleter {
    client: Arc<dyn ChatClient>,
    model: String,
}

impl ChatCompleter {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Completer for ChatCompleter {
    async fn complete(&self, prompt: &str, max_response_tokens: u32) -> Result<String> {
        let request = ChatRequest::new(self.model.clone(), vec![Message::human(prompt)])
            .with_options(ChatOptions::new().max_tokens(max_response_tokens));

        let response = self.client.chat(request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "completion finished"
            );
        }
        if response.finish_reason.as_deref() == Some("length") {
            tracing::warn!(max_response_tokens, "completion truncated at token ceiling");
        }

        response
            .content
            .ok_or_else(|| anyhow::anyhow!("Completion from model {} had no content", self.model))
    }
}
