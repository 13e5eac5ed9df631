use std::path::Path;

use chatdigest_types::ChatMessage;

use crate::error::Result;
use crate::json::read_json;

/// Load a JSON array of chat messages, stably sorted by timestamp ascending
pub async fn load_messages(path: impl AsRef<Path>) -> Result<Vec<ChatMessage>> {
    let path = path.as_ref();
    let mut messages: Vec<ChatMessage> = read_json(path).await?;
    messages.sort_by_key(|m| m.timestamp);

    tracing::info!(path = %path.display(), count = messages.len(), "loaded chat messages");
    Ok(messages)
}
