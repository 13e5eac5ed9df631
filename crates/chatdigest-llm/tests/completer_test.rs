use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chatdigest_llm::{ChatClient, ChatCompleter, ChatRequest, ChatResponse, Completer};

/// Chat client that answers from a canned reply and remembers what it was asked
struct ScriptedClient {
    reply: Option<String>,
    seen: Mutex<Vec<ChatRequest>>,
}

impl ScriptedClient {
    fn new(reply: Option<&str>) -> Self {
        Self {
            reply: reply.map(str::to_string),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.seen.lock().unwrap().push(request);
        Ok(ChatResponse {
            content: self.reply.clone(),
            usage: None,
            finish_reason: Some("stop".to_string()),
        })
    }
}

#[tokio::test]
async fn test_prompt_is_sent_as_single_user_message() {
    let client = Arc::new(ScriptedClient::new(Some("summary")));
    let completer = ChatCompleter::new(client.clone(), "gpt-4");

    let text = completer.complete("Summarize: hi", 1500).await.unwrap();
    assert_eq!(text, "summary");

    let seen = client.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].model, "gpt-4");
    assert_eq!(seen[0].messages.len(), 1);
    assert_eq!(seen[0].messages[0].role(), "user");
    assert_eq!(seen[0].messages[0].content(), "Summarize: hi");
    assert_eq!(seen[0].options.max_tokens, Some(1500));
}

#[tokio::test]
async fn test_missing_content_is_an_error() {
    let client = Arc::new(ScriptedClient::new(None));
    let completer = ChatCompleter::new(client, "gpt-4");

    let err = completer.complete("Summarize", 100).await.unwrap_err();
    assert!(err.to_string().contains("no content"));
}
