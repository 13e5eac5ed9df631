use chatdigest_llm::{ChatClient, ChatOptions, ChatRequest, Message, OpenAIClient};

const COMPLETION_BODY: &str = r#"{
    "id": "chatcmpl-1",
    "object": "chat.completion",
    "created": 1700000000,
    "model": "gpt-4",
    "choices": [
        {
            "index": 0,
            "message": {"role": "assistant", "content": "Обсуждается релиз"},
            "finish_reason": "stop"
        }
    ],
    "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17}
}"#;

#[tokio::test]
async fn test_chat_against_mock_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COMPLETION_BODY)
        .create_async()
        .await;

    let client = OpenAIClient::new("test-key").unwrap().with_base_url(server.url());
    let request = ChatRequest::new("gpt-4", vec![Message::human("hi")])
        .with_options(ChatOptions::new().max_tokens(1500));

    let response = client.chat(request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content.as_deref(), Some("Обсуждается релиз"));
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.unwrap().total_tokens, 17);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
        .create_async()
        .await;

    let client = OpenAIClient::new("test-key").unwrap().with_base_url(server.url());
    let request = ChatRequest::new("gpt-4", vec![Message::human("hi")]);

    let err = client.chat(request).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("429"));
    assert!(msg.contains("Rate limit reached"));
}
