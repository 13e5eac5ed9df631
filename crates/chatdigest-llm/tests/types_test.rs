use chatdigest_llm::Message;

#[test]
fn test_human_message_role_and_content() {
    let msg = Message::human("Hello, world!");
    assert_eq!(msg.role(), "user");
    assert_eq!(msg.content(), "Hello, world!");
}

#[test]
fn test_message_serialization_human() {
    let msg = Message::human("Hello");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json, serde_json::json!({"role": "user", "content": "Hello"}));
}

#[test]
fn test_message_deserialization() {
    let json = r#"{"role":"user","content":"Summarize: release planning"}"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg.role(), "user");
    assert_eq!(msg.content(), "Summarize: release planning");
}

#[test]
fn test_unknown_role_is_rejected() {
    let json = r#"{"role":"system","content":"You summarize chats"}"#;
    assert!(serde_json::from_str::<Message>(json).is_err());
}
