use lawsathi_llm::Message;

#[test]
fn test_message_roles() {
    assert_eq!(Message::system("You are helpful").role(), "system");
    assert_eq!(Message::human("Hello").role(), "user");
}

#[test]
fn test_message_content() {
    assert_eq!(Message::human("What is bail?").content(), "What is bail?");
}

#[test]
fn test_message_serialization_human() {
    let msg = Message::human("Hello");
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"role\":\"user\""));
    assert!(json.contains("Hello"));
    assert!(!json.contains("name"));
}

#[test]
fn test_message_deserialization() {
    let json = r#"{"role":"system","content":"Rules"}"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg, Message::system("Rules"));
}
