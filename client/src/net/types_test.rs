use super::*;

// =============================================================
// Sender
// =============================================================

#[test]
fn sender_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Sender::Agent).unwrap(), "\"agent\"");
}

#[test]
fn sender_rejects_unknown_role() {
    let parsed = serde_json::from_str::<Sender>("\"system\"");
    assert!(parsed.is_err());
}

#[test]
fn sender_as_str_matches_wire_name() {
    assert_eq!(Sender::User.as_str(), "user");
    assert_eq!(Sender::Agent.as_str(), "agent");
}

// =============================================================
// Message
// =============================================================

#[test]
fn message_parses_gateway_json() {
    let msg: Message = serde_json::from_str(r#"{"id":1,"from":"agent","text":"hi"}"#).unwrap();
    assert_eq!(msg, Message { id: 1, from: Sender::Agent, text: "hi".to_owned() });
}

#[test]
fn message_list_preserves_order() {
    let raw = r#"[{"id":3,"from":"user","text":"a"},{"id":1,"from":"agent","text":"b"}]"#;
    let msgs: Vec<Message> = serde_json::from_str(raw).unwrap();
    let ids: Vec<MessageId> = msgs.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn message_text_is_kept_verbatim() {
    let msg: Message = serde_json::from_str(r#"{"id":7,"from":"user","text":"  <b>x</b>\n"}"#).unwrap();
    assert_eq!(msg.text, "  <b>x</b>\n");
}

#[test]
fn message_missing_role_is_rejected() {
    let parsed = serde_json::from_str::<Message>(r#"{"id":1,"text":"hi"}"#);
    assert!(parsed.is_err());
}

#[test]
fn send_body_serializes_text_field() {
    let body = SendMessageBody { text: "hello".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "text": "hello" }));
}
