use chrono::{TimeZone, Utc};
use studio_domain::{ChatMessage, ChatRole, CodeStatus, LogEntry, LogLevel, MessageContext, MessageDraft, Mode};

#[test]
fn chat_message_timestamp_round_trips_to_the_millisecond() {
  let ts = Utc.timestamp_millis_opt(1_717_171_717_123).unwrap();
  let msg = MessageDraft::user("hi").with_context(MessageContext::Code).into_message("m-1".into(), ts);
  let text = serde_json::to_string(&msg).unwrap();
  assert!(text.contains("\"type\":\"user\""));
  let back: ChatMessage = serde_json::from_str(&text).unwrap();
  assert_eq!(back, msg);
  assert_eq!(back.timestamp.timestamp_millis(), 1_717_171_717_123);
}

#[test]
fn log_entry_round_trips() {
  let ts = Utc.timestamp_millis_opt(1_700_000_000_001).unwrap();
  let entry = LogEntry { id: "log-1".into(), level: LogLevel::Success, message: "ok".into(), timestamp: ts };
  let back: LogEntry = serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
  assert_eq!(back, entry);
}

#[test]
fn message_without_context_omits_field() {
  let ts = Utc::now();
  let msg = MessageDraft::ai("hello").into_message("a".into(), ts);
  let v = serde_json::to_value(&msg).unwrap();
  assert!(v.get("context").is_none());
  assert_eq!(msg.role, ChatRole::Ai);
}

#[test]
fn enums_use_lowercase_tags() {
  assert_eq!(serde_json::to_value(Mode::Visual).unwrap(), "visual");
  assert_eq!(serde_json::to_value(CodeStatus::Executing).unwrap(), "executing");
  assert_eq!("CODE".parse::<Mode>().unwrap(), Mode::Code);
  assert!("graph".parse::<Mode>().is_err());
}
