use std::sync::Arc;
use studio_domain::{CodeBuffer, CodeStatus, GraphEditor, LogLevel, MessageContext, MessageDraft, Mode};
use studio_store::{AppState, AppStore, InMemoryStateRepository, PersistedSnapshot, StateRepository, StoreConfig};

#[test]
fn reopen_restores_persisted_fields_only() {
  let repo = Arc::new(InMemoryStateRepository::new());
  let store = AppStore::new(repo.clone(), StoreConfig::default());
  store.set_mode(Mode::Visual);
  store.set_code("print('x')\nprint('y')");
  store.set_language("python");
  let (nodes, edges) = GraphEditor::starter().into_parts();
  store.set_nodes(nodes.clone());
  store.set_edges(edges.clone());
  store.add_message(MessageDraft::user("hola").with_context(MessageContext::Code), None);
  store.add_message(MessageDraft::ai("respuesta"), None);
  store.set_chat_open(false);
  store.set_tab_size(2);
  store.add_log(LogLevel::Info, "no persiste");
  store.set_code_status(CodeStatus::Saved);
  let original = store.state();

  let reopened = AppStore::open(repo, StoreConfig::default()).unwrap();
  let restored = reopened.state();
  assert_eq!(restored.mode, Mode::Visual);
  assert_eq!(restored.code, original.code);
  assert_eq!(restored.nodes, nodes);
  assert_eq!(restored.edges, edges);
  assert_eq!(restored.messages, original.messages);
  assert_eq!(restored.layout, original.layout);
  assert_eq!(restored.preferences, original.preferences);
  assert!(restored.logs.is_empty());
  assert_eq!(restored.code_status, CodeStatus::Draft);
}

#[test]
fn timestamps_round_trip_to_the_millisecond() {
  let repo = Arc::new(InMemoryStateRepository::new());
  let store = AppStore::new(repo.clone(), StoreConfig::default());
  store.add_message(MessageDraft::user("a"), None);
  store.add_message(MessageDraft::user("b"), None);
  let before: Vec<_> = store.messages().iter().map(|m| m.timestamp).collect();

  let payload = repo.load_slot("ai-code-studio").unwrap().unwrap();
  let snapshot = PersistedSnapshot::from_payload(&payload).unwrap();
  let after: Vec<_> = snapshot.messages.iter().map(|m| m.timestamp).collect();
  assert_eq!(before, after);
  for (b, a) in before.iter().zip(after.iter()) {
    assert_eq!(b.timestamp_millis(), a.timestamp_millis());
  }
}

#[test]
fn ids_continue_after_rehydrated_messages() {
  let repo = Arc::new(InMemoryStateRepository::new());
  let store = AppStore::new(repo.clone(), StoreConfig::default());
  let first = store.add_message(MessageDraft::user("a"), None);
  let second = store.add_message(MessageDraft::user("b"), None);

  let reopened = AppStore::open(repo, StoreConfig::default()).unwrap();
  let third = reopened.add_message(MessageDraft::user("c"), None);
  assert_ne!(third, first);
  assert_ne!(third, second);
}

#[test]
fn corrupt_slot_starts_fresh() {
  let repo = Arc::new(InMemoryStateRepository::new());
  repo.save_slot("ai-code-studio", "{not json").unwrap();
  let store = AppStore::open(repo, StoreConfig::default()).unwrap();
  assert_eq!(store.state(), AppState::default());
}

#[test]
fn partial_snapshot_fills_defaults() {
  let repo = Arc::new(InMemoryStateRepository::new());
  repo.save_slot("ai-code-studio", r#"{"state":{"mode":"visual"},"version":0}"#).unwrap();
  let store = AppStore::open(repo, StoreConfig::default()).unwrap();
  let state = store.state();
  assert_eq!(state.mode, Mode::Visual);
  assert_eq!(state.code, CodeBuffer::default());
  assert!(state.layout.chat_open);
}

#[test]
fn custom_slot_name_is_used() {
  let repo = Arc::new(InMemoryStateRepository::new());
  let config = StoreConfig { slot_name: "otro".into(), ..StoreConfig::default() };
  let store = AppStore::new(repo.clone(), config);
  store.set_mode(Mode::Visual);
  assert!(repo.load_slot("otro").unwrap().is_some());
  assert!(repo.load_slot("ai-code-studio").unwrap().is_none());
}

#[test]
fn payload_uses_versioned_envelope() {
  let repo = Arc::new(InMemoryStateRepository::new());
  let store = AppStore::new(repo.clone(), StoreConfig::default());
  store.set_logs_panel_height(250.0);
  let payload = repo.load_slot("ai-code-studio").unwrap().unwrap();
  let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
  assert_eq!(value["version"], 1);
  assert_eq!(value["state"]["layout"]["logsPanelHeight"], 250.0);
  assert!(value["state"].get("logs").is_none());
  assert!(value["state"].get("codeStatus").is_none());
}
