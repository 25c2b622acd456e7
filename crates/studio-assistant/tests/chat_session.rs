use std::sync::Arc;
use std::time::Duration;
use studio_assistant::{CannedResponder, ChatSession, ReplyTarget};
use studio_domain::{ChatRole, CodeStatus, MessageContext, Mode};
use studio_store::{AppStore, InMemoryStateRepository, StoreConfig};

fn setup() -> (Arc<AppStore>, ChatSession) {
  let store = Arc::new(AppStore::new(Arc::new(InMemoryStateRepository::new()), StoreConfig::default()));
  let chat = ChatSession::new(store.clone(), Duration::from_millis(500));
  (store, chat)
}

#[tokio::test(start_paused = true)]
async fn code_mode_send_updates_editor_and_replies_after_delay() {
  let (store, chat) = setup();
  store.set_code_status(CodeStatus::Saved);
  let start = tokio::time::Instant::now();
  let ex = chat.send("write a python helper").await.unwrap();
  assert!(start.elapsed() >= Duration::from_millis(500));
  assert!(ex.code_updated);
  assert_eq!(store.code(), CannedResponder::new().generate_code("write a python helper"));
  assert_eq!(store.code_status(), CodeStatus::Draft);

  let msgs = store.messages();
  assert_eq!(msgs.len(), 2);
  assert_eq!((msgs[0].id.clone(), msgs[0].role), (ex.user_id, ChatRole::User));
  assert_eq!((msgs[1].id.clone(), msgs[1].role), (ex.reply_id, ChatRole::Ai));
  assert_eq!(msgs[0].context, Some(MessageContext::Code));
  assert!(msgs[1].content.starts_with("I've generated code"));
  assert!(msgs[1].timestamp >= msgs[0].timestamp);
}

#[tokio::test(start_paused = true)]
async fn visual_mode_send_only_chats() {
  let (store, chat) = setup();
  store.set_mode(Mode::Visual);
  let code_before = store.code();
  let ex = chat.send("add a node").await.unwrap();
  assert!(!ex.code_updated);
  assert_eq!(store.code(), code_before);
  let msgs = store.messages();
  assert_eq!(msgs[1].context, Some(MessageContext::Visual));
  assert!(msgs[1].content.starts_with("I see you're working in visual mode."));
}

#[tokio::test(start_paused = true)]
async fn blank_input_is_ignored() {
  let (store, chat) = setup();
  assert!(chat.send("   \n").await.is_none());
  assert!(store.messages().is_empty());
}

#[tokio::test(start_paused = true)]
async fn user_message_is_visible_before_the_reply() {
  let (store, chat) = setup();
  let chat = Arc::new(chat);
  let task = {
    let chat = chat.clone();
    tokio::spawn(async move { chat.send("hola").await })
  };
  tokio::time::sleep(Duration::from_millis(100)).await;
  assert_eq!(store.messages().len(), 1);
  task.await.unwrap();
  assert_eq!(store.messages().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn chat_suggestion_keeps_editor() {
  let (store, chat) = setup();
  let before = store.code();
  let ex = chat.suggest("Show me different sorting algorithms", ReplyTarget::Chat).await;
  assert!(!ex.code_updated);
  assert_eq!(store.code(), before);

  let ex = chat.suggest("Build a REST API with authentication", ReplyTarget::Both).await;
  assert!(ex.code_updated);
  assert!(store.code().starts_with("// API call function"));
  assert_eq!(store.messages().len(), 4);
}
