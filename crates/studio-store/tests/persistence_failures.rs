use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use studio_domain::{CodeStatus, MessageDraft, Mode};
use studio_store::{AppStore, Result, StateRepository, StoreConfig, StoreError};

/// Slot que falla siempre, como una base de datos caída.
#[derive(Default)]
struct UnavailableRepository {
  attempts: AtomicU64,
}

impl StateRepository for UnavailableRepository {
  fn load_slot(&self, _name: &str) -> Result<Option<String>> {
    Err(StoreError::Storage("down".into()))
  }

  fn save_slot(&self, _name: &str, _payload: &str) -> Result<()> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    Err(StoreError::Storage("down".into()))
  }

  fn delete_slot(&self, _name: &str) -> Result<()> {
    Err(StoreError::Storage("down".into()))
  }
}

#[test]
fn open_propagates_storage_errors() {
  let repo = Arc::new(UnavailableRepository::default());
  match AppStore::open(repo, StoreConfig::default()) {
    Err(StoreError::Storage(msg)) => assert_eq!(msg, "down"),
    Err(other) => panic!("expected Storage, got {:?}", other),
    Ok(_) => panic!("open should fail when the slot cannot be read"),
  }
}

#[test]
fn mutators_keep_working_when_writes_fail() {
  let repo = Arc::new(UnavailableRepository::default());
  let store = AppStore::new(repo.clone(), StoreConfig::default());

  store.set_mode(Mode::Visual);
  assert_eq!(store.mode(), Mode::Visual);

  store.set_code_status(CodeStatus::Saved);
  store.set_code("fn main() {}");
  assert_eq!(store.code(), "fn main() {}");
  assert_eq!(store.code_status(), CodeStatus::Draft);

  let id = store.add_message(MessageDraft::user("hola"), None);
  assert!(!id.is_empty());
  let messages = store.messages();
  assert_eq!(messages.len(), 1);
  assert_eq!(messages[0].id, id);

  // cada mutación persistida intentó escribir
  assert_eq!(repo.attempts.load(Ordering::SeqCst), 3);
}
