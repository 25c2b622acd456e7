use std::sync::Arc;
use studio_domain::{GraphEditor, MessageDraft, Mode};
use studio_persistence::new_sqlite_for_test;
use studio_store::{AppStore, StateRepository, StoreConfig};
use uuid::Uuid;

fn temp_db() -> (std::path::PathBuf, String) {
  let path = std::env::temp_dir().join(format!("studio_test_{}.db", Uuid::new_v4()));
  let url = path.to_str().unwrap().to_string();
  (path, url)
}

fn cleanup(path: &std::path::Path) {
  let _ = std::fs::remove_file(path);
  for suffix in ["-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
  }
}

#[test]
fn slot_lifecycle() {
  let (path, url) = temp_db();
  let repo = new_sqlite_for_test(&url).expect("repo");
  assert!(repo.load_slot("a").unwrap().is_none());
  repo.save_slot("a", "uno").unwrap();
  repo.save_slot("a", "dos").unwrap();
  repo.save_slot("b", "otro").unwrap();
  assert_eq!(repo.load_slot("a").unwrap().as_deref(), Some("dos"));
  repo.delete_slot("a").unwrap();
  assert!(repo.load_slot("a").unwrap().is_none());
  assert_eq!(repo.load_slot("b").unwrap().as_deref(), Some("otro"));
  // borrar un slot inexistente no es un error
  repo.delete_slot("a").unwrap();
  cleanup(&path);
}

#[test]
fn store_survives_reopening_the_database() {
  let (path, url) = temp_db();
  let first_messages;
  {
    let repo = Arc::new(new_sqlite_for_test(&url).expect("repo"));
    let store = AppStore::new(repo, StoreConfig::default());
    store.set_mode(Mode::Visual);
    store.set_code("fn main() {}\n");
    store.set_language("rust");
    let (nodes, edges) = GraphEditor::starter().into_parts();
    store.set_nodes(nodes);
    store.set_edges(edges);
    store.add_message(MessageDraft::user("hola"), None);
    store.add_message(MessageDraft::ai("buenas"), None);
    first_messages = store.messages();
  }

  let repo = Arc::new(new_sqlite_for_test(&url).expect("reopen"));
  let store = AppStore::open(repo, StoreConfig::default()).expect("open");
  assert_eq!(store.mode(), Mode::Visual);
  assert_eq!(store.code(), "fn main() {}\n");
  assert_eq!(store.language(), "rust");
  assert_eq!(store.nodes().len(), 3);
  assert_eq!(store.edges().len(), 2);
  assert_eq!(store.messages(), first_messages);
  cleanup(&path);
}
