//! Crate `studio-store`: contenedor de estado de la aplicación
//!
//! Este crate define el `AppStore`, la única fuente de verdad del estudio:
//! modo, buffer de código y su estado, grafo visual, chat, logs, layout de
//! paneles y preferencias del editor. Los consumidores leen mediante
//! accesores y escriben sólo mediante mutadores con nombre.
//!
//! Diseño resumido:
//! - Mutadores síncronos e infalibles: cada uno reemplaza exactamente los
//!   campos que documenta.
//! - Notificación explícita: cada mutación publica un `StoreEvent` en un
//!   canal `broadcast`; no hay re-render implícito.
//! - Persistencia por snapshot: tras cada mutación de un campo persistido se
//!   escribe un `PersistedSnapshot` en un `StateRepository` (slot con
//!   nombre). Logs y estado de ejecución nunca se persisten.
//!
//! Ejemplo rápido:
//! ```rust
//! use studio_store::{AppStore, InMemoryStateRepository, StoreConfig};
//! use std::sync::Arc;
//! let repo = Arc::new(InMemoryStateRepository::new());
//! let store = AppStore::new(repo, StoreConfig::default());
//! store.set_code("let x = 1;");
//! assert_eq!(store.code(), "let x = 1;");
//! ```
pub mod errors;
pub mod repository;
pub mod state;
pub mod store;
pub mod stubs;

pub use errors::*;
pub use repository::*;
pub use state::*;
pub use store::*;
pub use stubs::*;
