//! studio-domain: entidades del estudio de código
//!
//! Tipos compartidos por el store, la persistencia y los front-ends: modo de
//! edición, buffer de código y su estado, preferencias del editor, grafo
//! visual, mensajes de chat, entradas de log y layout de paneles. También
//! expone los generadores de ids y el reloj monotónico que usa el store.
mod chat;
mod clock;
mod code_buffer;
mod errors;
mod graph;
mod ids;
mod layout;
mod log_entry;
mod mode;
mod preferences;

pub use chat::{ChatMessage, ChatRole, MessageContext, MessageDraft};
pub use clock::{Clock, MonotonicClock};
pub use code_buffer::{line_count, CodeBuffer, DEFAULT_CODE, DEFAULT_LANGUAGE};
pub use errors::DomainError;
pub use graph::{remove_node_cascade, GraphEdge, GraphEditor, GraphNode, NodeKind, Position};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use layout::{clamp_chat_width, clamp_logs_height, PanelLayout};
pub use log_entry::{LogEntry, LogLevel};
pub use mode::{CodeStatus, Mode};
pub use preferences::{EditorPreferences, FONT_SIZE_OPTIONS, TAB_SIZE_OPTIONS};
