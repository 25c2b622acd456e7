// Archivo: state.rs
// Propósito: esquema del estado compartido (`AppState`) y del subconjunto
// que se persiste en el slot (`PersistedSnapshot`).
use serde::{Deserialize, Serialize};
use studio_domain::{ChatMessage, CodeBuffer, CodeStatus, EditorPreferences, GraphEdge, GraphNode, LogEntry, Mode,
                    PanelLayout};

/// Versión del formato de snapshot escrito en el slot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Estado completo de la sesión.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub mode: Mode,
    pub code: CodeBuffer,
    pub code_status: CodeStatus,
    pub preferences: EditorPreferences,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub messages: Vec<ChatMessage>,
    pub logs: Vec<LogEntry>,
    pub layout: PanelLayout,
}

/// Subconjunto persistido del estado. Logs y `code_status` quedan fuera.
///
/// Todos los campos tienen default para poder leer snapshots escritos por
/// versiones que persistían menos campos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub mode: Mode,
    pub code: String,
    pub language: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub messages: Vec<ChatMessage>,
    pub layout: PanelLayout,
    pub preferences: EditorPreferences,
}

impl Default for PersistedSnapshot {
    fn default() -> Self {
        PersistedSnapshot::capture(&AppState::default())
    }
}

/// Sobre con versión tal como se guarda en el slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    pub state: PersistedSnapshot,
    pub version: u32,
}

impl PersistedSnapshot {
    pub fn capture(state: &AppState) -> Self {
        PersistedSnapshot { mode: state.mode,
                            code: state.code.text.clone(),
                            language: state.code.language.clone(),
                            nodes: state.nodes.clone(),
                            edges: state.edges.clone(),
                            messages: state.messages.clone(),
                            layout: state.layout.clone(),
                            preferences: state.preferences.clone() }
    }

    /// Construye el estado inicial de una sesión a partir del snapshot. El
    /// estado de ejecución arranca en `Draft` y los logs vacíos.
    pub fn into_state(self) -> AppState {
        AppState { mode: self.mode,
                   code: CodeBuffer::new(self.code, self.language),
                   code_status: CodeStatus::Draft,
                   preferences: self.preferences,
                   nodes: self.nodes,
                   edges: self.edges,
                   messages: self.messages,
                   logs: Vec::new(),
                   layout: self.layout }
    }

    pub fn to_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(&SnapshotEnvelope { state: self.clone(), version: SNAPSHOT_VERSION })
    }

    pub fn from_payload(payload: &str) -> serde_json::Result<Self> {
        let envelope: SnapshotEnvelope = serde_json::from_str(payload)?;
        Ok(envelope.state)
    }
}
