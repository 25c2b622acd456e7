// Archivo: store.rs
// Propósito: implementar `AppStore`, el contenedor de estado compartido.
//
// Cada mutador toma el lock, reemplaza los campos que documenta, vuelca el
// snapshot al slot si tocó un campo persistido y publica un `StoreEvent`.
// El volcado ocurre con el lock tomado para que el orden de escrituras en el
// slot coincida con el orden de las mutaciones.
use crate::errors::Result;
use crate::repository::StateRepository;
use crate::state::{AppState, PersistedSnapshot};
use std::sync::{Arc, Mutex, MutexGuard};
use studio_domain::{ChatMessage, Clock, CodeStatus, EditorPreferences, GraphEdge, GraphNode, IdGenerator, LogEntry,
                    LogLevel, MessageDraft, Mode, MonotonicClock, PanelLayout, SequentialIdGenerator};
use tokio::sync::broadcast;

/// Nombre por defecto del slot durable.
pub const DEFAULT_SLOT: &str = "ai-code-studio";

/// Prefijo de los ids generados por defecto.
pub const DEFAULT_ID_PREFIX: &str = "id";

/// Configuración del store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Nombre del slot donde se persiste el snapshot.
    pub slot_name: String,
    /// Capacidad del canal de eventos; los suscriptores lentos pierden los
    /// eventos más antiguos (`RecvError::Lagged`).
    pub event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig { slot_name: DEFAULT_SLOT.to_string(), event_capacity: 256 }
    }
}

/// Evento publicado tras cada mutación. Nombra el campo que cambió.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ModeChanged(Mode),
    CodeChanged,
    LanguageChanged(String),
    CodeStatusChanged(CodeStatus),
    NodesChanged,
    EdgesChanged,
    MessageAdded(String),
    MessagesCleared,
    LogAdded(String),
    LogsCleared,
    LayoutChanged,
    PreferencesChanged,
}

impl StoreEvent {
    /// Indica si el campo afectado forma parte del snapshot persistido.
    pub fn is_persisted(&self) -> bool {
        !matches!(self, StoreEvent::CodeStatusChanged(_) | StoreEvent::LogAdded(_) | StoreEvent::LogsCleared)
    }
}

/// Contenedor de estado de la aplicación.
///
/// Responsabilidades principales:
/// - Guardar el `AppState` y exponerlo sólo mediante accesores de lectura
/// - Aplicar los mutadores con nombre, cada uno atómico y sin fallos
/// - Volcar el subconjunto persistido al `StateRepository`
/// - Notificar a los suscriptores con un `StoreEvent` por mutación
///
/// Las escrituras al slot son fire-and-forget: un fallo se registra con
/// `log::warn!` y nunca llega al llamador.
pub struct AppStore {
    state: Mutex<AppState>,
    repo: Arc<dyn StateRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    config: StoreConfig,
    events: broadcast::Sender<StoreEvent>,
}

impl AppStore {
    /// Crea un store con el estado por defecto, sin leer el slot.
    pub fn new(repo: Arc<dyn StateRepository>, config: StoreConfig) -> Self {
        Self::with_state(repo, config, AppState::default())
    }

    /// Abre el store rehidratando el slot si existe. Un payload ilegible se
    /// descarta con un aviso y la sesión arranca con el estado por defecto;
    /// los errores del almacenamiento sí se propagan.
    pub fn open(repo: Arc<dyn StateRepository>, config: StoreConfig) -> Result<Self> {
        let state = match repo.load_slot(&config.slot_name)? {
            Some(payload) => match PersistedSnapshot::from_payload(&payload) {
                Ok(snapshot) => {
                    log::info!("slot '{}' rehidratado ({} mensajes, {} nodos)",
                               config.slot_name,
                               snapshot.messages.len(),
                               snapshot.nodes.len());
                    snapshot.into_state()
                }
                Err(e) => {
                    log::warn!("slot '{}' ilegible, se descarta: {}", config.slot_name, e);
                    AppState::default()
                }
            },
            None => AppState::default(),
        };
        Ok(Self::with_state(repo, config, state))
    }

    fn with_state(repo: Arc<dyn StateRepository>, config: StoreConfig, state: AppState) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        // Reanuda el contador por encima de los ids ya usados en el chat
        // rehidratado.
        let used = highest_sequence(&state.messages, DEFAULT_ID_PREFIX);
        let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIdGenerator::starting_after(DEFAULT_ID_PREFIX, used));
        Self { state: Mutex::new(state), repo, ids, clock: Arc::new(MonotonicClock::new()), config, events }
    }

    /// Reemplaza el generador de ids (por ejemplo `UuidIdGenerator`).
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Reemplaza el reloj usado para sellar mensajes y logs.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Nuevo receptor de eventos. Sólo recibe lo publicado después de
    /// suscribirse.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn mutate<R>(&self, event: StoreEvent, f: impl FnOnce(&mut AppState) -> R) -> R {
        let out = {
            let mut state = self.lock();
            let out = f(&mut state);
            if event.is_persisted() {
                self.persist(&state);
            }
            out
        };
        // Sin suscriptores `send` devuelve error; no es un fallo.
        let _ = self.events.send(event);
        out
    }

    fn persist(&self, state: &AppState) {
        let snapshot = PersistedSnapshot::capture(state);
        let written = snapshot.to_payload()
                              .map_err(crate::errors::StoreError::from)
                              .and_then(|payload| self.repo.save_slot(&self.config.slot_name, &payload));
        if let Err(e) = written {
            log::warn!("no se pudo persistir el slot '{}': {}", self.config.slot_name, e);
        }
    }

    // --- lectura

    /// Copia completa del estado actual.
    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    /// Copia del subconjunto persistido.
    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot::capture(&self.lock())
    }

    pub fn mode(&self) -> Mode {
        self.lock().mode
    }

    pub fn code(&self) -> String {
        self.lock().code.text.clone()
    }

    pub fn language(&self) -> String {
        self.lock().code.language.clone()
    }

    pub fn code_status(&self) -> CodeStatus {
        self.lock().code_status
    }

    pub fn nodes(&self) -> Vec<GraphNode> {
        self.lock().nodes.clone()
    }

    pub fn edges(&self) -> Vec<GraphEdge> {
        self.lock().edges.clone()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().messages.clone()
    }

    pub fn logs(&self) -> Vec<LogEntry> {
        self.lock().logs.clone()
    }

    pub fn layout(&self) -> PanelLayout {
        self.lock().layout.clone()
    }

    pub fn preferences(&self) -> EditorPreferences {
        self.lock().preferences.clone()
    }

    // --- mutadores

    pub fn set_mode(&self, mode: Mode) {
        self.mutate(StoreEvent::ModeChanged(mode), |s| s.mode = mode);
    }

    /// Reemplaza el texto del buffer y deja el estado en `Draft`, sea cual
    /// sea el estado previo.
    pub fn set_code(&self, text: impl Into<String>) {
        let text = text.into();
        let changed = self.mutate(StoreEvent::CodeChanged, |s| {
                              s.code.text = text;
                              let changed = s.code_status != CodeStatus::Draft;
                              s.code_status = CodeStatus::Draft;
                              changed
                          });
        if changed {
            let _ = self.events.send(StoreEvent::CodeStatusChanged(CodeStatus::Draft));
        }
    }

    pub fn set_language(&self, language: impl Into<String>) {
        let language = language.into();
        let tag = language.clone();
        self.mutate(StoreEvent::LanguageChanged(tag), |s| s.code.language = language);
    }

    pub fn set_code_status(&self, status: CodeStatus) {
        self.mutate(StoreEvent::CodeStatusChanged(status), |s| s.code_status = status);
    }

    /// Marca el buffer como guardado salvo que ya lo esté. Devuelve si hubo
    /// cambio.
    pub fn save(&self) -> bool {
        {
            let mut state = self.lock();
            if state.code_status == CodeStatus::Saved {
                return false;
            }
            state.code_status = CodeStatus::Saved;
        }
        let _ = self.events.send(StoreEvent::CodeStatusChanged(CodeStatus::Saved));
        true
    }

    /// Reemplazo completo de los nodos. La integridad con las aristas es
    /// responsabilidad del llamador.
    pub fn set_nodes(&self, nodes: Vec<GraphNode>) {
        self.mutate(StoreEvent::NodesChanged, |s| s.nodes = nodes);
    }

    /// Reemplazo completo de las aristas.
    pub fn set_edges(&self, edges: Vec<GraphEdge>) {
        self.mutate(StoreEvent::EdgesChanged, |s| s.edges = edges);
    }

    /// Borra un nodo y en cascada las aristas que lo referencian. Devuelve
    /// cuántas aristas se eliminaron, o `None` si el nodo no existía.
    pub fn remove_node(&self, id: &str) -> Option<usize> {
        let removed = {
            let mut state = self.lock();
            let AppState { nodes, edges, .. } = &mut *state;
            let removed = studio_domain::remove_node_cascade(nodes, edges, id);
            if removed.is_some() {
                self.persist(&state);
            }
            removed
        };
        if let Some(n) = removed {
            let _ = self.events.send(StoreEvent::NodesChanged);
            if n > 0 {
                let _ = self.events.send(StoreEvent::EdgesChanged);
            }
        }
        removed
    }

    /// Añade un mensaje al final del chat con timestamp actual y devuelve
    /// su id.
    ///
    /// Con `id` explícito se usa tal cual; si ya existe en la sesión se
    /// sustituye por uno nuevo y se avisa con `log::warn!`.
    pub fn add_message(&self, draft: MessageDraft, id: Option<String>) -> String {
        let mut state = self.lock();
        let id = match id {
            Some(requested) if state.messages.iter().any(|m| m.id == requested) => {
                let fresh = self.fresh_id(&state);
                log::warn!("id de mensaje duplicado '{}', se asigna '{}'", requested, fresh);
                fresh
            }
            Some(requested) => requested,
            None => self.fresh_id(&state),
        };
        let timestamp = self.clock.now();
        state.messages.push(draft.into_message(id.clone(), timestamp));
        self.persist(&state);
        drop(state);
        let _ = self.events.send(StoreEvent::MessageAdded(id.clone()));
        id
    }

    fn fresh_id(&self, state: &AppState) -> String {
        loop {
            let candidate = self.ids.next_id();
            if !state.messages.iter().any(|m| m.id == candidate) && !state.logs.iter().any(|l| l.id == candidate) {
                return candidate;
            }
        }
    }

    /// Vacía el historial del chat.
    pub fn clear_messages(&self) {
        self.mutate(StoreEvent::MessagesCleared, |s| s.messages.clear());
    }

    /// Añade una entrada de log con id nuevo y timestamp actual.
    pub fn add_log(&self, level: LogLevel, message: impl Into<String>) -> String {
        let message = message.into();
        let mut state = self.lock();
        let id = self.fresh_id(&state);
        let timestamp = self.clock.now();
        state.logs.push(LogEntry { id: id.clone(), level, message, timestamp });
        drop(state);
        let _ = self.events.send(StoreEvent::LogAdded(id.clone()));
        id
    }

    pub fn clear_logs(&self) {
        self.mutate(StoreEvent::LogsCleared, |s| s.logs.clear());
    }

    pub fn set_logs_open(&self, open: bool) {
        self.mutate(StoreEvent::LayoutChanged, |s| s.layout.logs_open = open);
    }

    pub fn set_chat_open(&self, open: bool) {
        self.mutate(StoreEvent::LayoutChanged, |s| s.layout.chat_open = open);
    }

    /// Sin recorte: el rango usable lo decide quien redimensiona.
    pub fn set_logs_panel_height(&self, px: f64) {
        self.mutate(StoreEvent::LayoutChanged, |s| s.layout.logs_panel_height = px);
    }

    /// Sin recorte: el rango usable lo decide quien redimensiona.
    pub fn set_chat_panel_width(&self, px: f64) {
        self.mutate(StoreEvent::LayoutChanged, |s| s.layout.chat_panel_width = px);
    }

    pub fn set_font_size(&self, pt: u32) {
        self.mutate(StoreEvent::PreferencesChanged, |s| s.preferences.font_size = pt);
    }

    pub fn set_tab_size(&self, spaces: u32) {
        self.mutate(StoreEvent::PreferencesChanged, |s| s.preferences.tab_size = spaces);
    }

    pub fn set_show_line_numbers(&self, on: bool) {
        self.mutate(StoreEvent::PreferencesChanged, |s| s.preferences.show_line_numbers = on);
    }

    pub fn set_show_minimap(&self, on: bool) {
        self.mutate(StoreEvent::PreferencesChanged, |s| s.preferences.show_minimap = on);
    }

    pub fn set_word_wrap(&self, on: bool) {
        self.mutate(StoreEvent::PreferencesChanged, |s| s.preferences.word_wrap = on);
    }

    pub fn set_code_completion(&self, on: bool) {
        self.mutate(StoreEvent::PreferencesChanged, |s| s.preferences.code_completion = on);
    }
}

/// Mayor sufijo numérico entre los ids `"{prefix}-{n}"` de los mensajes.
fn highest_sequence(messages: &[ChatMessage], prefix: &str) -> u64 {
    let head = format!("{}-", prefix);
    messages.iter()
            .filter_map(|m| m.id.strip_prefix(&head))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::InMemoryStateRepository;

    fn store() -> (Arc<InMemoryStateRepository>, AppStore) {
        let repo = Arc::new(InMemoryStateRepository::new());
        let store = AppStore::new(repo.clone(), StoreConfig::default());
        (repo, store)
    }

    #[test]
    fn status_and_log_mutations_do_not_touch_the_slot() {
        let (repo, store) = store();
        store.set_code_status(CodeStatus::Executing);
        store.add_log(LogLevel::Info, "hola");
        store.clear_logs();
        assert!(store.save());
        assert_eq!(repo.write_count(), 0);

        store.set_mode(Mode::Visual);
        assert_eq!(repo.write_count(), 1);
    }

    #[test]
    fn highest_sequence_ignores_foreign_ids() {
        let (_, store) = store();
        store.add_message(MessageDraft::user("a"), Some("id-41".into()));
        store.add_message(MessageDraft::user("b"), Some("fixed".into()));
        let msgs = store.messages();
        assert_eq!(highest_sequence(&msgs, "id"), 41);
    }

    #[test]
    fn generated_ids_skip_caller_supplied_ones() {
        let (_, store) = store();
        store.add_message(MessageDraft::user("a"), Some("id-1".into()));
        let next = store.add_message(MessageDraft::user("b"), None);
        assert_ne!(next, "id-1");
    }
}
