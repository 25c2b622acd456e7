use crate::config::StudioConfig;
use crate::errors::Result;
use crate::execution::{ExecutionWorkflow, RunOutcome};
use crate::hotkey::Hotkey;
use crate::runner::SimulatedRunner;
use std::sync::Arc;
use studio_store::{AppStore, StateRepository, StoreConfig};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Resultado de `StudioSession::handle_hotkey`.
#[derive(Debug)]
pub enum HotkeyOutcome {
  /// El buffer pasó a `Saved`.
  Saved,
  /// Ya estaba guardado; no se hizo nada.
  AlreadySaved,
  /// Se lanzó el workflow en una tarea de tokio.
  RunStarted(JoinHandle<RunOutcome>),
  /// La combinación no corresponde a ningún atajo.
  Ignored,
  /// Atajo de ejecución pulsado fuera de un runtime de tokio; no se lanzó
  /// nada y el store queda intacto.
  NoRuntime,
}

/// Fachada de una sesión del estudio: el store compartido más el workflow
/// de ejecución. Es lo que consumen la CLI y el chat.
#[derive(Clone)]
pub struct StudioSession {
  store: Arc<AppStore>,
  workflow: ExecutionWorkflow,
}

impl StudioSession {
  pub fn new(store: Arc<AppStore>, workflow: ExecutionWorkflow) -> Self {
    Self { store, workflow }
  }

  /// Abre el store sobre `repo` (rehidratando el slot configurado) y monta
  /// el runner simulado con el retardo y la política de la configuración.
  pub fn open(repo: Arc<dyn StateRepository>, config: &StudioConfig) -> Result<Self> {
    let store_config = StoreConfig { slot_name: config.slot_name.clone(), ..StoreConfig::default() };
    let store = AppStore::open(repo, store_config)?;
    let runner = Arc::new(SimulatedRunner::new(config.execution_delay));
    let workflow = ExecutionWorkflow::new(runner, config.overlap_policy);
    log::info!("sesión abierta sobre el slot '{}' (solapamiento: {:?})", config.slot_name, config.overlap_policy);
    Ok(Self::new(Arc::new(store), workflow))
  }

  pub fn store(&self) -> &Arc<AppStore> {
    &self.store
  }

  pub fn workflow(&self) -> &ExecutionWorkflow {
    &self.workflow
  }

  /// Atajo de guardado: `Saved` salvo que ya lo esté. No ejecuta nada.
  pub fn save(&self) -> bool {
    self.store.save()
  }

  /// Ejecuta el workflow en la tarea actual y espera a que termine.
  pub async fn run(&self) -> RunOutcome {
    self.workflow.run(&self.store).await
  }

  /// Lanza el workflow en una tarea nueva.
  ///
  /// # Panics
  ///
  /// Si se llama fuera de un runtime de tokio, igual que `tokio::spawn`.
  /// `handle_hotkey` comprueba el runtime antes y no entra en pánico.
  pub fn spawn_run(&self) -> JoinHandle<RunOutcome> {
    self.spawn_on(&Handle::current())
  }

  fn spawn_on(&self, runtime: &Handle) -> JoinHandle<RunOutcome> {
    let store = self.store.clone();
    let workflow = self.workflow.clone();
    runtime.spawn(async move { workflow.run(&store).await })
  }

  /// Interpreta una combinación de teclas (`"ctrl+s"`, `"ctrl+r"`...).
  /// El atajo de ejecución siempre invoca el workflow; qué pasa si ya hay
  /// uno en curso lo decide su `OverlapPolicy`. Fuera de un runtime de tokio
  /// devuelve `HotkeyOutcome::NoRuntime` en lugar de lanzar la tarea.
  pub fn handle_hotkey(&self, combo: &str) -> HotkeyOutcome {
    match Hotkey::parse(combo) {
      Some(Hotkey::Save) => {
        if self.save() {
          HotkeyOutcome::Saved
        } else {
          HotkeyOutcome::AlreadySaved
        }
      }
      Some(Hotkey::Run) => match Handle::try_current() {
        Ok(runtime) => HotkeyOutcome::RunStarted(self.spawn_on(&runtime)),
        Err(e) => {
          log::warn!("atajo de ejecución sin runtime de tokio: {}", e);
          HotkeyOutcome::NoRuntime
        }
      },
      None => {
        log::debug!("combinación ignorada: '{}'", combo);
        HotkeyOutcome::Ignored
      }
    }
  }
}
