use crate::runner::{CodeRunner, SimulatedRunner};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use studio_domain::{CodeStatus, LogLevel};
use studio_store::AppStore;

pub const MSG_STARTING: &str = "Starting code execution...";
pub const MSG_SUCCESS: &str = "Code executed successfully!";
pub const MSG_ALREADY_RUNNING: &str = "Execution already in progress";

/// Qué hacer con una ejecución que llega mientras otra está en curso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
  /// Se descarta con un log de aviso; el estado no se toca.
  #[default]
  Reject,
  /// Ambas corren intercaladas; cada una escribe sus logs y su estado final.
  Allow,
}

impl FromStr for OverlapPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "reject" => Ok(OverlapPolicy::Reject),
      "allow" => Ok(OverlapPolicy::Allow),
      other => Err(format!("política de solapamiento desconocida: '{}'", other)),
    }
  }
}

/// Cómo terminó una invocación del workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
  Completed { lines: usize },
  Failed(String),
  Rejected,
}

/// Workflow de ejecución simulada.
///
/// Transiciones que produce sobre el store:
/// `Executing` + logs abiertos + log info, espera al runner y después
/// `Saved` con log de éxito y recuento de líneas, o `Error` con log de error.
/// Los fallos del runner nunca se propagan al llamador.
#[derive(Clone)]
pub struct ExecutionWorkflow {
  runner: Arc<dyn CodeRunner>,
  policy: OverlapPolicy,
  in_flight: Arc<AtomicBool>,
}

/// Libera la marca de ejecución en curso al salir del scope, también si la
/// tarea se cancela a mitad.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    self.0.store(false, Ordering::Release);
  }
}

impl ExecutionWorkflow {
  pub fn new(runner: Arc<dyn CodeRunner>, policy: OverlapPolicy) -> Self {
    Self { runner, policy, in_flight: Arc::new(AtomicBool::new(false)) }
  }

  pub fn policy(&self) -> OverlapPolicy {
    self.policy
  }

  /// Hay una ejecución en curso (sólo se registra con `Reject`).
  pub fn is_running(&self) -> bool {
    self.in_flight.load(Ordering::Acquire)
  }

  pub async fn run(&self, store: &AppStore) -> RunOutcome {
    let _guard = match self.policy {
      OverlapPolicy::Reject => {
        if self.in_flight.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
          log::warn!("ejecución descartada: ya hay una en curso");
          store.add_log(LogLevel::Warning, MSG_ALREADY_RUNNING);
          return RunOutcome::Rejected;
        }
        Some(InFlight(&self.in_flight))
      }
      OverlapPolicy::Allow => None,
    };

    // El recuento de líneas usa el buffer tal como está ahora.
    let code = store.code();
    let language = store.language();
    store.set_code_status(CodeStatus::Executing);
    store.set_logs_open(true);
    store.add_log(LogLevel::Info, MSG_STARTING);

    match self.runner.run(&code, &language).await {
      Ok(report) => {
        store.add_log(LogLevel::Success, MSG_SUCCESS);
        store.add_log(LogLevel::Info, format!("Output: {} lines processed", report.lines));
        // Termina en `Saved` aunque el buffer se editara durante la espera.
        store.set_code_status(CodeStatus::Saved);
        log::info!("ejecución '{}' terminada: {} líneas", self.runner.name(), report.lines);
        RunOutcome::Completed { lines: report.lines }
      }
      Err(e) => {
        let reason = e.to_string();
        store.add_log(LogLevel::Error, format!("Execution failed: {}", reason));
        store.set_code_status(CodeStatus::Error);
        log::error!("ejecución '{}' fallida: {}", self.runner.name(), reason);
        RunOutcome::Failed(reason)
      }
    }
  }
}

impl Default for ExecutionWorkflow {
  fn default() -> Self {
    Self::new(Arc::new(SimulatedRunner::default()), OverlapPolicy::default())
  }
}
