use crate::errors::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Retardo por defecto de la ejecución simulada.
pub const DEFAULT_EXECUTION_DELAY: Duration = Duration::from_millis(2000);

/// Resultado de una ejecución terminada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
  /// Líneas del buffer tal como estaba al empezar la ejecución.
  pub lines: usize,
}

/// Ejecutor de código. El workflow sólo conoce este trait, de modo que la
/// ejecución simulada puede sustituirse (por ejemplo en pruebas que
/// inyectan fallos).
#[async_trait]
pub trait CodeRunner: Send + Sync {
  /// Nombre corto para logs.
  fn name(&self) -> &str;

  /// Ejecuta `code` y devuelve el informe, o `WorkflowError::Execution`.
  async fn run(&self, code: &str, language: &str) -> Result<RunReport>;
}

/// Runner sin ejecución real: espera un retardo fijo y cuenta líneas.
#[derive(Debug, Clone)]
pub struct SimulatedRunner {
  delay: Duration,
}

impl SimulatedRunner {
  pub fn new(delay: Duration) -> Self {
    Self { delay }
  }

  pub fn delay(&self) -> Duration {
    self.delay
  }
}

impl Default for SimulatedRunner {
  fn default() -> Self {
    Self::new(DEFAULT_EXECUTION_DELAY)
  }
}

#[async_trait]
impl CodeRunner for SimulatedRunner {
  fn name(&self) -> &str {
    "simulated"
  }

  async fn run(&self, code: &str, language: &str) -> Result<RunReport> {
    log::debug!("ejecución simulada de {} bytes ({}), retardo {:?}", code.len(), language, self.delay);
    tokio::time::sleep(self.delay).await;
    Ok(RunReport { lines: studio_domain::line_count(code) })
  }
}
