use thiserror::Error;

// Errores comunes del workflow de ejecución y de la sesión.
//
// Este enum centraliza los errores que pueden aparecer al preparar una
// sesión: errores del store o de su slot durable (`StoreError`),
// configuración inválida y fallos del runner.
#[derive(Error, Debug)]
pub enum WorkflowError {
  /// Errores originados por el store o su repositorio de slots.
  #[error("Error de store: {0}")]
  Store(#[from] studio_store::StoreError),

  /// Variable de entorno o valor de configuración inválido.
  #[error("Error de configuración: {0}")]
  Config(String),

  /// Fallo reportado por un `CodeRunner`. El workflow lo convierte en un
  /// log de error y nunca lo devuelve al llamador.
  #[error("{0}")]
  Execution(String),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
