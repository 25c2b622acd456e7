use thiserror::Error;

/// Errores del asistente. Ninguno llega al usuario: el chat los registra
/// y sigue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
  /// No se pudo escribir en el portapapeles.
  #[error("Error de portapapeles: {0}")]
  Clipboard(String),
}

pub type Result<T> = std::result::Result<T, AssistantError>;
