// Archivo: errors.rs
// Propósito: errores del store y de los repositorios de slots, y el alias
// Result<T> usado por las APIs del crate.
use thiserror::Error;
/// Errores del contenedor de estado y de su persistencia.
///
/// Los mutadores del store nunca fallan; estos errores sólo aparecen al
/// abrir el store o al hablar directamente con un `StateRepository`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error del almacenamiento subyacente (SQLite, fichero, etc.).
    #[error("Error de almacenamiento: {0}")]
    Storage(String),
    /// El snapshot no se pudo serializar o leer.
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}
/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, StoreError>;
