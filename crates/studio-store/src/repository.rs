// Archivo: repository.rs
// Propósito: definir el trait `StateRepository`, el contrato del slot
// durable donde el store vuelca su snapshot (in-memory, SQLite, etc.).
use crate::errors::Result;

/// Slot durable local con nombre.
///
/// Cada slot guarda un único payload textual (el snapshot serializado). Las
/// escrituras reemplazan el contenido completo.
pub trait StateRepository: Send + Sync {
    /// Lee el payload del slot. `Ok(None)` si el slot nunca se escribió.
    fn load_slot(&self, name: &str) -> Result<Option<String>>;

    /// Escribe (o reemplaza) el payload del slot.
    fn save_slot(&self, name: &str, payload: &str) -> Result<()>;

    /// Borra el slot. Borrar un slot inexistente no es un error.
    fn delete_slot(&self, name: &str) -> Result<()>;
}
