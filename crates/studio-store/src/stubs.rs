// Archivo: stubs.rs
// Propósito: implementación en memoria del slot para pruebas y wiring
// rápido. No es durable.
use crate::errors::{Result, StoreError};
use crate::repository::StateRepository;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Repositorio de slots en memoria.
///
/// Lleva además la cuenta de escrituras para que las pruebas puedan
/// comprobar cuándo el store persiste.
#[derive(Debug, Default)]
pub struct InMemoryStateRepository {
    slots: Mutex<HashMap<String, String>>,
    writes: Mutex<u64>,
}

impl InMemoryStateRepository {
    /// Crea un nuevo repositorio vacío.
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de `save_slot` atendidos desde la creación.
    pub fn write_count(&self) -> u64 {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Helper para mapear `Mutex::lock()` en un `Result` con
    /// `StoreError::Storage`.
    fn lock<'a, T>(&'a self, m: &'a Mutex<T>) -> std::result::Result<MutexGuard<'a, T>, StoreError> {
        m.lock().map_err(|e| StoreError::Storage(format!("mutex poisoned: {:?}", e)))
    }
}

impl StateRepository for InMemoryStateRepository {
    fn load_slot(&self, name: &str) -> Result<Option<String>> {
        Ok(self.lock(&self.slots)?.get(name).cloned())
    }

    fn save_slot(&self, name: &str, payload: &str) -> Result<()> {
        self.lock(&self.slots)?.insert(name.to_string(), payload.to_string());
        *self.lock(&self.writes)? += 1;
        Ok(())
    }

    fn delete_slot(&self, name: &str) -> Result<()> {
        self.lock(&self.slots)?.remove(name);
        Ok(())
    }
}
