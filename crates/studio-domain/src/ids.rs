// ids.rs
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Fuente de ids para mensajes y logs. Debe devolver un valor distinto en
/// cada llamada durante toda la sesión, aunque las llamadas caigan en el
/// mismo milisegundo.
pub trait IdGenerator: Send + Sync {
  fn next_id(&self) -> String;
}

/// Contador atómico con prefijo: `msg-1`, `msg-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
  prefix: String,
  counter: AtomicU64,
}

impl SequentialIdGenerator {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self { prefix: prefix.into(), counter: AtomicU64::new(0) }
  }

  /// Arranca después de `start`; útil al rehidratar una sesión previa.
  pub fn starting_after(prefix: impl Into<String>, start: u64) -> Self {
    Self { prefix: prefix.into(), counter: AtomicU64::new(start) }
  }
}

impl Default for SequentialIdGenerator {
  fn default() -> Self {
    Self::new("id")
  }
}

impl IdGenerator for SequentialIdGenerator {
  fn next_id(&self) -> String {
    let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
    format!("{}-{}", self.prefix, n)
  }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
  fn next_id(&self) -> String {
    Uuid::new_v4().to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn sequential_ids_never_repeat() {
    let g = SequentialIdGenerator::new("msg");
    let ids: HashSet<String> = (0..1000).map(|_| g.next_id()).collect();
    assert_eq!(ids.len(), 1000);
    assert!(ids.contains("msg-1"));
  }

  #[test]
  fn starting_after_skips_used_range() {
    let g = SequentialIdGenerator::starting_after("log", 41);
    assert_eq!(g.next_id(), "log-42");
  }
}
