// clock.rs
use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Mutex;

/// Reloj usado por el store para sellar mensajes y logs.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Reloj de pared con precisión de milisegundos que nunca retrocede: si el
/// sistema devuelve un instante anterior al último entregado, se repite el
/// último.
#[derive(Debug, Default)]
pub struct MonotonicClock {
  last: Mutex<Option<DateTime<Utc>>>,
}

impl MonotonicClock {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Clock for MonotonicClock {
  fn now(&self) -> DateTime<Utc> {
    let now = Utc::now().trunc_subsecs(3);
    let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
    let stamped = match *last {
      Some(prev) if prev > now => prev,
      _ => now,
    };
    *last = Some(stamped);
    stamped
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn timestamps_are_non_decreasing_and_millisecond_precise() {
    let clock = MonotonicClock::new();
    let mut prev = clock.now();
    for _ in 0..500 {
      let t = clock.now();
      assert!(t >= prev);
      assert_eq!(t.timestamp_subsec_nanos() % 1_000_000, 0);
      prev = t;
    }
  }
}
