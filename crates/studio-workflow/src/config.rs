// Configuración de la sesión leída del entorno (y de `.env` vía dotenvy).
use crate::errors::{Result, WorkflowError};
use crate::execution::OverlapPolicy;
use crate::runner::DEFAULT_EXECUTION_DELAY;
use std::time::Duration;
use studio_store::DEFAULT_SLOT;

/// Retardo por defecto antes de añadir la respuesta del asistente.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
  pub slot_name: String,
  pub execution_delay: Duration,
  pub overlap_policy: OverlapPolicy,
  pub reply_delay: Duration,
  /// `None` deja que la persistencia decida (`STUDIO_DB_URL`, `DATABASE_URL`
  /// o el fichero por defecto).
  pub db_url: Option<String>,
}

impl Default for StudioConfig {
  fn default() -> Self {
    Self { slot_name: DEFAULT_SLOT.to_string(),
           execution_delay: DEFAULT_EXECUTION_DELAY,
           overlap_policy: OverlapPolicy::default(),
           reply_delay: DEFAULT_REPLY_DELAY,
           db_url: None }
  }
}

impl StudioConfig {
  /// Lee `STUDIO_SLOT`, `STUDIO_EXEC_DELAY_MS`, `STUDIO_OVERLAP`,
  /// `STUDIO_REPLY_DELAY_MS` y `STUDIO_DB_URL`. Las variables ausentes
  /// toman el valor por defecto; las presentes pero inválidas son error.
  pub fn from_env() -> Result<Self> {
    dotenvy::dotenv().ok();
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Igual que `from_env` pero con una fuente de variables arbitraria.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let mut cfg = StudioConfig::default();
    if let Some(slot) = lookup("STUDIO_SLOT") {
      if slot.trim().is_empty() {
        return Err(WorkflowError::Config("STUDIO_SLOT no puede estar vacío".into()));
      }
      cfg.slot_name = slot.trim().to_string();
    }
    if let Some(ms) = lookup("STUDIO_EXEC_DELAY_MS") {
      cfg.execution_delay = parse_millis("STUDIO_EXEC_DELAY_MS", &ms)?;
    }
    if let Some(policy) = lookup("STUDIO_OVERLAP") {
      cfg.overlap_policy = policy.parse().map_err(WorkflowError::Config)?;
    }
    if let Some(ms) = lookup("STUDIO_REPLY_DELAY_MS") {
      cfg.reply_delay = parse_millis("STUDIO_REPLY_DELAY_MS", &ms)?;
    }
    cfg.db_url = lookup("STUDIO_DB_URL").filter(|u| !u.trim().is_empty());
    Ok(cfg)
  }
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration> {
  raw.trim()
     .parse::<u64>()
     .map(Duration::from_millis)
     .map_err(|e| WorkflowError::Config(format!("{}='{}' no es un número de milisegundos: {}", key, raw, e)))
}
