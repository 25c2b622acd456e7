// mode.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Superficie de edición activa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  #[default]
  Code,
  Visual,
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Mode::Code => "code",
      Mode::Visual => "visual",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for Mode {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "code" => Ok(Mode::Code),
      "visual" => Ok(Mode::Visual),
      other => Err(DomainError::ValidationError(format!("modo desconocido: {}", other))),
    }
  }
}

/// Máquina de estados del buffer de código.
///
/// `draft --run--> executing --ok--> saved`, `executing --fallo--> error`,
/// `saved|error --edición--> draft`, `draft --guardar--> saved`. No hay
/// estado terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
  #[default]
  Draft,
  Saved,
  Executing,
  Error,
}

impl CodeStatus {
  pub fn is_running(&self) -> bool {
    matches!(self, CodeStatus::Executing)
  }
}

impl fmt::Display for CodeStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      CodeStatus::Draft => "draft",
      CodeStatus::Saved => "saved",
      CodeStatus::Executing => "executing",
      CodeStatus::Error => "error",
    };
    write!(f, "{}", s)
  }
}
