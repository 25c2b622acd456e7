use std::fmt;
use std::str::FromStr;

/// Atajos globales del estudio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hotkey {
  /// `ctrl+s`: marca el buffer como guardado.
  Save,
  /// `ctrl+r`: lanza la ejecución.
  Run,
}

impl Hotkey {
  /// Interpreta una combinación como `"ctrl+s"`. Acepta `cmd+` y `meta+`
  /// como alias de `ctrl+` y no distingue mayúsculas.
  pub fn parse(combo: &str) -> Option<Hotkey> {
    let combo = combo.trim().to_lowercase();
    let key = ["ctrl+", "cmd+", "meta+"].iter().find_map(|m| combo.strip_prefix(m))?;
    match key {
      "s" => Some(Hotkey::Save),
      "r" => Some(Hotkey::Run),
      _ => None,
    }
  }

  /// Construye la combinación a partir de un evento de teclado, igual que
  /// el listener global: cualquier modificador ctrl/meta se normaliza a
  /// `ctrl+`.
  pub fn from_key_event(ctrl: bool, meta: bool, key: &str) -> Option<Hotkey> {
    let combo = format!("{}{}", if ctrl || meta { "ctrl+" } else { "" }, key.to_lowercase());
    Hotkey::parse(&combo)
  }

  pub fn combo(&self) -> &'static str {
    match self {
      Hotkey::Save => "ctrl+s",
      Hotkey::Run => "ctrl+r",
    }
  }
}

impl fmt::Display for Hotkey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.combo())
  }
}

impl FromStr for Hotkey {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Hotkey::parse(s).ok_or_else(|| format!("atajo no reconocido: '{}'", s))
  }
}
