// preferences.rs
use serde::{Deserialize, Serialize};

/// Tamaños de fuente ofrecidos por el diálogo de ajustes (pt).
pub const FONT_SIZE_OPTIONS: [u32; 4] = [12, 14, 16, 18];
/// Tamaños de tabulación ofrecidos por el diálogo de ajustes (espacios).
pub const TAB_SIZE_OPTIONS: [u32; 3] = [2, 4, 8];

/// Preferencias del editor. Configuración pura: cada campo se cambia por
/// separado y no hay invariantes entre campos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorPreferences {
  pub font_size: u32,
  pub tab_size: u32,
  pub show_line_numbers: bool,
  pub show_minimap: bool,
  pub word_wrap: bool,
  pub code_completion: bool,
}

impl Default for EditorPreferences {
  fn default() -> Self {
    EditorPreferences { font_size: 14,
                        tab_size: 4,
                        show_line_numbers: true,
                        show_minimap: true,
                        word_wrap: false,
                        code_completion: true }
  }
}
