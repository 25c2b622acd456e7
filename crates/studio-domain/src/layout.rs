// layout.rs
use serde::{Deserialize, Serialize};

pub const LOGS_MIN_HEIGHT: f64 = 100.0;
pub const LOGS_MAX_HEIGHT: f64 = 400.0;
pub const CHAT_MIN_WIDTH: f64 = 240.0;
pub const CHAT_MAX_WIDTH: f64 = 600.0;

/// Visibilidad y tamaño de los paneles laterales. El store acepta cualquier
/// valor; el recorte a rangos usables lo hace quien redimensiona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelLayout {
  pub logs_open: bool,
  pub chat_open: bool,
  pub logs_panel_height: f64,
  pub chat_panel_width: f64,
}

impl Default for PanelLayout {
  fn default() -> Self {
    PanelLayout { logs_open: false, chat_open: true, logs_panel_height: 200.0, chat_panel_width: 320.0 }
  }
}

/// Altura del panel de logs recortada a [100, 400] px.
pub fn clamp_logs_height(px: f64) -> f64 {
  px.clamp(LOGS_MIN_HEIGHT, LOGS_MAX_HEIGHT)
}

/// Ancho del panel de chat recortado a [240, min(30% del viewport, 600)] px.
/// Con viewports muy estrechos el mínimo gana.
pub fn clamp_chat_width(px: f64, viewport_width: f64) -> f64 {
  let max = (viewport_width * 0.3).min(CHAT_MAX_WIDTH);
  CHAT_MIN_WIDTH.max(max.min(px))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn logs_height_is_clamped() {
    assert_eq!(clamp_logs_height(50.0), 100.0);
    assert_eq!(clamp_logs_height(250.0), 250.0);
    assert_eq!(clamp_logs_height(900.0), 400.0);
  }

  #[test]
  fn chat_width_respects_viewport() {
    assert_eq!(clamp_chat_width(1000.0, 3000.0), 600.0);
    assert_eq!(clamp_chat_width(500.0, 1000.0), 300.0);
    assert_eq!(clamp_chat_width(100.0, 1000.0), 240.0);
    // viewport tiny: max < min, min wins
    assert_eq!(clamp_chat_width(500.0, 400.0), 240.0);
  }
}
