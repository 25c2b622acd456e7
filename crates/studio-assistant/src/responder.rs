// Archivo: responder.rs
// Propósito: respuestas enlatadas del asistente. Es una función pura de
// (entrada, modo, destino); no hay inferencia real detrás.
use studio_domain::Mode;

const PYTHON_CODE: &str = include_str!("../templates/python_code.txt");
const REACT_COMPONENT: &str = include_str!("../templates/react_component.txt");
const FUNCTION_CODE: &str = include_str!("../templates/function.txt");
const API_FETCH: &str = include_str!("../templates/api_fetch.txt");
const GENERIC_CODE: &str = include_str!("../templates/generic_code.txt");
const CHAT_CODE_MODE: &str = include_str!("../templates/chat_code_mode.txt");
const CHAT_VISUAL_MODE: &str = include_str!("../templates/chat_visual_mode.txt");

/// Dónde aplica la respuesta: en el editor (sustituye el buffer), sólo en
/// el chat, o en ambos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTarget {
  Editor,
  Chat,
  Both,
}

impl ReplyTarget {
  /// Destino de un mensaje escrito a mano: en modo código se genera código
  /// para el editor, en modo visual sólo se contesta en el chat.
  pub fn for_mode(mode: Mode) -> Self {
    match mode {
      Mode::Code => ReplyTarget::Editor,
      Mode::Visual => ReplyTarget::Chat,
    }
  }

  pub fn writes_editor(&self) -> bool {
    matches!(self, ReplyTarget::Editor | ReplyTarget::Both)
  }
}

/// Plantilla de código elegida para un prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTemplate {
  Python,
  ReactComponent,
  Function,
  ApiFetch,
  Generic,
}

/// Palabras clave por orden de prioridad; gana la primera regla con alguna
/// coincidencia.
const CODE_RULES: &[(&[&str], CodeTemplate)] = &[(&["python", "py"], CodeTemplate::Python),
                                                 (&["react component"], CodeTemplate::ReactComponent),
                                                 (&["function", "calculate"], CodeTemplate::Function),
                                                 (&["api", "fetch"], CodeTemplate::ApiFetch)];

impl CodeTemplate {
  /// Elige plantilla por subcadena sin distinguir mayúsculas.
  pub fn select(prompt: &str) -> CodeTemplate {
    let lower = prompt.to_lowercase();
    CODE_RULES.iter()
              .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
              .map(|(_, template)| *template)
              .unwrap_or(CodeTemplate::Generic)
  }

  pub fn render(&self, prompt: &str) -> String {
    match self {
      CodeTemplate::Python => PYTHON_CODE.to_string(),
      CodeTemplate::ReactComponent => REACT_COMPONENT.to_string(),
      CodeTemplate::Function => FUNCTION_CODE.to_string(),
      CodeTemplate::ApiFetch => API_FETCH.to_string(),
      CodeTemplate::Generic => GENERIC_CODE.replacen("{prompt}", prompt, 1),
    }
  }
}

/// Respuesta lista para el chat, con código opcional para el editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedReply {
  pub message: String,
  pub code: Option<String>,
}

/// Estrategia intercambiable de respuestas del asistente.
pub trait ResponseStrategy: Send + Sync {
  fn reply(&self, input: &str, mode: Mode, target: ReplyTarget) -> CannedReply;
}

/// Respuestas deterministas por palabra clave.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedResponder;

impl CannedResponder {
  pub fn new() -> Self {
    CannedResponder
  }

  pub fn generate_code(&self, prompt: &str) -> String {
    CodeTemplate::select(prompt).render(prompt)
  }

  pub fn chat_response(&self, input: &str, mode: Mode) -> String {
    let template = match mode {
      Mode::Code => CHAT_CODE_MODE,
      Mode::Visual => CHAT_VISUAL_MODE,
    };
    template.replacen("{input}", input, 1)
  }

  fn editor_ack(input: &str) -> String {
    format!("I've generated code based on your request and updated the editor. The code includes:\n\n{}\n\nYou can now \
             run or modify it as needed!",
            input)
  }
}

impl ResponseStrategy for CannedResponder {
  fn reply(&self, input: &str, mode: Mode, target: ReplyTarget) -> CannedReply {
    if target.writes_editor() {
      CannedReply { message: Self::editor_ack(input), code: Some(self.generate_code(input)) }
    } else {
      CannedReply { message: self.chat_response(input, mode), code: None }
    }
  }
}

/// Sugerencias rápidas que ofrece el chat vacío.
pub const SUGGESTIONS: &[(&str, ReplyTarget)] = &[("Create a data processing pipeline for CSV files", ReplyTarget::Editor),
                                                  ("Show me different sorting algorithms", ReplyTarget::Chat),
                                                  ("Build a REST API with authentication", ReplyTarget::Both),
                                                  ("Write documentation for this code", ReplyTarget::Chat),
                                                  ("Optimize performance of this function", ReplyTarget::Editor),
                                                  ("Find and fix bugs in this code", ReplyTarget::Both)];
