// Archivo: code_blocks.rs
// Propósito: partir el texto de un mensaje en tramos de texto y bloques
// de código delimitados por ```, y copiar bloques al portapapeles.
use crate::errors::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Bloque de código de un mensaje.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
  /// Etiqueta tras las comillas de apertura; vacía si no hay.
  pub language: String,
  pub code: String,
}

impl CodeBlock {
  /// Etiqueta a mostrar: el lenguaje o `code` si no se indicó.
  pub fn label(&self) -> &str {
    if self.language.is_empty() {
      "code"
    } else {
      &self.language
    }
  }

  pub fn line_count(&self) -> usize {
    studio_domain::line_count(&self.code)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  Text(String),
  Code(CodeBlock),
}

/// Parte `text` en tramos. Un bloque sin cierre queda como texto.
pub fn split_code_blocks(text: &str) -> Vec<Segment> {
  let mut out = Vec::new();
  let mut last = 0;
  for m in FENCE.find_iter(text) {
    if m.start() > last {
      out.push(Segment::Text(text[last..m.start()].to_string()));
    }
    out.push(Segment::Code(parse_block(m.as_str())));
    last = m.end();
  }
  if last < text.len() {
    out.push(Segment::Text(text[last..].to_string()));
  }
  out
}

// La primera línea lleva el lenguaje y la última el cierre.
fn parse_block(fenced: &str) -> CodeBlock {
  let lines: Vec<&str> = fenced.split('\n').collect();
  let language = lines[0].replace("```", "").trim().to_string();
  let code = if lines.len() > 2 { lines[1..lines.len() - 1].join("\n") } else { String::new() };
  CodeBlock { language, code }
}

/// Destino de las copias de bloques de código.
pub trait Clipboard {
  fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Portapapeles en memoria; guarda la última copia.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
  pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
  fn write_text(&mut self, text: &str) -> Result<()> {
    self.contents = Some(text.to_string());
    Ok(())
  }
}

/// Copia el bloque. Un fallo sólo se registra; devuelve si la copia se hizo.
pub fn copy_block(clipboard: &mut dyn Clipboard, block: &CodeBlock) -> bool {
  match clipboard.write_text(&block.code) {
    Ok(()) => true,
    Err(e) => {
      log::error!("no se pudo copiar el bloque {}: {}", block.label(), e);
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::AssistantError;

  struct BrokenClipboard;

  impl Clipboard for BrokenClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
      Err(AssistantError::Clipboard("denied".into()))
    }
  }

  #[test]
  fn splits_text_and_blocks() {
    let segs = split_code_blocks("Mira:\n```python\nprint(1)\nprint(2)\n```\nFin");
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0], Segment::Text("Mira:\n".into()));
    match &segs[1] {
      Segment::Code(b) => {
        assert_eq!(b.language, "python");
        assert_eq!(b.code, "print(1)\nprint(2)");
        assert_eq!(b.line_count(), 2);
      }
      other => panic!("esperaba código, obtuve {:?}", other),
    }
    assert_eq!(segs[2], Segment::Text("\nFin".into()));
  }

  #[test]
  fn unlabeled_and_unterminated_blocks() {
    let segs = split_code_blocks("```\nx\n```");
    assert_eq!(segs, vec![Segment::Code(CodeBlock { language: String::new(), code: "x".into() })]);
    if let Segment::Code(b) = &segs[0] {
      assert_eq!(b.label(), "code");
    }
    let open = split_code_blocks("```rust\nsin cierre");
    assert_eq!(open, vec![Segment::Text("```rust\nsin cierre".into())]);
    assert!(split_code_blocks("").is_empty());
  }

  #[test]
  fn copy_failures_are_swallowed() {
    let block = CodeBlock { language: "js".into(), code: "1".into() };
    assert!(!copy_block(&mut BrokenClipboard, &block));
    let mut mem = MemoryClipboard::default();
    assert!(copy_block(&mut mem, &block));
    assert_eq!(mem.contents.as_deref(), Some("1"));
  }
}
