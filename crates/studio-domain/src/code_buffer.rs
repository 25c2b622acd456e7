// code_buffer.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Contenido inicial del editor en una sesión nueva.
pub const DEFAULT_CODE: &str = r#"// Welcome to your AI-powered code editor!
// Switch between Code and Visual modes to build amazing applications

function greetUser(name) {
  console.log(`Hello, ${name}! Welcome to the future of coding.`);
  
  // AI can help you write better code
  const skills = ['JavaScript', 'React', 'AI Integration'];
  
  return {
    message: `Ready to build something amazing?`,
    skills,
    ready: true
  };
}

// Try asking the AI assistant for help!
const user = greetUser('Developer');
console.log(user);"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBuffer {
  pub text: String,
  pub language: String,
}

impl CodeBuffer {
  pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
    Self { text: text.into(), language: language.into() }
  }

  pub fn line_count(&self) -> usize {
    line_count(&self.text)
  }
}

impl Default for CodeBuffer {
  fn default() -> Self {
    Self::new(DEFAULT_CODE, DEFAULT_LANGUAGE)
  }
}

/// Número de líneas contando los trozos separados por `\n`; un texto vacío
/// cuenta como una línea.
pub fn line_count(text: &str) -> usize {
  text.split('\n').count()
}
