// chat.rs
use crate::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
  User,
  Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageContext {
  Code,
  Visual,
  General,
}

impl From<Mode> for MessageContext {
  fn from(mode: Mode) -> Self {
    match mode {
      Mode::Code => MessageContext::Code,
      Mode::Visual => MessageContext::Visual,
    }
  }
}

/// Mensaje del chat tal como lo guarda el store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub id: String,
  #[serde(rename = "type")]
  pub role: ChatRole,
  pub content: String,
  pub timestamp: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub context: Option<MessageContext>,
}

/// Mensaje sin id ni timestamp; el store completa ambos al insertarlo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
  pub role: ChatRole,
  pub content: String,
  pub context: Option<MessageContext>,
}

impl MessageDraft {
  pub fn user(content: impl Into<String>) -> Self {
    Self { role: ChatRole::User, content: content.into(), context: None }
  }

  pub fn ai(content: impl Into<String>) -> Self {
    Self { role: ChatRole::Ai, content: content.into(), context: None }
  }

  pub fn with_context(mut self, context: MessageContext) -> Self {
    self.context = Some(context);
    self
  }

  pub fn into_message(self, id: String, timestamp: DateTime<Utc>) -> ChatMessage {
    ChatMessage { id, role: self.role, content: self.content, timestamp, context: self.context }
  }
}
