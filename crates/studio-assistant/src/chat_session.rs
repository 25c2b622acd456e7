// Archivo: chat_session.rs
// Propósito: conversación con el asistente sobre el store compartido.
use crate::responder::{CannedResponder, ReplyTarget, ResponseStrategy};
use std::sync::Arc;
use std::time::Duration;
use studio_domain::{MessageContext, MessageDraft};
use studio_store::AppStore;

/// Ids de un intercambio pregunta/respuesta ya añadido al store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
  pub user_id: String,
  pub reply_id: String,
  /// La respuesta reemplazó el buffer del editor.
  pub code_updated: bool,
}

/// Chat del estudio.
///
/// Cada envío añade el mensaje del usuario con el contexto del modo
/// activo, aplica el código generado al editor si el destino lo pide,
/// espera `reply_delay` y añade la respuesta del asistente.
pub struct ChatSession {
  store: Arc<AppStore>,
  strategy: Arc<dyn ResponseStrategy>,
  reply_delay: Duration,
}

impl ChatSession {
  pub fn new(store: Arc<AppStore>, reply_delay: Duration) -> Self {
    Self::with_strategy(store, Arc::new(CannedResponder::new()), reply_delay)
  }

  pub fn with_strategy(store: Arc<AppStore>, strategy: Arc<dyn ResponseStrategy>, reply_delay: Duration) -> Self {
    Self { store, strategy, reply_delay }
  }

  /// Envía texto libre. El destino depende del modo (código → editor,
  /// visual → chat). Una entrada en blanco no hace nada.
  pub async fn send(&self, input: &str) -> Option<ChatExchange> {
    if input.trim().is_empty() {
      return None;
    }
    let target = ReplyTarget::for_mode(self.store.mode());
    Some(self.exchange(input, target).await)
  }

  /// Envía una de las sugerencias rápidas con su destino fijo.
  pub async fn suggest(&self, prompt: &str, target: ReplyTarget) -> ChatExchange {
    self.exchange(prompt, target).await
  }

  async fn exchange(&self, input: &str, target: ReplyTarget) -> ChatExchange {
    let mode = self.store.mode();
    let context = MessageContext::from(mode);
    let user_id = self.store.add_message(MessageDraft::user(input).with_context(context), None);

    let reply = self.strategy.reply(input, mode, target);
    let code_updated = match reply.code {
      Some(code) => {
        self.store.set_code(code);
        true
      }
      None => false,
    };

    tokio::time::sleep(self.reply_delay).await;
    let reply_id = self.store.add_message(MessageDraft::ai(reply.message).with_context(context), None);
    log::debug!("respuesta {} añadida ({:?}, editor actualizado: {})", reply_id, target, code_updated);
    ChatExchange { user_id, reply_id, code_updated }
  }
}
