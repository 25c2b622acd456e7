//! Asistente de chat simulado: respuestas enlatadas por palabra clave, la
//! sesión de chat sobre el store y el troceado de bloques de código.
pub mod chat_session;
pub mod code_blocks;
pub mod errors;
pub mod responder;

pub use chat_session::{ChatExchange, ChatSession};
pub use code_blocks::{copy_block, split_code_blocks, Clipboard, CodeBlock, MemoryClipboard, Segment};
pub use errors::{AssistantError, Result};
pub use responder::{CannedReply, CannedResponder, CodeTemplate, ReplyTarget, ResponseStrategy, SUGGESTIONS};
