//! Safety assistant for PPE Marts.
//!
//! Answers visitor questions through a chat-completion service when one is
//! configured, falls back to canned keyword replies otherwise, and picks
//! catalog products to recommend alongside the answer.

pub mod completion;
pub mod error;
pub mod fallback;
pub mod prompt;
pub mod recommend;
pub mod responder;

pub use completion::{CompletionMessage, CompletionRole, CompletionService, OpenAiClient};
pub use error::ChatError;
pub use fallback::FallbackResponder;
pub use recommend::Recommender;
pub use responder::ConversationResponder;
