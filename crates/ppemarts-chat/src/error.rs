//! Error types for the safety assistant.

use ppemarts_core::error::PpeError;

/// Errors from the assistant.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message is required")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("completion service error: {0}")]
    Completion(String),
}

impl ChatError {
    /// Whether the caller sent something the assistant will not process.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChatError::EmptyMessage | ChatError::MessageTooLong(_))
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Completion(format!("request timed out: {}", err))
        } else {
            ChatError::Completion(err.to_string())
        }
    }
}

impl From<ChatError> for PpeError {
    fn from(err: ChatError) -> Self {
        if err.is_invalid_input() {
            PpeError::InvalidInput(err.to_string())
        } else {
            PpeError::Api(err.to_string())
        }
    }
}
