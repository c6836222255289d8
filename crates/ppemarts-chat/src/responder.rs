//! Conversation responder: completion service first, canned reply second.

use std::sync::Arc;

use tracing::{debug, warn};

use ppemarts_core::config::AssistantConfig;
use ppemarts_core::ConversationTurn;

use crate::completion::{CompletionMessage, CompletionService};
use crate::error::ChatError;
use crate::fallback::FallbackResponder;
use crate::prompt::SYSTEM_PROMPT;

/// Produces the assistant's reply for one request.
///
/// Holds no per-conversation state; history arrives with each call.
pub struct ConversationResponder {
    completion: Option<Arc<dyn CompletionService>>,
    fallback: FallbackResponder,
    max_message_length: Option<usize>,
    max_history_turns: Option<usize>,
}

impl ConversationResponder {
    /// Responder that only uses canned replies.
    pub fn fallback_only(config: &AssistantConfig) -> Self {
        Self {
            completion: None,
            fallback: FallbackResponder::new(),
            max_message_length: config.max_message_length,
            max_history_turns: config.max_history_turns,
        }
    }

    /// Responder that asks `completion` first.
    pub fn with_completion(config: &AssistantConfig, completion: Arc<dyn CompletionService>) -> Self {
        Self {
            completion: Some(completion),
            ..Self::fallback_only(config)
        }
    }

    /// Whether a completion service is configured.
    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    /// Reject messages the assistant will not process.
    pub fn validate(&self, message: &str) -> Result<(), ChatError> {
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if let Some(max) = self.max_message_length {
            if message.chars().count() > max {
                return Err(ChatError::MessageTooLong(max));
            }
        }
        Ok(())
    }

    /// System instruction, then history oldest first, then `message`.
    ///
    /// Every turn is forwarded unless `max_history_turns` is configured, in
    /// which case only the most recent ones are kept.
    pub fn build_messages(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Vec<CompletionMessage> {
        let skip = self
            .max_history_turns
            .map_or(0, |max| history.len().saturating_sub(max));
        let mut messages = Vec::with_capacity(history.len() - skip + 2);
        messages.push(CompletionMessage::system(SYSTEM_PROMPT));
        for turn in &history[skip..] {
            messages.push(if turn.is_user() {
                CompletionMessage::user(turn.text.clone())
            } else {
                CompletionMessage::assistant(turn.text.clone())
            });
        }
        messages.push(CompletionMessage::user(message));
        messages
    }

    /// Reply to `message`.
    ///
    /// Fails only on invalid input. Completion errors are logged and
    /// answered from the canned table.
    pub async fn respond(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> Result<String, ChatError> {
        self.validate(message)?;

        if let Some(ref completion) = self.completion {
            let messages = self.build_messages(message, history);
            match completion.complete(&messages).await {
                Ok(text) => {
                    debug!(chars = text.len(), "Completion service answered");
                    return Ok(text);
                }
                Err(e) => {
                    warn!(error = %e, "Completion service failed, using fallback reply");
                }
            }
        }

        let reply = self.fallback.reply(message);
        debug!(keyword = ?self.fallback.matched_keyword(message), "Fallback reply selected");
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionRole;
    use crate::fallback::DEFAULT_REPLY;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Completion stub that records the messages it was given.
    struct StubCompletion {
        reply: Result<String, String>,
        seen: Mutex<Vec<Vec<CompletionMessage>>>,
    }

    impl StubCompletion {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(reason: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(reason.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionService for StubCompletion {
        async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ChatError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            self.reply.clone().map_err(ChatError::Completion)
        }
    }

    fn config() -> AssistantConfig {
        AssistantConfig::default()
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let responder = ConversationResponder::fallback_only(&config());
        let err = responder.respond("", &[]).await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyMessage));
    }

    #[tokio::test]
    async fn test_empty_message_rejected_before_completion_call() {
        let stub = StubCompletion::ok("never");
        let responder = ConversationResponder::with_completion(&config(), stub.clone());
        assert!(responder.respond("", &[]).await.is_err());
        assert!(stub.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_long_message_answered_by_default() {
        let responder = ConversationResponder::fallback_only(&config());
        let message = format!("{} gloves", "x".repeat(2100));
        let reply = responder.respond(&message, &[]).await.unwrap();
        assert!(reply.starts_with("Select gloves based on hazard"));
    }

    #[tokio::test]
    async fn test_configured_message_length_enforced() {
        let cfg = AssistantConfig {
            max_message_length: Some(10),
            ..config()
        };
        let responder = ConversationResponder::fallback_only(&cfg);
        assert!(responder.respond("0123456789", &[]).await.is_ok());
        let err = responder.respond("0123456789a", &[]).await.unwrap_err();
        assert!(matches!(err, ChatError::MessageTooLong(10)));
    }

    #[tokio::test]
    async fn test_fallback_without_completion() {
        let responder = ConversationResponder::fallback_only(&config());
        assert!(!responder.has_completion());
        let reply = responder.respond("Tell me about OSHA rules", &[]).await.unwrap();
        assert!(reply.starts_with("Key OSHA PPE standards"));

        let reply = responder.respond("good morning", &[]).await.unwrap();
        assert_eq!(reply, DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn test_completion_text_returned_verbatim() {
        let stub = StubCompletion::ok("  Wear an N95.\n");
        let responder = ConversationResponder::with_completion(&config(), stub);
        assert!(responder.has_completion());
        let reply = responder.respond("mask advice", &[]).await.unwrap();
        assert_eq!(reply, "  Wear an N95.\n");
    }

    #[tokio::test]
    async fn test_completion_failure_falls_back() {
        let stub = StubCompletion::failing("quota exceeded");
        let responder = ConversationResponder::with_completion(&config(), stub.clone());
        let reply = responder.respond("harness sizing", &[]).await.unwrap();
        assert!(reply.starts_with("Harness features"));
        assert_eq!(stub.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_message_list_order_and_roles() {
        let stub = StubCompletion::ok("ok");
        let responder = ConversationResponder::with_completion(&config(), stub.clone());
        let history = vec![
            ConversationTurn::user("hi"),
            ConversationTurn::assistant("hello!"),
            ConversationTurn {
                sender: "system".to_string(),
                text: "odd sender".to_string(),
            },
        ];
        responder.respond("which gloves?", &history).await.unwrap();

        let seen = stub.seen.lock().unwrap();
        let messages = &seen[0];
        let roles: Vec<CompletionRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                CompletionRole::System,
                CompletionRole::User,
                CompletionRole::Assistant,
                CompletionRole::Assistant,
                CompletionRole::User,
            ]
        );
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].content, "hi");
        assert_eq!(messages[4].content, "which gloves?");
    }

    #[test]
    fn test_build_messages_forwards_whole_history_by_default() {
        let responder = ConversationResponder::fallback_only(&config());
        let history: Vec<ConversationTurn> = (0..50)
            .map(|i| ConversationTurn::user(format!("turn {}", i)))
            .collect();
        let messages = responder.build_messages("now", &history);
        assert_eq!(messages.len(), 52);
        assert_eq!(messages[1].content, "turn 0");
        assert_eq!(messages[50].content, "turn 49");
    }

    #[test]
    fn test_build_messages_keeps_most_recent_history_when_capped() {
        let cfg = AssistantConfig {
            max_history_turns: Some(2),
            ..config()
        };
        let responder = ConversationResponder::fallback_only(&cfg);
        let history: Vec<ConversationTurn> = (0..5)
            .map(|i| ConversationTurn::user(format!("turn {}", i)))
            .collect();
        let messages = responder.build_messages("now", &history);
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec![SYSTEM_PROMPT, "turn 3", "turn 4", "now"]);
    }

    #[test]
    fn test_build_messages_without_history() {
        let responder = ConversationResponder::fallback_only(&config());
        let messages = responder.build_messages("hello", &[]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], CompletionMessage::user("hello"));
    }
}
