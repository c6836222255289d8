//! Chat-completion client.
//!
//! [`CompletionService`] is the seam the responder talks to;
//! [`OpenAiClient`] implements it against any OpenAI-compatible
//! `/chat/completions` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ppemarts_core::config::AssistantConfig;

use crate::error::ChatError;

/// Author of a completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionRole {
    System,
    User,
    Assistant,
}

/// One entry of the message list sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: CompletionRole,
    pub content: String,
}

impl CompletionMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: CompletionRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: CompletionRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: CompletionRole::Assistant,
            content: content.into(),
        }
    }
}

/// Something that turns a message list into generated text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Generate a reply for `messages`. A single attempt; no retries.
    async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ChatError>;
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [CompletionMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// =============================================================================
// OpenAiClient
// =============================================================================

/// Client for an OpenAI-compatible chat-completion API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiClient {
    /// Build a client from config with an explicit API key.
    pub fn new(config: &AssistantConfig, api_key: impl Into<String>) -> Result<Self, ChatError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::Completion(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Build a client if the API key variable named in config is set and
    /// non-empty. `Ok(None)` means the assistant runs on canned replies.
    pub fn from_env(config: &AssistantConfig) -> Result<Option<Self>, ChatError> {
        match std::env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Self::new(config, key.trim()).map(Some),
            _ => Ok(None),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ChatError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(model = %self.model, messages = messages.len(), "Sending completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Completion(format!("API returned {}", status)));
        }

        let body: ChatCompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ChatError::Completion("response contained no text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        body: Arc<Mutex<Option<Value>>>,
        auth: Arc<Mutex<Option<String>>>,
    }

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config(base_url: &str) -> AssistantConfig {
        AssistantConfig {
            base_url: base_url.to_string(),
            timeout_secs: 1,
            ..AssistantConfig::default()
        }
    }

    fn conversation() -> Vec<CompletionMessage> {
        vec![
            CompletionMessage::system("be safe"),
            CompletionMessage::user("which gloves?"),
        ]
    }

    #[tokio::test]
    async fn test_complete_success_sends_expected_request() {
        let captured = Captured::default();
        let router = Router::new()
            .route(
                "/chat/completions",
                post(
                    |State(c): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| async move {
                        *c.auth.lock().unwrap() = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        *c.body.lock().unwrap() = Some(body);
                        Json(json!({
                            "choices": [{"message": {"role": "assistant", "content": "Use nitrile."}}]
                        }))
                    },
                ),
            )
            .with_state(captured.clone());
        let base = serve(router).await;

        let client = OpenAiClient::new(&config(&base), "sk-test").unwrap();
        let text = client.complete(&conversation()).await.unwrap();
        assert_eq!(text, "Use nitrile.");

        assert_eq!(captured.auth.lock().unwrap().as_deref(), Some("Bearer sk-test"));
        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "which gloves?");
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({"choices": [{"message": {"content": "ok"}}]})) }),
        );
        let base = serve(router).await;
        let client = OpenAiClient::new(&config(&format!("{}/v1/", base)), "k").unwrap();
        assert_eq!(client.complete(&conversation()).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_error_status_is_completion_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"}))) }),
        );
        let base = serve(router).await;
        let client = OpenAiClient::new(&config(&base), "bad").unwrap();
        let err = client.complete(&conversation()).await.unwrap_err();
        assert!(matches!(err, ChatError::Completion(_)));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_completion_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"unexpected": true})) }),
        );
        let base = serve(router).await;
        let client = OpenAiClient::new(&config(&base), "k").unwrap();
        assert!(client.complete(&conversation()).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_choices_is_completion_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        );
        let base = serve(router).await;
        let client = OpenAiClient::new(&config(&base), "k").unwrap();
        let err = client.complete(&conversation()).await.unwrap_err();
        assert!(err.to_string().contains("no text"));
    }

    #[tokio::test]
    async fn test_timeout_is_completion_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"choices": [{"message": {"content": "late"}}]}))
            }),
        );
        let base = serve(router).await;
        let client = OpenAiClient::new(&config(&base), "k").unwrap();
        let err = client.complete(&conversation()).await.unwrap_err();
        assert!(matches!(err, ChatError::Completion(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_completion_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = OpenAiClient::new(&config(&format!("http://{}", addr)), "k").unwrap();
        assert!(client.complete(&conversation()).await.is_err());
    }

    #[test]
    fn test_from_env_without_key_is_none() {
        let config = AssistantConfig {
            api_key_env: "PPEMARTS_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..AssistantConfig::default()
        };
        assert!(OpenAiClient::from_env(&config).unwrap().is_none());
    }

    #[test]
    fn test_completion_role_serializes_lowercase() {
        let msg = CompletionMessage::assistant("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, json!({"role": "assistant", "content": "hi"}));
    }
}
