//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use ppemarts_calc::Calculator;
use ppemarts_chat::{CompletionService, ConversationResponder, Recommender};
use ppemarts_core::{Catalog, PpeConfig};

/// Shared application state.
///
/// Everything here is read-only after construction, so cloning per
/// request is cheap and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<PpeConfig>,
    /// Static product catalog.
    pub catalog: Catalog,
    /// Assistant reply generation.
    pub responder: Arc<ConversationResponder>,
    /// Product recommendations for assistant replies.
    pub recommender: Recommender,
    /// Requirement calculator with configured input bounds.
    pub calculator: Calculator,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Build state from config. Without a completion service the assistant
    /// answers from canned replies only.
    pub fn new(config: PpeConfig, completion: Option<Arc<dyn CompletionService>>) -> Self {
        let responder = match completion {
            Some(service) => ConversationResponder::with_completion(&config.assistant, service),
            None => ConversationResponder::fallback_only(&config.assistant),
        };
        Self {
            catalog: Catalog::builtin(),
            responder: Arc::new(responder),
            recommender: Recommender::new(&config.recommendation),
            calculator: Calculator::new(&config.calculator),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}
