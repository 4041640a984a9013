//! Intent dispatch.
//!
//! A request is either routed to the one supported intent handler, which
//! produces a `Close`/`Fulfilled` response, or rejected with
//! [`BotError::UnsupportedIntent`]. There is no intermediate dialog state.

use ml_client::SimilarItems;
use tracing::debug;

use crate::error::BotError;
use crate::formatter::fulfilled_message;
use crate::lex::{FulfillmentState, IntentRequest, LexResponse, Message};
use crate::orchestrator::RecommendationOrchestrator;

/// Name of the only intent this bot fulfills
pub const RECOMMEND_MOVIE_INTENT: &str = "RecommendMovieIntent";
/// Slot carrying the title the user has already watched
pub const WATCHED_MOVIE_SLOT: &str = "watchedMovie";

pub struct MovieBot<R> {
    orchestrator: RecommendationOrchestrator<R>,
}

impl<R: SimilarItems> MovieBot<R> {
    pub fn new(orchestrator: RecommendationOrchestrator<R>) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &RecommendationOrchestrator<R> {
        &self.orchestrator
    }

    /// Entry point for one platform invocation
    pub async fn handle(&self, request: IntentRequest) -> Result<LexResponse, BotError> {
        debug!("event.bot.name={}", request.bot.name);
        self.dispatch(&request).await
    }

    /// Route the request to the handler for its intent
    pub async fn dispatch(&self, request: &IntentRequest) -> Result<LexResponse, BotError> {
        debug!(
            "dispatch userId={}, intentName={}",
            request.user_id,
            request.intent_name()
        );

        match request.intent_name() {
            RECOMMEND_MOVIE_INTENT => self.recommend_movies(request).await,
            other => Err(BotError::UnsupportedIntent(other.to_string())),
        }
    }

    async fn recommend_movies(&self, request: &IntentRequest) -> Result<LexResponse, BotError> {
        let watched_movie = request
            .slot(WATCHED_MOVIE_SLOT)
            .ok_or_else(|| BotError::MissingSlot(WATCHED_MOVIE_SLOT.to_string()))?;

        let recommendations = self.orchestrator.recommend_for_title(watched_movie).await?;
        let message = fulfilled_message(&recommendations);

        Ok(LexResponse::close(
            request.session_attributes.clone(),
            FulfillmentState::Fulfilled,
            Message::plain_text(message),
        ))
    }
}
