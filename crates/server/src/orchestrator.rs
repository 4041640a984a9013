//! # Recommendation Orchestrator
//!
//! Runs the recommendation flow for one watched-movie title:
//! 1. Match the title against the catalog (first substring match)
//! 2. Ask the ranking service for similar items
//! 3. Resolve every returned id back to a catalog entry, keeping order
//!
//! The catalog is injected as an `Arc` so a single load at cold start is
//! shared by every invocation. The ranking client is generic, which lets
//! tests substitute a mock for Personalize.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use data_loader::{Catalog, MovieEntry};
use ml_client::{DEFAULT_RESULT_COUNT, RankedItem, SimilarItems};

use crate::error::BotError;

/// Coordinates title matching, ranking and catalog resolution
pub struct RecommendationOrchestrator<R> {
    catalog: Arc<Catalog>,
    ranker: R,
    result_count: u32,
}

impl<R: SimilarItems> RecommendationOrchestrator<R> {
    /// Create an orchestrator requesting the default number of similar items
    pub fn new(catalog: Arc<Catalog>, ranker: R) -> Self {
        Self {
            catalog,
            ranker,
            result_count: DEFAULT_RESULT_COUNT,
        }
    }

    pub fn with_result_count(mut self, result_count: u32) -> Self {
        self.result_count = result_count;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Main entry point: movies similar to the one whose title contains
    /// `watched_title`, in ranking order
    ///
    /// Fails if the title matches nothing, the ranking call fails, or the
    /// ranking names an item missing from the catalog. No partial results.
    pub async fn recommend_for_title(&self, watched_title: &str) -> Result<Vec<MovieEntry>, BotError> {
        let start_time = Instant::now();
        debug!("get_recommendations_for_movie={}", watched_title);

        let movie = self.match_title(watched_title)?;
        debug!("Matched to item={:?}", movie);

        let ranked = self
            .ranker
            .similar_items(&movie.id, self.result_count)
            .await?;

        let recommendations = self.resolve(&ranked)?;
        debug!("Returning recommendations:={:?}", recommendations);

        info!(
            "Recommended {} movies for {:?} in {:.2?}",
            recommendations.len(),
            movie.title,
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    fn match_title(&self, title: &str) -> Result<&MovieEntry, BotError> {
        self.catalog
            .find_by_title(title)
            .ok_or_else(|| BotError::TitleNotFound(title.to_string()))
    }

    /// Look up each ranked id in the catalog, preserving ranking order
    fn resolve(&self, ranked: &[RankedItem]) -> Result<Vec<MovieEntry>, BotError> {
        ranked
            .iter()
            .map(|item| {
                self.catalog
                    .get(&item.item_id)
                    .cloned()
                    .ok_or_else(|| BotError::UnknownItem(item.item_id.clone()))
            })
            .collect()
    }
}
