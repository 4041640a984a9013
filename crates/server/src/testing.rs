//! Shared test doubles.

use ml_client::{RankedItem, RankingError, SimilarItems};

mockall::mock! {
    pub Ranker {}

    #[async_trait::async_trait]
    impl SimilarItems for Ranker {
        async fn similar_items(
            &self,
            item_id: &str,
            count: u32,
        ) -> Result<Vec<RankedItem>, RankingError>;
    }
}
