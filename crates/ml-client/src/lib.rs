//! Ranking client for the hosted recommendation model.
//!
//! This crate asks an Amazon Personalize campaign for items similar to a
//! given item. It handles:
//! - Building the `GetRecommendations` request (campaign, item, count)
//! - Converting the response into an ordered list of [`RankedItem`]s
//! - Error reporting; there is no retry
//!
//! Callers depend on the [`SimilarItems`] trait rather than the concrete
//! client, so the bot can be exercised without AWS.

use async_trait::async_trait;
use aws_sdk_personalizeruntime::error::DisplayErrorContext;
use aws_sdk_personalizeruntime::types::PredictedItem;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Number of similar items requested when the caller has no preference
pub const DEFAULT_RESULT_COUNT: u32 = 5;

/// Errors that can occur when calling the ranking service
#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Failed to get recommendations: {0}")]
    RequestFailed(String),

    #[error("Invalid response from ranking service: {0}")]
    InvalidResponse(String),
}

/// One entry of the ranking service's answer, in the order it was returned
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub item_id: String,
    pub score: Option<f64>,
}

impl RankedItem {
    pub fn new(item_id: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            item_id: item_id.into(),
            score,
        }
    }
}

/// Source of "items similar to this one" rankings.
///
/// Implementations must return items in ranking order; callers rely on it.
#[async_trait]
pub trait SimilarItems: Send + Sync {
    async fn similar_items(
        &self,
        item_id: &str,
        count: u32,
    ) -> Result<Vec<RankedItem>, RankingError>;
}

/// Client for a Personalize campaign.
///
/// Wraps the SDK's runtime client together with the campaign ARN so callers
/// only pass the item id.
#[derive(Debug, Clone)]
pub struct PersonalizeClient {
    client: aws_sdk_personalizeruntime::Client,
    campaign_arn: String,
}

impl PersonalizeClient {
    pub fn new(client: aws_sdk_personalizeruntime::Client, campaign_arn: impl Into<String>) -> Self {
        Self {
            client,
            campaign_arn: campaign_arn.into(),
        }
    }

    /// Build a client from an already loaded AWS configuration
    pub fn from_aws_config(config: &aws_config::SdkConfig, campaign_arn: impl Into<String>) -> Self {
        Self::new(aws_sdk_personalizeruntime::Client::new(config), campaign_arn)
    }

    /// Build a client from the default AWS credential and region chain
    pub async fn from_env(campaign_arn: impl Into<String>) -> Self {
        let campaign_arn = campaign_arn.into();
        info!("Creating Personalize client for campaign {}", campaign_arn);
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::from_aws_config(&config, campaign_arn)
    }

    /// The campaign this client queries
    pub fn campaign_arn(&self) -> &str {
        &self.campaign_arn
    }
}

#[async_trait]
impl SimilarItems for PersonalizeClient {
    async fn similar_items(
        &self,
        item_id: &str,
        count: u32,
    ) -> Result<Vec<RankedItem>, RankingError> {
        debug!(
            "Requesting {} items similar to {} from {}",
            count, item_id, self.campaign_arn
        );

        let output = self
            .client
            .get_recommendations()
            .campaign_arn(&self.campaign_arn)
            .item_id(item_id)
            .num_results(i32::try_from(count).unwrap_or(i32::MAX))
            .send()
            .await
            .map_err(|e| {
                error!("Personalize error for item {}: {}", item_id, DisplayErrorContext(&e));
                RankingError::RequestFailed(DisplayErrorContext(&e).to_string())
            })?;

        let items = ranked_items(output.item_list())?;
        let ids: Vec<&str> = items.iter().map(|item| item.item_id.as_str()).collect();
        debug!("Personalize returned following ids: {:?}", ids);

        if items.len() < count as usize {
            warn!(
                "Ranking service returned {} items, fewer than the {} requested",
                items.len(),
                count
            );
        }
        Ok(items)
    }
}

/// Convert the SDK's item list, keeping its order
///
/// An entry without an item id cannot be resolved to a movie, so it makes
/// the whole response invalid rather than being skipped.
pub fn ranked_items(items: &[PredictedItem]) -> Result<Vec<RankedItem>, RankingError> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let item_id = item.item_id().ok_or_else(|| {
                RankingError::InvalidResponse(format!("item at position {} has no itemId", position))
            })?;
            Ok(RankedItem::new(item_id, item.score()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_personalizeruntime::config::{BehaviorVersion, Credentials, Region};
    use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
    use aws_smithy_types::body::SdkBody;

    const CAMPAIGN_ARN: &str = "arn:aws:personalize:us-east-1:123456789012:campaign/movies";

    fn predicted(item_id: &str, score: f64) -> PredictedItem {
        PredictedItem::builder().item_id(item_id).score(score).build()
    }

    #[test]
    fn test_ranked_items_preserves_order() {
        let items = vec![
            predicted("3114", 0.12),
            predicted("2355", 0.09),
            predicted("588", 0.30),
        ];

        let ranked = ranked_items(&items).unwrap();

        let ids: Vec<&str> = ranked.iter().map(|item| item.item_id.as_str()).collect();
        assert_eq!(ids, vec!["3114", "2355", "588"]);
        assert_eq!(ranked[2].score, Some(0.30));
    }

    #[test]
    fn test_ranked_items_rejects_missing_id() {
        let items = vec![predicted("1", 0.5), PredictedItem::builder().score(0.4).build()];

        let err = ranked_items(&items).unwrap_err();
        assert!(matches!(err, RankingError::InvalidResponse(ref msg) if msg.contains("position 1")));
    }

    #[test]
    fn test_ranked_items_empty_response() {
        assert!(ranked_items(&[]).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_client_keeps_campaign_arn() {
        let config = aws_config::SdkConfig::builder()
            .behavior_version(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new("us-east-1"))
            .build();
        let client = PersonalizeClient::from_aws_config(&config, CAMPAIGN_ARN);

        assert_eq!(client.campaign_arn(), CAMPAIGN_ARN);
    }

    fn replay(status: u16, body: &str) -> StaticReplayClient {
        StaticReplayClient::new(vec![ReplayEvent::new(
            http::Request::builder()
                .uri("https://personalize-runtime.us-east-1.amazonaws.com/recommendations")
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(SdkBody::from(body.to_string()))
                .unwrap(),
        )])
    }

    fn personalize_client(http_client: StaticReplayClient) -> PersonalizeClient {
        let config = aws_sdk_personalizeruntime::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("AKID", "SECRET", None, None, "test"))
            .http_client(http_client)
            .build();
        PersonalizeClient::new(aws_sdk_personalizeruntime::Client::from_conf(config), CAMPAIGN_ARN)
    }

    #[tokio::test]
    async fn test_similar_items_sends_campaign_item_and_count() {
        let http_client = replay(
            200,
            r#"{"itemList":[{"itemId":"296","score":0.41},{"itemId":"16","score":0.22},{"itemId":"1","score":0.08}],"recommendationId":"RID-1"}"#,
        );
        let client = personalize_client(http_client.clone());

        let items = client.similar_items("6", 5).await.unwrap();

        let ids: Vec<&str> = items.iter().map(|item| item.item_id.as_str()).collect();
        assert_eq!(ids, vec!["296", "16", "1"]);
        assert_eq!(items[0].score, Some(0.41));

        let requests: Vec<_> = http_client.actual_requests().collect();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method(), "POST");
        assert!(requests[0].uri().ends_with("/recommendations"));

        let body: serde_json::Value =
            serde_json::from_slice(requests[0].body().bytes().unwrap()).unwrap();
        assert_eq!(body["campaignArn"], CAMPAIGN_ARN);
        assert_eq!(body["itemId"], "6");
        assert_eq!(body["numResults"], 5);
    }

    #[tokio::test]
    async fn test_short_item_list_is_accepted() {
        let client = personalize_client(replay(200, r#"{"itemList":[{"itemId":"296"}]}"#));

        let items = client.similar_items("6", 5).await.unwrap();

        assert_eq!(items, vec![RankedItem::new("296", None)]);
    }

    #[tokio::test]
    async fn test_service_error_is_request_failed() {
        let http_client = replay(
            404,
            r#"{"__type":"ResourceNotFoundException","message":"Campaign not found"}"#,
        );
        let client = personalize_client(http_client);

        let err = client.similar_items("6", 5).await.unwrap_err();

        assert!(matches!(err, RankingError::RequestFailed(ref msg) if msg.contains("ResourceNotFoundException")));
    }
}
