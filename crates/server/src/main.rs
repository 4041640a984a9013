//! Lambda entry point for the movie recommendation bot.
//!
//! Cold start loads the configuration, downloads the catalog once and
//! builds the bot; every invocation then reuses it. Any start-up failure
//! ends the process before the runtime loop begins.

use std::sync::Arc;

use anyhow::Context;
use lambda_runtime::{LambdaEvent, service_fn};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use data_loader::fetch_catalog;
use ml_client::PersonalizeClient;
use server::{BotConfig, IntentRequest, MovieBot, RecommendationOrchestrator};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize logging; CloudWatch adds its own timestamps
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = BotConfig::from_env().context("Failed to load bot configuration")?;
    debug!(
        "Initializing lambda with campaign: {}, bucket: {}, movie_data: {}, file: {:?}",
        config.campaign_arn, config.assets_bucket, config.movie_data_object, config.movies_file_local
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let s3 = aws_sdk_s3::Client::new(&aws_config);
    let catalog = fetch_catalog(&s3, &config.catalog_location(), &config.movies_file_local)
        .await
        .context("Failed to load movie catalog")?;

    let ranker = PersonalizeClient::from_aws_config(&aws_config, config.campaign_arn.clone());
    let orchestrator = RecommendationOrchestrator::new(Arc::new(catalog), ranker)
        .with_result_count(config.num_results);
    let bot = Arc::new(MovieBot::new(orchestrator));
    info!("Movie bot ready");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<IntentRequest>| {
        let bot = Arc::clone(&bot);
        async move {
            bot.handle(event.payload)
                .await
                .map_err(lambda_runtime::Error::from)
        }
    }))
    .await
}
