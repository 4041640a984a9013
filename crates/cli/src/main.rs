use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, MovieEntry};
use ml_client::{PersonalizeClient, DEFAULT_RESULT_COUNT};
use server::formatter::fulfilled_message;
use server::{IntentRequest, MovieBot, RecommendationOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// ReelBot - local harness for the movie recommendation bot
#[derive(Parser)]
#[command(name = "reel-bot")]
#[command(about = "Search the movie catalog and exercise the recommendation bot locally", long_about = None)]
struct Cli {
    /// Path to the catalog CSV (ITEM_ID,title,genre)
    #[arg(short, long, default_value = "data/movies.csv")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,

        /// Maximum number of results to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Recommend movies similar to a watched title
    Recommend {
        /// Title the user watched
        #[arg(long)]
        title: String,

        /// Personalize campaign to query
        #[arg(long, env = "CAMPAIGN_ARN")]
        campaign_arn: String,

        /// Number of similar movies to request
        #[arg(long, default_value_t = DEFAULT_RESULT_COUNT)]
        count: u32,
    },

    /// Replay a saved dialog event through the bot and print the response
    Invoke {
        /// Path to the event JSON
        #[arg(long)]
        event: PathBuf,

        /// Personalize campaign to query
        #[arg(long, env = "CAMPAIGN_ARN")]
        campaign_arn: String,

        /// Number of similar movies to request
        #[arg(long, default_value_t = DEFAULT_RESULT_COUNT)]
        count: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading catalog from {}...", cli.catalog.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.catalog).context("Failed to load movie catalog")?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search { title, limit } => handle_search(&catalog, &title, limit),
        Commands::Recommend {
            title,
            campaign_arn,
            count,
        } => handle_recommend(catalog, &title, campaign_arn, count).await?,
        Commands::Invoke {
            event,
            campaign_arn,
            count,
        } => handle_invoke(catalog, event, campaign_arn, count).await?,
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str, limit: usize) {
    let matches = catalog.search_titles(title, limit);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  no matching titles");
        return;
    }
    for movie in &matches {
        println!("{}: {} [{}]", movie.id, movie.title, movie.genre);
    }

    // the bot itself only ever uses the first catalog match
    if let Some(first) = catalog.find_by_title(title) {
        println!("{} bot would resolve to {}", "→".cyan(), first.title);
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    title: &str,
    campaign_arn: String,
    count: u32,
) -> Result<()> {
    let ranker = PersonalizeClient::from_env(campaign_arn).await;
    let orchestrator = RecommendationOrchestrator::new(catalog, ranker).with_result_count(count);

    info!("Getting {} recommendations for {:?}", count, title);
    let recommendations = orchestrator.recommend_for_title(title).await?;

    print_recommendations(&recommendations);
    println!("\n{}", "Bot reply:".bold());
    println!("{}", fulfilled_message(&recommendations));
    Ok(())
}

/// Handle the 'invoke' command
async fn handle_invoke(
    catalog: Arc<Catalog>,
    event: PathBuf,
    campaign_arn: String,
    count: u32,
) -> Result<()> {
    let raw = std::fs::read_to_string(&event)
        .with_context(|| format!("Failed to read {}", event.display()))?;
    let request: IntentRequest =
        serde_json::from_str(&raw).context("Event is not a valid dialog request")?;

    let ranker = PersonalizeClient::from_env(campaign_arn).await;
    let bot = MovieBot::new(RecommendationOrchestrator::new(catalog, ranker).with_result_count(count));

    let response = bot.handle(request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[MovieEntry]) {
    print!("{}", "Movie Recommendations:\n".bold().blue());
    for (rank, movie) in recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}] (item {})",
            (rank + 1).to_string().green(),
            movie.title,
            movie.genre,
            movie.id
        );
    }
}
