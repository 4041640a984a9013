use ml_client::RankingError;
use thiserror::Error;

/// Errors that end a request without a response.
///
/// None of these are recovered locally: the Lambda entry point returns them
/// as function errors and the dialog platform decides what the user sees.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("Slot {0} is missing from the request")]
    MissingSlot(String),

    #[error("No movie in the catalog matches {0:?}")]
    TitleNotFound(String),

    /// The ranking service returned an id the catalog doesn't know
    #[error("Item {0} returned by the ranking service is not in the catalog")]
    UnknownItem(String),

    #[error(transparent)]
    Ranking(#[from] RankingError),
}

/// Configuration could not be loaded or failed validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
