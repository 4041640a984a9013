//! Server crate for the movie recommendation bot.
//!
//! This crate turns a dialog platform event into a closing reply:
//! dispatch on the intent, resolve the watched title, rank similar movies
//! and format the answer. The Lambda binary in `main.rs` wires it to S3,
//! Personalize and the Lambda runtime.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod formatter;
pub mod lex;
pub mod orchestrator;

#[cfg(test)]
mod testing;

pub use config::BotConfig;
pub use dispatch::{MovieBot, RECOMMEND_MOVIE_INTENT, WATCHED_MOVIE_SLOT};
pub use error::{BotError, ConfigError};
pub use lex::{IntentRequest, LexResponse};
pub use orchestrator::RecommendationOrchestrator;
