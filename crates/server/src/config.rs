use std::path::PathBuf;

use data_loader::CatalogLocation;
use serde::Deserialize;

use crate::error::ConfigError;

/// Largest result count the ranking service accepts
const MAX_NUM_RESULTS: u32 = 500;

/// Bot configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BotConfig {
    /// ARN of the Personalize campaign to query (`CAMPAIGN_ARN`)
    pub campaign_arn: String,

    /// Bucket holding static assets (`ASSETS_BUCKET`)
    pub assets_bucket: String,

    /// Object key of the movie catalog CSV (`MOVIE_DATA_OBJECT`)
    pub movie_data_object: String,

    /// Where the downloaded catalog is cached (`MOVIES_FILE_LOCAL`)
    #[serde(default = "default_movies_file_local")]
    pub movies_file_local: PathBuf,

    /// Similar movies to request per reply (`NUM_RESULTS`)
    #[serde(default = "default_num_results")]
    pub num_results: u32,
}

fn default_movies_file_local() -> PathBuf {
    PathBuf::from("/tmp/movies.csv")
}

fn default_num_results() -> u32 {
    ml_client::DEFAULT_RESULT_COUNT
}

impl BotConfig {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: BotConfig = envy::from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.campaign_arn.starts_with("arn:") {
            return Err(ConfigError::Invalid {
                field: "campaign_arn",
                reason: format!("{:?} is not an ARN", self.campaign_arn),
            });
        }
        require_non_empty("assets_bucket", &self.assets_bucket)?;
        require_non_empty("movie_data_object", &self.movie_data_object)?;
        if self.num_results == 0 || self.num_results > MAX_NUM_RESULTS {
            return Err(ConfigError::Invalid {
                field: "num_results",
                reason: format!("{} is outside 1..={}", self.num_results, MAX_NUM_RESULTS),
            });
        }
        Ok(())
    }

    pub fn catalog_location(&self) -> CatalogLocation {
        CatalogLocation::new(&self.assets_bucket, &self.movie_data_object)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn required() -> Vec<(String, String)> {
        vars(&[
            ("CAMPAIGN_ARN", "arn:aws:personalize:us-east-1:123456789012:campaign/movies"),
            ("ASSETS_BUCKET", "movie-bot-assets"),
            ("MOVIE_DATA_OBJECT", "data/movies.csv"),
        ])
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_vars(required()).unwrap();

        assert_eq!(config.movies_file_local, PathBuf::from("/tmp/movies.csv"));
        assert_eq!(config.num_results, 5);
        assert_eq!(
            config.catalog_location(),
            CatalogLocation::new("movie-bot-assets", "data/movies.csv")
        );
    }

    #[test]
    fn test_overrides() {
        let mut pairs = required();
        pairs.extend(vars(&[("MOVIES_FILE_LOCAL", "/var/tmp/m.csv"), ("NUM_RESULTS", "10")]));

        let config = BotConfig::from_vars(pairs).unwrap();

        assert_eq!(config.movies_file_local, PathBuf::from("/var/tmp/m.csv"));
        assert_eq!(config.num_results, 10);
    }

    #[test]
    fn test_missing_variable() {
        let pairs = vars(&[("CAMPAIGN_ARN", "arn:aws:personalize:::campaign/x")]);
        assert!(matches!(BotConfig::from_vars(pairs), Err(ConfigError::Env(_))));
    }

    #[test]
    fn test_rejects_non_arn_campaign() {
        let mut pairs = required();
        pairs[0].1 = "movies-campaign".to_string();

        let err = BotConfig::from_vars(pairs).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "campaign_arn", .. }));
    }

    #[test]
    fn test_rejects_blank_bucket_and_bad_count() {
        let mut pairs = required();
        pairs[1].1 = "  ".to_string();
        let err = BotConfig::from_vars(pairs).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "assets_bucket", .. }));

        let mut pairs = required();
        pairs.push(("NUM_RESULTS".to_string(), "0".to_string()));
        let err = BotConfig::from_vars(pairs).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "num_results", .. }));
    }
}
