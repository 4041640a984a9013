//! Fetching the catalog file from S3.
//!
//! The object is downloaded once at cold start, written to a local path
//! (normally under `/tmp`) and parsed from there. There is no retry: if the
//! download fails the process cannot serve requests.

use crate::error::{DataLoadError, Result};
use crate::types::Catalog;
use aws_sdk_s3::error::DisplayErrorContext;
use std::fmt;
use std::path::Path;
use tracing::{debug, error, info};

/// Where the catalog object lives in S3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLocation {
    pub bucket: String,
    pub key: String,
}

impl CatalogLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    fn download_error(&self, reason: impl Into<String>) -> DataLoadError {
        DataLoadError::DownloadError {
            bucket: self.bucket.clone(),
            key: self.key.clone(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Download the catalog object and write it to `local_path`
pub async fn download_catalog(
    client: &aws_sdk_s3::Client,
    location: &CatalogLocation,
    local_path: &Path,
) -> Result<()> {
    debug!("Downloading movies list from url={}", location);

    let output = client
        .get_object()
        .bucket(&location.bucket)
        .key(&location.key)
        .send()
        .await
        .map_err(|e| {
            error!("S3 error while downloading {}: {}", location, DisplayErrorContext(&e));
            location.download_error(DisplayErrorContext(&e).to_string())
        })?;

    let bytes = output
        .body
        .collect()
        .await
        .map_err(|e| location.download_error(e.to_string()))?
        .into_bytes();

    tokio::fs::write(local_path, &bytes).await?;
    debug!("Wrote {} bytes to {:?}", bytes.len(), local_path);
    Ok(())
}

/// Download the catalog and load it
pub async fn fetch_catalog(
    client: &aws_sdk_s3::Client,
    location: &CatalogLocation,
    local_path: &Path,
) -> Result<Catalog> {
    download_catalog(client, location, local_path).await?;
    let catalog = Catalog::load_from_file(local_path)?;
    info!("Catalog from {} ready with {} movies", location, catalog.len());
    Ok(catalog)
}
