use serde::Deserialize;
use service_core::error::AppError;
use std::{env, fs};

/// Environment variable that may carry the full credential blob as JSON.
pub const CREDENTIALS_ENV: &str = "MONGODB_CREDENTIALS";

/// Database access credentials, resolved once at startup.
///
/// A resolution failure is not fatal: the caller logs it and starts without a
/// store, leaving every database-backed route answering 500.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreCredentials {
    pub uri: String,
    /// Overrides the configured database name when present in the blob.
    pub database: Option<String>,
}

impl StoreCredentials {
    /// Resolution order: the `MONGODB_CREDENTIALS` environment blob first,
    /// then the fallback file. A set-but-malformed blob is an error rather
    /// than a reason to try the file.
    pub fn load(fallback_file: &str) -> Result<Self, AppError> {
        if let Ok(blob) = env::var(CREDENTIALS_ENV) {
            return Self::parse(&blob).map_err(|e| {
                AppError::Config(anyhow::anyhow!(
                    "invalid credential blob in {}: {}",
                    CREDENTIALS_ENV,
                    e
                ))
            });
        }

        let blob = fs::read_to_string(fallback_file).map_err(|e| {
            AppError::Config(anyhow::anyhow!(
                "could not read credential file {}: {}",
                fallback_file,
                e
            ))
        })?;
        Self::parse(&blob).map_err(|e| {
            AppError::Config(anyhow::anyhow!(
                "invalid credential file {}: {}",
                fallback_file,
                e
            ))
        })
    }

    fn parse(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }
}
