use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub store: StoreConfig,
}

/// Where the configuration document lives, and where to look for credentials
/// when the environment blob is not set.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub credentials_file: String,
    pub database: String,
    pub collection: String,
    pub document_id: String,
}

impl MenuConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(MenuConfig {
            common,
            store: StoreConfig {
                credentials_file: get_env(
                    "MONGODB_CREDENTIALS_FILE",
                    Some("mongodb-credentials.json"),
                    is_prod,
                )?,
                database: get_env("MENU_DATABASE", Some("cardapio_db"), is_prod)?,
                collection: get_env("MENU_COLLECTION", Some("config"), is_prod)?,
                document_id: get_env("MENU_DOCUMENT_ID", Some("menu"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::Config(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Config(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
