use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub data: DataConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// JSON file holding `{ "menus": [...] }`.
    pub menus_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticConfig {
    /// Directory with `index.html` and the assets served under `/static`.
    pub dir: String,
}

impl MenuConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(MenuConfig {
            common: common_config,
            data: DataConfig {
                menus_path: get_env("MENUS_DATA_PATH", Some("data/menus.json"), is_prod)?,
            },
            static_files: StaticConfig {
                dir: get_env("STATIC_DIR", Some("static"), false)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
