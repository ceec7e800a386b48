use crate::error::MenuError;
use crate::models::MenuCatalog;
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Where the menu catalog comes from.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn load(&self) -> Result<MenuCatalog, MenuError>;
}

/// On-disk layout: `{ "menus": ["...", ...] }`.
#[derive(Debug, Deserialize)]
struct MenuFile {
    #[serde(default)]
    menus: Vec<String>,
}

/// Reads the catalog from a JSON file on every call.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MenuSource for JsonFileSource {
    async fn load(&self) -> Result<MenuCatalog, MenuError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                MenuError::DataUnavailable {
                    path: self.path.clone(),
                }
            } else {
                MenuError::Io(e)
            }
        })?;

        let file: MenuFile = serde_json::from_str(&raw)?;
        MenuCatalog::new(file.menus)
    }
}
