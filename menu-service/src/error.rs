use service_core::error::AppError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading the menu catalog.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu data file not found: {}", path.display())]
    DataUnavailable { path: PathBuf },

    #[error("menu data contains no entries")]
    DataEmpty,

    #[error("menu data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to read menu data: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            MenuError::DataUnavailable { .. } => "unavailable",
            MenuError::DataEmpty => "empty",
            MenuError::Malformed(_) => "malformed",
            MenuError::Io(_) => "io",
        }
    }
}

impl From<MenuError> for AppError {
    fn from(err: MenuError) -> Self {
        AppError::DataSourceError(anyhow::Error::new(err))
    }
}
