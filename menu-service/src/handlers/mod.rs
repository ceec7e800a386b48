pub mod health;
pub mod menus;
pub mod metrics;

pub use health::health_check;
pub use menus::{list_menus, random_menu, spin_menu};
pub use self::metrics::metrics_endpoint;

use axum::http::Uri;
use service_core::error::AppError;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
