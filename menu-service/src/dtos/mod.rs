use crate::models::{MenuCatalog, SpinResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_SPIN_TICKS: usize = 18;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SpinParams {
    /// Fixes the outcome when set; the same seed gives the same spin.
    pub seed: Option<String>,
    /// Number of cells the roulette passes over, including the final one.
    /// Signed so negative values reach validation instead of failing to parse.
    #[validate(range(min = 5, max = 60))]
    #[serde(default = "default_ticks")]
    pub ticks: i64,
}

impl SpinParams {
    /// Tick count as a length. Only meaningful after `validate()` succeeded.
    pub fn tick_count(&self) -> usize {
        usize::try_from(self.ticks).unwrap_or(DEFAULT_SPIN_TICKS)
    }
}

fn default_ticks() -> i64 {
    DEFAULT_SPIN_TICKS as i64
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuResponse {
    pub menu: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuListResponse {
    pub count: usize,
    pub menus: Vec<String>,
}

impl From<MenuCatalog> for MenuListResponse {
    fn from(catalog: MenuCatalog) -> Self {
        Self {
            count: catalog.len(),
            menus: catalog.into_menus(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpinResponse {
    pub result: String,
    pub ticks: Vec<String>,
    pub duration_ms: u64,
}

impl From<SpinResult> for SpinResponse {
    fn from(spin: SpinResult) -> Self {
        Self {
            result: spin.result,
            ticks: spin.ticks,
            duration_ms: spin.duration_ms,
        }
    }
}
