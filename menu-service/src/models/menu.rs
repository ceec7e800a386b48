use crate::error::MenuError;
use rand::Rng;

/// Ordered list of candidate menu names. Never empty.
///
/// Duplicates are kept as-is, so a repeated entry is proportionally more
/// likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    menus: Vec<String>,
}

impl MenuCatalog {
    pub fn new(menus: Vec<String>) -> Result<Self, MenuError> {
        if menus.is_empty() {
            return Err(MenuError::DataEmpty);
        }
        Ok(Self { menus })
    }

    pub fn menus(&self) -> &[String] {
        &self.menus
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn into_menus(self) -> Vec<String> {
        self.menus
    }

    /// Draws one entry uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.menus[rng.gen_range(0..self.menus.len())]
    }
}

/// Outcome of a roulette spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinResult {
    pub result: String,
    /// Every menu the roulette passed over; the last one is `result`.
    pub ticks: Vec<String>,
    pub duration_ms: u64,
}
