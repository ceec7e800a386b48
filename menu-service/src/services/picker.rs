use crate::error::MenuError;
use crate::models::{MenuCatalog, SpinResult};
use crate::services::catalog::MenuSource;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Answers menu queries against a freshly loaded catalog.
#[derive(Clone)]
pub struct MenuPicker {
    source: Arc<dyn MenuSource>,
}

impl MenuPicker {
    pub fn new(source: Arc<dyn MenuSource>) -> Self {
        Self { source }
    }

    /// Reads the catalog from the source. Nothing is cached between calls.
    pub async fn load_catalog(&self) -> Result<MenuCatalog, MenuError> {
        self.source.load().await
    }

    pub async fn pick_random(&self) -> Result<String, MenuError> {
        let catalog = self.load_catalog().await?;
        let mut rng = rand::thread_rng();
        Ok(catalog.choose(&mut rng).to_string())
    }

    pub async fn list_menus(&self) -> Result<MenuCatalog, MenuError> {
        self.load_catalog().await
    }

    /// Spins the roulette over the current catalog.
    ///
    /// The same `seed` over the same catalog always yields the same result
    /// and ticks. Without a seed the generator is seeded from the clock.
    pub async fn spin(&self, seed: Option<&str>, ticks: usize) -> Result<SpinResult, MenuError> {
        let catalog = self.load_catalog().await?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed_from_str(seed)),
            None => StdRng::seed_from_u64(clock_seed()),
        };

        Ok(spin_catalog(&catalog, &mut rng, ticks))
    }
}

/// Maps a seed string to a stable 64-bit value: the first 16 hex digits of
/// its SHA-256 digest.
pub fn seed_from_str(seed: &str) -> u64 {
    let digest = Sha256::digest(seed.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Draws `ticks - 1` pass-over picks followed by the final result, which is
/// also appended as the last tick. Callers validate `ticks` to 5..=60.
fn spin_catalog<R: Rng + ?Sized>(catalog: &MenuCatalog, rng: &mut R, ticks: usize) -> SpinResult {
    let start = Instant::now();

    let mut tick_list: Vec<String> = (0..ticks.saturating_sub(1))
        .map(|_| catalog.choose(&mut *rng).to_string())
        .collect();

    let result = catalog.choose(rng).to_string();
    tick_list.push(result.clone());

    SpinResult {
        result,
        ticks: tick_list,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSource(Vec<String>);

    #[async_trait]
    impl MenuSource for FixedSource {
        async fn load(&self) -> Result<MenuCatalog, MenuError> {
            MenuCatalog::new(self.0.clone())
        }
    }

    fn picker(menus: &[&str]) -> MenuPicker {
        MenuPicker::new(Arc::new(FixedSource(
            menus.iter().map(|m| m.to_string()).collect(),
        )))
    }

    #[test]
    fn seed_uses_digest_prefix() {
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(seed_from_str("abc"), 0xba7816bf8f01cfea);
    }

    #[tokio::test]
    async fn seeded_spin_output_is_stable() {
        let picker = picker(&["김치찌개", "돈까스"]);
        let spin = picker.spin(Some("abc"), 5).await.unwrap();

        assert_eq!(
            spin.ticks,
            vec!["김치찌개", "김치찌개", "김치찌개", "돈까스", "김치찌개"]
        );
        assert_eq!(spin.result, "김치찌개");
    }

    #[tokio::test]
    async fn same_seed_same_spin() {
        let picker = picker(&["김치찌개", "돈까스"]);

        let first = picker.spin(Some("abc"), 5).await.unwrap();
        let second = picker.spin(Some("abc"), 5).await.unwrap();

        assert_eq!(first.result, second.result);
        assert_eq!(first.ticks, second.ticks);
    }

    #[tokio::test]
    async fn ticks_end_with_result_for_every_allowed_count() {
        let picker = picker(&["제육볶음", "순두부찌개", "짜장면", "초밥"]);

        for n in 5..=60 {
            let spin = picker.spin(Some("lunch"), n).await.unwrap();
            assert_eq!(spin.ticks.len(), n);
            assert_eq!(spin.ticks.last(), Some(&spin.result));
        }
    }

    #[tokio::test]
    async fn distinct_seeds_usually_differ() {
        let menus: Vec<String> = (0..20).map(|i| format!("menu-{}", i)).collect();
        let refs: Vec<&str> = menus.iter().map(String::as_str).collect();
        let picker = picker(&refs);

        let a = picker.spin(Some("monday"), 18).await.unwrap();
        let b = picker.spin(Some("tuesday"), 18).await.unwrap();

        assert_ne!(a.ticks, b.ticks);
    }

    #[tokio::test]
    async fn unseeded_spin_respects_invariants() {
        let picker = picker(&["칼국수", "떡볶이"]);
        let spin = picker.spin(None, 18).await.unwrap();

        assert_eq!(spin.ticks.len(), 18);
        assert_eq!(spin.ticks.last(), Some(&spin.result));
    }

    #[tokio::test]
    async fn pick_random_returns_catalog_member() {
        let menus = ["김밥", "라면", "만두"];
        let picker = picker(&menus);

        for _ in 0..50 {
            let pick = picker.pick_random().await.unwrap();
            assert!(menus.contains(&pick.as_str()));
        }
    }

    #[tokio::test]
    async fn list_menus_count_matches_catalog() {
        let picker = picker(&["김밥", "라면", "김밥"]);
        let catalog = picker.list_menus().await.unwrap();

        assert_eq!(catalog.len(), 3);
    }
}
