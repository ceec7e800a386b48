pub mod menu;

pub use menu::{MenuCatalog, SpinResult};
