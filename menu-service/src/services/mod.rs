pub mod catalog;
pub mod metrics;
pub mod picker;

pub use catalog::{JsonFileSource, MenuSource};
pub use self::metrics::{get_metrics, init_metrics};
pub use picker::{seed_from_str, MenuPicker};
