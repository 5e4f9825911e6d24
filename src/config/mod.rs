//! Configuration loaded from `.pyinspect.toml`.

mod core;
pub mod loader;

pub use self::core::{DocstringConfig, OutputConfig, PyinspectConfig, DEFAULT_CONFIG};
pub use loader::{load_config, load_config_from, parse_config, CONFIG_FILE_NAME};
