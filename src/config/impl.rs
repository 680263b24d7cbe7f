use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Initialize the global configuration from "config.toml" in the current directory.
///
/// If the file doesn't exist, uses in-memory defaults.
pub fn init_config() {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(None)));
}

/// Initialize the global configuration, optionally from an explicit file path.
///
/// An explicit path must load cleanly; without one this behaves like
/// [`init_config`]. Only the first successful call has any effect.
///
/// # Examples
/// ```no_run
/// use stickerboard::config::init_config_from;
/// init_config_from(Some("deploy/stickerboard.toml")).expect("config");
/// ```
pub fn init_config_from(path: Option<&str>) -> Result<()> {
    match path {
        Some(_) => {
            let config = StaticConfig::try_load(path)?;
            let _ = CONFIG.set(ArcSwap::from_pointee(config));
        }
        None => init_config(),
    }
    Ok(())
}
