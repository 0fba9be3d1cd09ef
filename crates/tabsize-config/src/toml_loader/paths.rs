//! Where the tabsize config lives, and seeding it on first run.

use std::path::{Path, PathBuf};
use tabsize_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "tabsize";
const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/tabsize/config.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match dirs::config_dir() {
        Some(base) => Ok(base.join(APP_DIR).join(CONFIG_FILE)),
        None => Err(ConfigError::ParseError(
            "no platform config directory for tabsize".into(),
        )),
    }
}

/// Write the commented default config to `path`, creating its directory.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", at.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| write_failed("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| write_failed("write", path, e))?;

    info!(path = %path.display(), "wrote default tabsize config");
    Ok(())
}
