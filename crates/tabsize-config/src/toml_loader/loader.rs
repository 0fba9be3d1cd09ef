//! Reading a tabsize config file into [`TabsizeConfig`].

use crate::schema::TabsizeConfig;
use crate::validation;
use std::io::ErrorKind;
use std::path::Path;
use tabsize_common::ConfigError;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse the config at `path`.
///
/// Sections and keys left out of the file take their defaults. Values that
/// fail validation are reported at `warn` but the parsed config is still
/// returned; `load_config_from` is the strict variant.
pub fn load_from_path(path: &Path) -> Result<TabsizeConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    let config: TabsizeConfig = toml::from_str(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "tabsize config has invalid values: {e}");
    }

    info!(path = %path.display(), "tabsize config loaded");
    Ok(config)
}

/// Parse the config at [`default_config_path`], seeding the file with the
/// commented template the first time. A freshly seeded file yields
/// [`TabsizeConfig::default`].
pub fn load_default() -> Result<TabsizeConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            debug!(path = %path.display(), "no tabsize config yet");
            create_default_config(&path)?;
            Ok(TabsizeConfig::default())
        }
        other => other,
    }
}
