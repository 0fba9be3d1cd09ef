//! Resize behavior settings.

use serde::{Deserialize, Serialize};

/// How the host window is resized when a tab's size is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Ask the host to animate frame changes.
    pub animate: bool,
    /// Skip the frame-set call when the computed frame equals the current one.
    /// Off by default: the host windowing layer owns change detection.
    pub skip_unchanged_frames: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            animate: true,
            skip_unchanged_frames: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_config_defaults() {
        let config = ResizeConfig::default();
        assert!(config.animate);
        assert!(!config.skip_unchanged_frames);
    }

    #[test]
    fn resize_config_partial_toml() {
        let config: ResizeConfig = toml::from_str("animate = false").unwrap();
        assert!(!config.animate);
        assert!(!config.skip_unchanged_frames);
    }
}
