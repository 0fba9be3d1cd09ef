//! Configuration schema types for tabsize.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod resize;
mod window;

pub use logging::*;
pub use resize::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TabsizeConfig {
    pub resize: ResizeConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
