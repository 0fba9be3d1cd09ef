//! Host window configuration types.

use serde::{Deserialize, Serialize};
use tabsize_common::Rect;

/// Geometry of the host window used when no native window is attached.
///
/// `titlebar_height` is the chrome added on top of the content area when
/// converting a content size into an outer frame size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Height of the title bar in points.
    pub titlebar_height: f64,
    pub x: f64,
    /// Bottom edge of the initial frame.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowConfig {
    pub fn initial_frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            titlebar_height: 28.0,
            x: 200.0,
            y: 400.0,
            width: 480.0,
            height: 328.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
