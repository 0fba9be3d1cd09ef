//! Headless host window.
//!
//! Used where no native window is attached: tests, the demo binary, and
//! embedders that want to compute frames without applying them. Frames are
//! kept in memory and every `set_frame` call is recorded.

use serde::Serialize;
use tabsize_common::types::{Rect, Size};
use tabsize_config::schema::WindowConfig;

use super::{HostWindow, Result};

/// One recorded `set_frame` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameChange {
    pub frame: Rect,
    pub animate: bool,
}

/// A window with a fixed-height title bar and no side or bottom chrome.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    frame: Rect,
    titlebar_height: f64,
    history: Vec<FrameChange>,
}

impl HeadlessWindow {
    pub fn new(frame: Rect, titlebar_height: f64) -> Self {
        Self {
            frame,
            titlebar_height,
            history: Vec::new(),
        }
    }

    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(config.initial_frame(), config.titlebar_height)
    }

    /// Every frame passed to `set_frame`, oldest first.
    pub fn history(&self) -> &[FrameChange] {
        &self.history
    }

    pub fn titlebar_height(&self) -> f64 {
        self.titlebar_height
    }
}

impl HostWindow for HeadlessWindow {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn frame_size_for_content(&self, content: Size) -> Size {
        Size::new(content.width, content.height + self.titlebar_height)
    }

    fn set_frame(&mut self, frame: Rect, animate: bool) -> Result<()> {
        self.frame = frame;
        self.history.push(FrameChange { frame, animate });
        Ok(())
    }
}
