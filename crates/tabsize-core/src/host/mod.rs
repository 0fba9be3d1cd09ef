//! Collaborators supplied by the host tab-container framework.
//!
//! The negotiator never draws tabs or window chrome. It reads each tab's
//! rendered size, asks the window to convert a content size into an outer
//! frame size, and hands the final frame back to the window.

use std::sync::Arc;

use tabsize_common::errors::PlatformError;
use tabsize_common::types::{Rect, Size};

use crate::provider::PreferenceProvider;

pub mod headless;

pub use headless::{FrameChange, HeadlessWindow};

pub type Result<T> = std::result::Result<T, PlatformError>;

/// The content of one tab, as seen by the negotiator.
pub trait TabContent {
    /// Current rendered size of the tab's view, or `None` when the tab has
    /// no view loaded.
    fn rendered_size(&self) -> Option<Size>;

    /// The tab's preferred-size capability. Tabs without one are sized once,
    /// from their rendered size, the first time they are selected.
    fn preference_provider(&self) -> Option<Arc<dyn PreferenceProvider>> {
        None
    }
}

/// The window that hosts the tab container.
pub trait HostWindow {
    /// Current outer frame.
    fn frame(&self) -> Rect;

    /// Outer frame size needed to show `content`, chrome included.
    fn frame_size_for_content(&self, content: Size) -> Size;

    /// Replace the outer frame.
    fn set_frame(&mut self, frame: Rect, animate: bool) -> Result<()>;
}

impl<W: HostWindow + ?Sized> HostWindow for Box<W> {
    fn frame(&self) -> Rect {
        (**self).frame()
    }

    fn frame_size_for_content(&self, content: Size) -> Size {
        (**self).frame_size_for_content(content)
    }

    fn set_frame(&mut self, frame: Rect, animate: bool) -> Result<()> {
        (**self).set_frame(frame, animate)
    }
}
