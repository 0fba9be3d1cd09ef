//! Size resolution and anchor-preserving window resizing.
//!
//! The window keeps its top-left corner fixed, so it appears to grow or
//! shrink from the bottom edge. Frames use a bottom-left origin: the top
//! edge is `y + height`.

use tabsize_common::types::{Rect, Size};
use tabsize_config::schema::ResizeConfig;
use tracing::{debug, warn};

use crate::host::HostWindow;

/// Fill every non-positive dimension of `reported` from `reference`.
pub fn resolve_size(reported: Size, reference: Size) -> Size {
    Size {
        width: if reported.width <= 0.0 {
            reference.width
        } else {
            reported.width
        },
        height: if reported.height <= 0.0 {
            reference.height
        } else {
            reported.height
        },
    }
}

/// Resize `current` to `outer` while keeping its top edge and left edge.
pub fn anchored_frame(current: Rect, outer: Size) -> Rect {
    Rect {
        x: current.x,
        y: current.y + current.height - outer.height,
        width: outer.width,
        height: outer.height,
    }
}

/// Applies content sizes to a host window.
#[derive(Debug, Clone, Default)]
pub struct ResizeCoordinator {
    config: ResizeConfig,
}

impl ResizeCoordinator {
    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// The frame the window would get for `content`.
    pub fn frame_for<W: HostWindow + ?Sized>(&self, window: &W, content: Size) -> Rect {
        anchored_frame(window.frame(), window.frame_size_for_content(content))
    }

    /// Resize `window` so its content area is `content`.
    ///
    /// The frame is set even when it equals the current one, unless
    /// `skip_unchanged_frames` is on. Host failures are logged, not
    /// returned. Returns the frame handed to the window.
    pub fn apply<W: HostWindow + ?Sized>(&self, window: &mut W, content: Size) -> Option<Rect> {
        let current = window.frame();
        let frame = anchored_frame(current, window.frame_size_for_content(content));

        if self.config.skip_unchanged_frames && frame == current {
            debug!("frame unchanged for content {content}, skipping");
            return None;
        }

        match window.set_frame(frame, self.config.animate) {
            Ok(()) => {
                debug!(
                    "resized window to {}x{} at ({}, {}) for content {content}",
                    frame.width, frame.height, frame.x, frame.y
                );
                Some(frame)
            }
            Err(e) => {
                warn!("failed to resize window for content {content}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HeadlessWindow, Result};
    use tabsize_common::errors::PlatformError;

    const REFERENCE: Size = Size {
        width: 400.0,
        height: 300.0,
    };

    #[test]
    fn resolve_keeps_positive_report() {
        for reported in [
            Size::new(1.0, 1.0),
            Size::new(640.0, 480.0),
            Size::new(0.5, 9000.0),
        ] {
            assert_eq!(resolve_size(reported, REFERENCE), reported);
        }
    }

    #[test]
    fn resolve_zero_returns_reference() {
        for reference in [REFERENCE, Size::new(1.0, 2.0), Size::ZERO] {
            assert_eq!(resolve_size(Size::ZERO, reference), reference);
        }
    }

    #[test]
    fn resolve_zero_width_keeps_reference_width() {
        assert_eq!(
            resolve_size(Size::new(0.0, 500.0), REFERENCE),
            Size::new(400.0, 500.0)
        );
    }

    #[test]
    fn resolve_negative_height_keeps_reference_height() {
        assert_eq!(
            resolve_size(Size::new(250.0, -1.0), REFERENCE),
            Size::new(250.0, 300.0)
        );
    }

    #[test]
    fn anchored_frame_keeps_top_left() {
        let current = Rect::new(100.0, 400.0, 480.0, 328.0);
        let frame = anchored_frame(current, Size::new(400.0, 528.0));
        assert_eq!(frame.x, 100.0);
        assert_eq!(frame.y, 400.0 + 328.0 - 528.0);
        assert_eq!(frame.top(), current.top());
        assert_eq!(frame.size(), Size::new(400.0, 528.0));
    }

    #[test]
    fn anchored_frame_shrinks_from_bottom() {
        let current = Rect::new(0.0, 100.0, 400.0, 600.0);
        let frame = anchored_frame(current, Size::new(400.0, 200.0));
        assert_eq!(frame.y, 500.0);
        assert_eq!(frame.top(), 700.0);
    }

    #[test]
    fn apply_converts_content_through_window() {
        let mut window = HeadlessWindow::new(Rect::new(10.0, 400.0, 480.0, 328.0), 28.0);
        let coordinator = ResizeCoordinator::default();

        let frame = coordinator
            .apply(&mut window, Size::new(400.0, 500.0))
            .unwrap();
        assert_eq!(frame, Rect::new(10.0, 400.0 + 328.0 - 528.0, 400.0, 528.0));
        assert_eq!(window.frame(), frame);
        assert!(window.history()[0].animate);
    }

    #[test]
    fn apply_sets_identical_frame_by_default() {
        let mut window = HeadlessWindow::new(Rect::new(0.0, 0.0, 400.0, 328.0), 28.0);
        let coordinator = ResizeCoordinator::default();

        coordinator.apply(&mut window, Size::new(400.0, 300.0));
        coordinator.apply(&mut window, Size::new(400.0, 300.0));
        assert_eq!(window.history().len(), 2);
        assert_eq!(window.history()[0].frame, window.history()[1].frame);
    }

    #[test]
    fn apply_can_skip_identical_frame() {
        let mut window = HeadlessWindow::new(Rect::new(0.0, 0.0, 400.0, 328.0), 28.0);
        let coordinator = ResizeCoordinator::new(ResizeConfig {
            animate: false,
            skip_unchanged_frames: true,
        });

        assert!(coordinator.apply(&mut window, Size::new(400.0, 300.0)).is_none());
        assert!(window.history().is_empty());

        assert!(coordinator.apply(&mut window, Size::new(400.0, 400.0)).is_some());
        assert_eq!(window.history().len(), 1);
        assert!(!window.history()[0].animate);
    }

    struct ClosedWindow;

    impl HostWindow for ClosedWindow {
        fn frame(&self) -> Rect {
            Rect::default()
        }

        fn frame_size_for_content(&self, content: Size) -> Size {
            content
        }

        fn set_frame(&mut self, _frame: Rect, _animate: bool) -> Result<()> {
            Err(PlatformError::WindowClosed)
        }
    }

    #[test]
    fn apply_swallows_host_errors() {
        let coordinator = ResizeCoordinator::default();
        assert!(coordinator
            .apply(&mut ClosedWindow, Size::new(100.0, 100.0))
            .is_none());
    }

    #[test]
    fn frame_for_does_not_touch_window() {
        let window = HeadlessWindow::new(Rect::new(0.0, 0.0, 400.0, 328.0), 28.0);
        let coordinator = ResizeCoordinator::default();
        let frame = coordinator.frame_for(&window, Size::new(400.0, 650.0));
        assert_eq!(frame.height, 678.0);
        assert!(window.history().is_empty());
    }
}
