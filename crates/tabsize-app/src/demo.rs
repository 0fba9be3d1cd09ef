//! Scripted walk through a two-tab preferences window.
//!
//! "General" has no preferred size and keeps the size it is first shown at.
//! "Advanced" asks for a taller content area and grows later, the way a
//! pane does when a disclosure section expands.

use std::sync::Arc;

use tabsize_common::types::{Size, TabId};
use tabsize_config::TabsizeConfig;
use tabsize_core::{
    HeadlessWindow, HostWindow, PreferenceProvider, PreferredSize, SizeNegotiator, TabContent,
};

struct StaticTab {
    rendered: Size,
}

impl TabContent for StaticTab {
    fn rendered_size(&self) -> Option<Size> {
        Some(self.rendered)
    }
}

struct AdjustableTab {
    rendered: Size,
    preferred: PreferredSize,
}

impl TabContent for AdjustableTab {
    fn rendered_size(&self) -> Option<Size> {
        Some(self.rendered)
    }

    fn preference_provider(&self) -> Option<Arc<dyn PreferenceProvider>> {
        Some(Arc::new(self.preferred.clone()))
    }
}

pub fn run(config: &TabsizeConfig) {
    let window = HeadlessWindow::from_config(&config.window);
    let mut negotiator = SizeNegotiator::with_window(window, config.resize.clone());

    let general = negotiator.register_tab(Box::new(StaticTab {
        rendered: Size::new(400.0, 300.0),
    }));

    // Width 0: keep whatever width the tab is shown at.
    let advanced_size = PreferredSize::new(Size::new(0.0, 500.0));
    let advanced = negotiator.register_tab(Box::new(AdjustableTab {
        rendered: Size::new(400.0, 300.0),
        preferred: advanced_size.clone(),
    }));

    log_frame(&negotiator, "initial");

    negotiator.select(general);
    log_frame(&negotiator, "selected General");

    negotiator.select(advanced);
    log_frame(&negotiator, "selected Advanced");

    advanced_size.set(Size::new(400.0, 650.0));
    let turn = negotiator.pump();
    tracing::info!(
        "UI turn: {} notification(s), {} resize(s) pending",
        turn.notifications,
        negotiator.pending_resizes().len()
    );
    let turn = negotiator.pump();
    tracing::info!("UI turn: {} resize(s) applied", turn.resized);
    log_frame(&negotiator, "Advanced expanded");

    negotiator.select(general);
    log_frame(&negotiator, "back to General");

    negotiator.remove_tab(advanced);
    tracing::info!(
        "removed Advanced ({} tab(s) left, observation {:?})",
        negotiator.tab_count(),
        negotiator.observation()
    );

    log_cache(&negotiator, &[general, advanced]);
}

fn log_frame(negotiator: &SizeNegotiator<HeadlessWindow>, label: &str) {
    if let Some(window) = negotiator.window() {
        let frame = window.frame();
        tracing::info!(
            "{label}: frame {}x{} at ({}, {}), top edge {}",
            frame.width,
            frame.height,
            frame.x,
            frame.y,
            frame.top()
        );
    }
}

fn log_cache(negotiator: &SizeNegotiator<HeadlessWindow>, tabs: &[TabId]) {
    for &tab in tabs {
        match negotiator.cached_size(tab) {
            Some(size) => tracing::info!("{tab}: cached {size}"),
            None => tracing::info!("{tab}: not cached"),
        }
    }
}
