//! Core types and constructors for SizeNegotiator.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;
use tabsize_common::id::TabIdAllocator;
use tabsize_common::types::{Size, TabId};
use tabsize_config::schema::ResizeConfig;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::debug;

use crate::cache::SizeCache;
use crate::host::{HostWindow, TabContent};
use crate::observer::{NotificationSender, ObservationState, ObserverLifecycle, SizeNotification};
use crate::resize::ResizeCoordinator;

/// A resize queued for the next UI turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeferredResize {
    pub tab: TabId,
    pub content: Size,
}

/// What one [`SizeNegotiator::pump`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Deferred resizes applied.
    pub resized: usize,
    /// Change notifications handled.
    pub notifications: usize,
}

/// Negotiates the host window's size with the selected tab.
pub struct SizeNegotiator<W: HostWindow> {
    /// Registered tabs by identity.
    pub(super) tabs: HashMap<TabId, Box<dyn TabContent>>,
    pub(super) ids: TabIdAllocator,
    /// Last resolved content size per tab.
    pub(super) cache: SizeCache,
    pub(super) observer: ObserverLifecycle,
    pub(super) coordinator: ResizeCoordinator,
    /// `None` while the container is not in a window.
    pub(super) window: Option<W>,
    /// The tab the host last reported as selected.
    pub(super) selected: Option<TabId>,
    pub(super) notify_tx: NotificationSender,
    pub(super) notify_rx: UnboundedReceiver<SizeNotification>,
    /// Resizes waiting for the next UI turn, oldest first.
    pub(super) deferred: VecDeque<DeferredResize>,
}

impl<W: HostWindow> SizeNegotiator<W> {
    /// Create a negotiator that is not attached to a window yet.
    pub fn new(config: ResizeConfig) -> Self {
        let (notify_tx, notify_rx) = mpsc::unbounded_channel();
        Self {
            tabs: HashMap::new(),
            ids: TabIdAllocator::new(),
            cache: SizeCache::new(),
            observer: ObserverLifecycle::new(),
            coordinator: ResizeCoordinator::new(config),
            window: None,
            selected: None,
            notify_tx,
            notify_rx,
            deferred: VecDeque::new(),
        }
    }

    pub fn with_window(window: W, config: ResizeConfig) -> Self {
        let mut negotiator = Self::new(config);
        negotiator.window = Some(window);
        negotiator
    }

    // -- Window --

    pub fn set_window(&mut self, window: W) {
        self.window = Some(window);
    }

    pub fn take_window(&mut self) -> Option<W> {
        self.window.take()
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut W> {
        self.window.as_mut()
    }

    // -- Tabs --

    /// Register a tab and issue its identity. Ids held by registered tabs
    /// are skipped once the allocator has wrapped.
    pub fn register_tab(&mut self, content: Box<dyn TabContent>) -> TabId {
        let mut id = self.ids.next_id();
        while self.tabs.contains_key(&id) {
            id = self.ids.next_id();
        }
        self.tabs.insert(id, content);
        debug!("registered {id}");
        id
    }

    pub fn contains_tab(&self, tab: TabId) -> bool {
        self.tabs.contains_key(&tab)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    // -- Accessors --

    pub fn selected(&self) -> Option<TabId> {
        self.selected
    }

    pub fn observation(&self) -> ObservationState {
        self.observer.state()
    }

    pub fn observer(&self) -> &ObserverLifecycle {
        &self.observer
    }

    pub fn cached_size(&self, tab: TabId) -> Option<Size> {
        self.cache.get(tab)
    }

    pub fn cache(&self) -> &SizeCache {
        &self.cache
    }

    pub fn pending_resizes(&self) -> &VecDeque<DeferredResize> {
        &self.deferred
    }

    pub fn coordinator(&self) -> &ResizeCoordinator {
        &self.coordinator
    }

    /// Resize the window for `content`, if there is a window.
    pub(super) fn apply_content_size(&mut self, content: Size) {
        match self.window.as_mut() {
            Some(window) => {
                self.coordinator.apply(window, content);
            }
            None => debug!("no host window, skipping resize to {content}"),
        }
    }
}
