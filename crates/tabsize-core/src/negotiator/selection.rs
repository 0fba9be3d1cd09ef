//! Selection-transition handling for SizeNegotiator.

use tabsize_common::types::{Size, TabId};
use tracing::debug;

use crate::host::HostWindow;
use crate::resize::resolve_size;

use super::SizeNegotiator;

impl<W: HostWindow> SizeNegotiator<W> {
    /// The host is about to show `tab`.
    ///
    /// Stops observing the outgoing tab, resolves and caches the incoming
    /// tab's size, then observes the incoming tab if it has a provider.
    pub fn will_select(&mut self, tab: TabId) {
        self.observer.detach();

        let Some(content) = self.tabs.get(&tab) else {
            debug!("will_select: unknown {tab}");
            return;
        };
        let Some(rendered) = content.rendered_size() else {
            debug!("will_select: {tab} has no view");
            return;
        };
        let provider = content.preference_provider();

        match provider {
            Some(provider) => {
                let reference = self.cache.get(tab).unwrap_or(rendered);
                let size = resolve_size(provider.preferred_size(), reference);
                self.store_size(tab, size);
                self.observer
                    .attach(tab, provider.as_ref(), self.notify_tx.clone());
            }
            // Size once; a later rendered size may be mid-transition.
            None if self.cache.contains(tab) => {}
            None => {
                self.store_size(tab, rendered);
            }
        }
    }

    /// The host now shows `tab`. Applies its cached size, if any.
    pub fn did_select(&mut self, tab: TabId) {
        if !self.tabs.contains_key(&tab) {
            debug!("did_select: unknown {tab}");
            return;
        }
        self.selected = Some(tab);

        match self.cache.get(tab) {
            Some(content) => self.apply_content_size(content),
            None => debug!("did_select: no size cached for {tab}"),
        }
    }

    /// `will_select` followed by `did_select`.
    pub fn select(&mut self, tab: TabId) {
        self.will_select(tab);
        self.did_select(tab);
    }

    /// `tab` left the container. Its observation, cached size and queued
    /// resizes are dropped.
    pub fn remove_tab(&mut self, tab: TabId) {
        self.observer.detach_if(tab);
        self.cache.remove(tab);
        self.deferred.retain(|resize| resize.tab != tab);
        if self.selected == Some(tab) {
            self.selected = None;
        }
        if self.tabs.remove(&tab).is_some() {
            debug!("removed {tab}");
        }
    }

    /// Cache `size` for `tab` unless a dimension is still unresolved.
    pub(super) fn store_size(&mut self, tab: TabId, size: Size) -> bool {
        if !size.is_resolved() {
            debug!("not caching unresolved size {size} for {tab}");
            return false;
        }
        self.cache.set(tab, size);
        true
    }
}
