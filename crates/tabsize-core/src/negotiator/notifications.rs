//! Change-notification handling and the deferred resize queue.

use tabsize_common::types::TabId;
use tracing::debug;

use crate::host::HostWindow;
use crate::provider::SizeChange;
use crate::resize::resolve_size;

use super::{DeferredResize, PumpStats, SizeNegotiator};

impl<W: HostWindow> SizeNegotiator<W> {
    /// Handle a preferred-size change from `tab`.
    ///
    /// Only the observed tab counts. The new size is resolved against the
    /// cached one, cached, and its resize queued for the next UI turn.
    /// Returns `true` if a resize was queued.
    pub fn on_change_notification(&mut self, tab: TabId, change: SizeChange) -> bool {
        if self.observer.attached_tab() != Some(tab) {
            debug!("ignoring size change from unobserved {tab}");
            return false;
        }
        let Some(reference) = self.cache.get(tab) else {
            debug!("ignoring size change from {tab}: nothing cached");
            return false;
        };

        let content = resolve_size(change.new, reference);
        if !self.store_size(tab, content) {
            return false;
        }
        self.deferred.push_back(DeferredResize { tab, content });
        true
    }

    /// Handle every notification received since the last call. Notifications
    /// sent by an observation that has since been torn down are dropped,
    /// even when the same tab is observed again. Returns how many were
    /// received.
    pub fn drain_notifications(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(notification) = self.notify_rx.try_recv() {
            handled += 1;
            if !self.observer.is_current(&notification) {
                debug!(
                    "dropping size change from retired observation of {} (epoch {})",
                    notification.tab, notification.epoch
                );
                continue;
            }
            self.on_change_notification(notification.tab, notification.change);
        }
        handled
    }

    /// Apply the resizes queued so far, oldest first. A resize queued for a
    /// tab that is no longer selected is still applied; the next
    /// `did_select` corrects it. Returns how many were applied.
    pub fn run_deferred(&mut self) -> usize {
        let queued = std::mem::take(&mut self.deferred);
        let count = queued.len();
        for resize in queued {
            self.apply_content_size(resize.content);
        }
        count
    }

    /// One UI turn: apply resizes queued on earlier turns, then handle
    /// pending notifications. Resizes they queue run on the next turn.
    pub fn pump(&mut self) -> PumpStats {
        let resized = self.run_deferred();
        let notifications = self.drain_notifications();
        PumpStats {
            resized,
            notifications,
        }
    }
}
