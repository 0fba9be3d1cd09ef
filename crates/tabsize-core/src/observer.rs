//! Subscription lifecycle for the selected tab's preferred size.
//!
//! At most one observation is live at a time. [`ObserverLifecycle::attach`]
//! tears down the current observation before subscribing, so the
//! detach-before-attach ordering holds by construction.

use serde::Serialize;
use tabsize_common::types::TabId;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::provider::{PreferenceProvider, SizeChange, Subscription};

/// A change notification tagged with the tab it came from and the
/// observation that delivered it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeNotification {
    pub tab: TabId,
    /// The `attach_count` of the observation that sent this. A tab observed
    /// again gets a new epoch, so earlier notifications no longer match.
    pub epoch: u64,
    pub change: SizeChange,
}

pub type NotificationSender = UnboundedSender<SizeNotification>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObservationState {
    Unattached,
    AttachedTo(TabId),
}

#[derive(Debug)]
struct ActiveObservation {
    tab: TabId,
    epoch: u64,
    subscription: Subscription,
}

#[derive(Debug, Default)]
pub struct ObserverLifecycle {
    active: Option<ActiveObservation>,
    attach_count: u64,
    detach_count: u64,
}

impl ObserverLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ObservationState {
        match &self.active {
            Some(active) => ObservationState::AttachedTo(active.tab),
            None => ObservationState::Unattached,
        }
    }

    pub fn attached_tab(&self) -> Option<TabId> {
        self.active.as_ref().map(|active| active.tab)
    }

    /// Tear down the live observation, if any. Returns the tab it observed.
    pub fn detach(&mut self) -> Option<TabId> {
        let active = self.active.take()?;
        active.subscription.unsubscribe();
        self.detach_count += 1;
        debug!("stopped observing {}", active.tab);
        Some(active.tab)
    }

    /// Whether `notification` was sent by the live observation.
    pub fn is_current(&self, notification: &SizeNotification) -> bool {
        self.active.as_ref().is_some_and(|active| {
            active.tab == notification.tab && active.epoch == notification.epoch
        })
    }

    /// Detach only if `tab` is the one being observed.
    pub fn detach_if(&mut self, tab: TabId) -> bool {
        if self.attached_tab() == Some(tab) {
            self.detach();
            true
        } else {
            false
        }
    }

    /// Observe `provider` on behalf of `tab`. Notifications are forwarded to
    /// `sink` and never handled on the provider's thread.
    pub fn attach(
        &mut self,
        tab: TabId,
        provider: &dyn PreferenceProvider,
        sink: NotificationSender,
    ) {
        self.detach();
        debug_assert!(self.active.is_none());

        self.attach_count += 1;
        let epoch = self.attach_count;
        let subscription = provider.subscribe(Box::new(move |change| {
            // The negotiator may already be gone; nothing to deliver to.
            let _ = sink.send(SizeNotification { tab, epoch, change });
        }));
        self.active = Some(ActiveObservation {
            tab,
            epoch,
            subscription,
        });
        debug!("observing {tab} (epoch {epoch})");
    }

    /// Number of subscriptions installed so far.
    pub fn attach_count(&self) -> u64 {
        self.attach_count
    }

    /// Number of subscriptions torn down explicitly so far.
    pub fn detach_count(&self) -> u64 {
        self.detach_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::PreferredSize;
    use tabsize_common::types::Size;
    use tokio::sync::mpsc;

    #[test]
    fn starts_unattached() {
        let observer = ObserverLifecycle::new();
        assert_eq!(observer.state(), ObservationState::Unattached);
        assert_eq!(observer.attached_tab(), None);
    }

    #[test]
    fn attach_then_detach() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let provider = PreferredSize::new(Size::new(400.0, 500.0));
        let mut observer = ObserverLifecycle::new();

        observer.attach(TabId(1), &provider, tx);
        assert_eq!(observer.state(), ObservationState::AttachedTo(TabId(1)));
        assert_eq!(provider.subscriber_count(), 1);

        assert_eq!(observer.detach(), Some(TabId(1)));
        assert_eq!(observer.state(), ObservationState::Unattached);
        assert_eq!(provider.subscriber_count(), 0);
        assert_eq!(observer.detach(), None);
    }

    #[test]
    fn attach_replaces_previous_observation() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let first = PreferredSize::new(Size::new(1.0, 1.0));
        let second = PreferredSize::new(Size::new(2.0, 2.0));
        let mut observer = ObserverLifecycle::new();

        observer.attach(TabId(1), &first, tx.clone());
        observer.attach(TabId(2), &second, tx);

        assert_eq!(first.subscriber_count(), 0);
        assert_eq!(second.subscriber_count(), 1);
        assert_eq!(observer.attach_count(), 2);
        assert_eq!(observer.detach_count(), 1);
    }

    #[test]
    fn detach_if_other_tab_is_noop() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let provider = PreferredSize::new(Size::new(1.0, 1.0));
        let mut observer = ObserverLifecycle::new();

        observer.attach(TabId(1), &provider, tx);
        assert!(!observer.detach_if(TabId(2)));
        assert_eq!(observer.attached_tab(), Some(TabId(1)));
        assert!(observer.detach_if(TabId(1)));
        assert_eq!(provider.subscriber_count(), 0);
    }

    #[test]
    fn notifications_are_tagged_and_forwarded() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let provider = PreferredSize::new(Size::new(400.0, 500.0));
        let mut observer = ObserverLifecycle::new();

        observer.attach(TabId(7), &provider, tx);
        provider.set(Size::new(400.0, 650.0));

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.tab, TabId(7));
        assert_eq!(notification.epoch, 1);
        assert_eq!(notification.change.new, Size::new(400.0, 650.0));
        assert_eq!(notification.change.old, Some(Size::new(400.0, 500.0)));
    }

    #[test]
    fn reattaching_same_tab_retires_earlier_notifications() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let provider = PreferredSize::new(Size::new(400.0, 500.0));
        let mut observer = ObserverLifecycle::new();

        observer.attach(TabId(7), &provider, tx.clone());
        provider.set(Size::new(400.0, 650.0));
        let earlier = rx.try_recv().unwrap();
        assert!(observer.is_current(&earlier));

        observer.attach(TabId(7), &provider, tx);
        provider.set(Size::new(400.0, 400.0));
        let later = rx.try_recv().unwrap();

        assert!(!observer.is_current(&earlier));
        assert!(observer.is_current(&later));
        assert_eq!(later.epoch, 2);

        observer.detach();
        assert!(!observer.is_current(&later));
    }

    #[test]
    fn dropping_lifecycle_tears_down_subscription() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let provider = PreferredSize::new(Size::new(1.0, 1.0));
        let mut observer = ObserverLifecycle::new();
        observer.attach(TabId(1), &provider, tx);

        drop(observer);
        assert_eq!(provider.subscriber_count(), 0);
    }

    #[test]
    fn state_serializes() {
        let json = serde_json::to_string(&ObservationState::AttachedTo(TabId(3))).unwrap();
        assert_eq!(json, r#"{"AttachedTo":3}"#);
    }
}
