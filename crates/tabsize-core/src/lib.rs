//! Content-size negotiation between a tab container and its window.
//!
//! Each tab may advertise a preferred content size through a
//! [`PreferenceProvider`]. The [`SizeNegotiator`] caches the resolved size
//! per tab, observes the selected tab for changes, and resizes the host
//! window with its top-left corner held in place.

pub mod cache;
pub mod host;
pub mod negotiator;
pub mod observer;
pub mod provider;
pub mod resize;

pub use cache::SizeCache;
pub use host::{HeadlessWindow, HostWindow, TabContent};
pub use negotiator::{DeferredResize, PumpStats, SizeNegotiator};
pub use observer::{ObservationState, ObserverLifecycle};
pub use provider::{PreferenceProvider, PreferredSize, SizeChange, Subscription};
pub use resize::{anchored_frame, resolve_size, ResizeCoordinator};
