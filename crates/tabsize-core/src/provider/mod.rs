//! The preferred-size capability a tab controller can implement.
//!
//! A provider reports the content size its tab would like and lets the
//! negotiator register one callback for changes. A reported dimension
//! `<= 0` means "keep the reference size on this axis".

mod preferred;
mod subscription;

use serde::Serialize;
use tabsize_common::types::Size;

pub use preferred::PreferredSize;
pub use subscription::Subscription;

/// A change of a provider's preferred size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeChange {
    /// Previous value, absent on the first notification.
    pub old: Option<Size>,
    pub new: Size,
}

/// Change callback. Providers may invoke it from any thread.
pub type SizeCallback = Box<dyn Fn(SizeChange) + Send + Sync>;

pub trait PreferenceProvider: Send + Sync {
    /// The size the tab would like its content area to have.
    fn preferred_size(&self) -> Size;

    /// Register `callback` for preferred-size changes. The callback stays
    /// registered until the returned handle is unsubscribed or dropped.
    fn subscribe(&self, callback: SizeCallback) -> Subscription;
}
