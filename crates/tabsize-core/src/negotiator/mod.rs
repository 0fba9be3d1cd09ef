//! The SizeNegotiator drives the cache, the observer lifecycle and the
//! resize coordinator from the host's tab-selection protocol.
//!
//! Entry points, all called on the UI thread:
//!
//! - [`SizeNegotiator::will_select`] / [`SizeNegotiator::did_select`]:
//!   the two halves of a selection change.
//! - [`SizeNegotiator::remove_tab`]: a tab left the container.
//! - [`SizeNegotiator::pump`]: one turn of the UI loop. Applies resizes
//!   queued on earlier turns, then handles pending change notifications.
//!
//! Change notifications may fire on any thread. They are only queued there;
//! the cache update happens in [`SizeNegotiator::drain_notifications`] and
//! the resize one turn later in [`SizeNegotiator::run_deferred`].

mod notifications;
mod selection;
mod types;

pub use types::*;
