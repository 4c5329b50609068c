//! Window scroll subscription feeding the active section signal.

use std::cell::RefCell;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::ev;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use crate::geometry::DomGeometry;
use crate::tracker::{ActiveSectionTracker, SectionId, TrackerConfig};

type HandleSlot = Mutex<Option<WindowListenerHandle>>;

/// Scoped window `scroll` listener.
///
/// The listener is removed when the guard is dropped or cancelled,
/// whichever comes first.
pub struct ScrollSubscription {
    handle: Arc<HandleSlot>,
}

impl ScrollSubscription {
    /// Subscribe `on_scroll` to window scroll events.
    pub fn new(on_scroll: impl Fn() + 'static) -> Self {
        Self::until(move || {
            on_scroll();
            false
        })
    }

    /// Subscribe until `on_scroll` returns `true`; the listener removes
    /// itself right after that call.
    pub fn until(on_scroll: impl Fn() -> bool + 'static) -> Self {
        let slot: Arc<HandleSlot> = Arc::new(Mutex::new(None));
        let weak = Arc::downgrade(&slot);
        let handle = window_event_listener(ev::scroll, move |_| {
            if on_scroll() {
                if let Some(slot) = weak.upgrade() {
                    release(&slot);
                }
            }
        });
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);
        Self { handle: slot }
    }

    pub fn is_active(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn cancel(&mut self) {
        release(&self.handle);
    }

    /// Tie the subscription to the current reactive owner: it is released
    /// when that owner is cleaned up.
    ///
    /// Without an owner there is nothing to tie to and `on_cleanup` would
    /// drop the guard on the spot, so the listener is kept for the life of
    /// the page instead.
    pub fn scoped(self) {
        if Owner::current().is_none() {
            tracing::warn!("scroll subscription outside a reactive owner, keeping it for the page");
            std::mem::forget(self);
            return;
        }
        on_cleanup(move || drop(self));
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn release(slot: &HandleSlot) {
    let handle = slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    if let Some(handle) = handle {
        handle.remove();
    }
}

/// Track the section under the probe line for as long as the calling
/// component lives.
///
/// The returned signal starts at [`SectionId::Profile`] and only changes
/// when a scroll lands the probe line inside a different section.
pub fn use_active_section(config: TrackerConfig) -> ReadSignal<SectionId> {
    let tracker = RefCell::new(ActiveSectionTracker::new(config));
    let (active, set_active) = signal(tracker.borrow().active());

    ScrollSubscription::new(move || {
        let geometry = match DomGeometry::current() {
            Ok(geometry) => geometry,
            Err(err) => {
                tracing::debug!(%err, "scroll without a document");
                return;
            }
        };
        if let Some(section) = tracker.borrow_mut().on_scroll(&geometry) {
            set_active.set(section);
        }
    })
    .scoped();

    tracing::debug!(probe_line = config.probe_line, "tracking active section");
    active
}
