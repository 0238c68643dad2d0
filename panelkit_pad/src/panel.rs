// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parent panel surface.
//!
//! A [`Panel`] is the container widgets are constructed into. It owns the
//! content width that layout grants its children and the ordered
//! `scroll-size-change` subscriber list widgets use to learn about it:
//! whenever the width changes (or the host wants a re-layout announced),
//! every subscribed widget recomputes its pixel box and redraws.
//!
//! The panel deliberately does no layout of its own beyond the single
//! content width; widget placement is the host's concern.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use panelkit_events::sub::{Subscribers, SubscriptionId};

/// Notification payload for a panel layout change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollSizeChange {
    /// The width, in pixels, the panel now grants its children.
    pub content_width: f64,
}

#[derive(Debug)]
struct PanelInner {
    content_width: f64,
    scroll_size: Subscribers<ScrollSizeChange>,
}

/// A cloneable handle to one panel surface.
///
/// Clones share the same panel. Subscribers are notified synchronously and
/// in registration order; a subscriber must not call back into the panel it
/// is being notified from.
#[derive(Clone)]
pub struct Panel {
    inner: Rc<RefCell<PanelInner>>,
}

impl Panel {
    /// Creates a panel granting its children the given content width.
    #[must_use]
    pub fn new(content_width: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PanelInner {
                content_width,
                scroll_size: Subscribers::new(),
            })),
        }
    }

    /// Returns the current content width.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.inner.borrow().content_width
    }

    /// Stores a new content width and notifies subscribers.
    pub fn set_content_width(&self, content_width: f64) {
        let mut inner = self.inner.borrow_mut();
        inner.content_width = content_width;
        inner.scroll_size.emit(&ScrollSizeChange { content_width });
    }

    /// Re-announces the current width without changing it.
    pub fn notify_scroll_size_change(&self) {
        let mut inner = self.inner.borrow_mut();
        let change = ScrollSizeChange {
            content_width: inner.content_width,
        };
        inner.scroll_size.emit(&change);
    }

    /// Registers a `scroll-size-change` listener.
    pub fn on_scroll_size_change(
        &self,
        callback: impl FnMut(&ScrollSizeChange) + 'static,
    ) -> SubscriptionId {
        self.inner.borrow_mut().scroll_size.subscribe(callback)
    }

    /// Removes a previously registered listener.
    ///
    /// Returns `true` if a listener was removed; stale ids are ignored.
    pub fn remove_scroll_size_listener(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().scroll_size.unsubscribe(id)
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().scroll_size.len()
    }
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Panel")
            .field("content_width", &inner.content_width)
            .field("listeners", &inner.scroll_size.len())
            .finish()
    }
}
