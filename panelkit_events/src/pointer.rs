// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer samples and the injected pointer feed.
//!
//! A [`PointerEvent`] carries the pointer position in one of two legacy
//! coordinate conventions: absolute page coordinates, or viewport (client)
//! coordinates paired with the document scroll offset. [`PointerEvent::position`]
//! resolves whichever is present, preferring page coordinates and falling
//! back to the origin when neither was recorded.
//!
//! [`PointerHub`] is the document-level feed of samples. It is an explicitly
//! constructed, cloneable handle that hosts inject into whichever components
//! need pointer input; consumers subscribe and are notified in registration
//! order.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::sub::{Subscribers, SubscriptionId};

/// The phase of a pointer sample: press, drag, or release.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The pointer was pressed.
    Down,
    /// The pointer moved.
    Move,
    /// The pointer was released.
    Up,
}

/// One observed pointer event.
///
/// Events record whichever coordinate convention the input source provided.
/// Sources that report absolute page coordinates fill `page`; sources that
/// report viewport coordinates fill `client` together with the document
/// `scroll_offset` at the time of the event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Absolute position in page coordinates, if the source provided it.
    pub page: Option<Point>,
    /// Position in viewport (client) coordinates, if the source provided it.
    pub client: Option<Point>,
    /// Document scroll offset to add to `client` coordinates.
    pub scroll_offset: Vec2,
}

impl PointerEvent {
    /// Creates an event from absolute page coordinates.
    #[must_use]
    pub fn from_page(pos: Point) -> Self {
        Self {
            page: Some(pos),
            client: None,
            scroll_offset: Vec2::ZERO,
        }
    }

    /// Creates an event from viewport coordinates plus the scroll offset.
    #[must_use]
    pub fn from_client(pos: Point, scroll_offset: Vec2) -> Self {
        Self {
            page: None,
            client: Some(pos),
            scroll_offset,
        }
    }

    /// Resolves the event position in page coordinates.
    ///
    /// Prefers `page`, then `client` adjusted by `scroll_offset`, and
    /// defaults to the origin when the source recorded neither.
    #[must_use]
    pub fn position(&self) -> Point {
        if let Some(page) = self.page {
            return page;
        }
        if let Some(client) = self.client {
            return client + self.scroll_offset;
        }
        Point::ZERO
    }
}

/// A pointer sample: a phase paired with the event that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Which phase of interaction this sample belongs to.
    pub phase: PointerPhase,
    /// The observed event.
    pub event: PointerEvent,
}

/// A cloneable, explicitly injected feed of pointer samples.
///
/// Cloning a hub yields another handle to the same feed; subscribers
/// registered through any handle observe every dispatched sample. Handlers
/// run synchronously, in registration order, and must not subscribe to or
/// unsubscribe from the hub they are being notified from.
#[derive(Clone, Default)]
pub struct PointerHub {
    subscribers: Rc<RefCell<Subscribers<PointerSample>>>,
}

impl PointerHub {
    /// Creates a new, empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for every dispatched sample.
    pub fn subscribe(&self, callback: impl FnMut(&PointerSample) + 'static) -> SubscriptionId {
        self.subscribers.borrow_mut().subscribe(callback)
    }

    /// Removes a previously registered callback.
    ///
    /// Returns `true` if a callback was removed; stale ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.borrow_mut().unsubscribe(id)
    }

    /// Dispatches one sample to every subscriber, in registration order.
    pub fn dispatch(&self, phase: PointerPhase, event: PointerEvent) {
        let sample = PointerSample { phase, event };
        self.subscribers.borrow_mut().emit(&sample);
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Returns `true` if both handles refer to the same feed.
    #[must_use]
    pub fn same_feed(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.subscribers, &other.subscribers)
    }
}

impl fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHub")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn position_prefers_page_coordinates() {
        let event = PointerEvent {
            page: Some(Point::new(10.0, 20.0)),
            client: Some(Point::new(999.0, 999.0)),
            scroll_offset: Vec2::new(5.0, 5.0),
        };
        assert_eq!(event.position(), Point::new(10.0, 20.0));
    }

    #[test]
    fn position_falls_back_to_client_plus_scroll() {
        let event = PointerEvent::from_client(Point::new(10.0, 20.0), Vec2::new(3.0, 4.0));
        assert_eq!(event.position(), Point::new(13.0, 24.0));
    }

    #[test]
    fn position_defaults_to_origin() {
        let event = PointerEvent {
            page: None,
            client: None,
            scroll_offset: Vec2::ZERO,
        };
        assert_eq!(event.position(), Point::ZERO);
    }

    #[test]
    fn dispatch_reaches_subscribers_through_any_handle() {
        let hub = PointerHub::new();
        let clone = hub.clone();
        assert!(hub.same_feed(&clone));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        clone.subscribe(move |sample| sink.borrow_mut().push(sample.event.position()));

        hub.dispatch(
            PointerPhase::Move,
            PointerEvent::from_page(Point::new(1.0, 2.0)),
        );
        assert_eq!(*seen.borrow(), [Point::new(1.0, 2.0)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hub = PointerHub::new();
        let seen = Rc::new(RefCell::new(0_u32));
        let sink = Rc::clone(&seen);
        let id = hub.subscribe(move |_| *sink.borrow_mut() += 1);

        hub.dispatch(
            PointerPhase::Down,
            PointerEvent::from_page(Point::new(0.0, 0.0)),
        );
        assert!(hub.unsubscribe(id));
        hub.dispatch(
            PointerPhase::Up,
            PointerEvent::from_page(Point::new(0.0, 0.0)),
        );
        assert_eq!(*seen.borrow(), 1);
    }
}
