// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Last-known pointer position tracking.
//!
//! [`PointerTracker`] records the most recent pointer position it was told
//! about. [`SharedPointerTracker`] wraps one tracker in a shared handle so a
//! single long-lived instance can be injected into every component that
//! wants to query the pointer, and attached to a [`PointerHub`] as an
//! ordinary subscriber — after any previously registered ones, so
//! independent consumers of the same feed coexist.
//!
//! There is deliberately no module-level singleton and no implicit
//! installation: the host constructs one tracker, attaches it to the feed it
//! owns, and hands clones to whoever needs them. Clones share the same
//! underlying instance.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use kurbo::Point;

use crate::pointer::{PointerEvent, PointerHub, PointerPhase};
use crate::sub::SubscriptionId;

/// Records the most recent pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    pos: Point,
}

impl PointerTracker {
    /// Creates a tracker positioned at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the position carried by `event`.
    pub fn note(&mut self, event: &PointerEvent) {
        self.pos = event.position();
    }

    /// Returns the last recorded position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Returns the last recorded X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    /// Returns the last recorded Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// A shared handle to one long-lived [`PointerTracker`].
///
/// Cloning the handle does not create a second tracker: every clone reads
/// and feeds the same instance, which is what makes it suitable for
/// dependency injection across many consumers.
#[derive(Clone, Default)]
pub struct SharedPointerTracker {
    inner: Rc<RefCell<PointerTracker>>,
}

impl SharedPointerTracker {
    /// Creates a new shared tracker positioned at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes this tracker to `hub`, recording every move sample.
    ///
    /// The subscription is appended after previously registered subscribers.
    /// Dropping the returned id does not detach the tracker; pass it back to
    /// [`PointerHub::unsubscribe`] to stop recording.
    pub fn attach(&self, hub: &PointerHub) -> SubscriptionId {
        let inner = Rc::clone(&self.inner);
        hub.subscribe(move |sample| {
            if sample.phase == PointerPhase::Move {
                inner.borrow_mut().note(&sample.event);
            }
        })
    }

    /// Returns the last recorded position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.inner.borrow().position()
    }

    /// Returns the last recorded X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.inner.borrow().x()
    }

    /// Returns the last recorded Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.inner.borrow().y()
    }

    /// Returns `true` if both handles share the same underlying tracker.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SharedPointerTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPointerTracker")
            .field("pos", &self.inner.borrow().position())
            .finish()
    }
}
