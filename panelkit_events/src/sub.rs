// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered subscriber lists.
//!
//! [`Subscribers`] is the broadcast primitive used for every notification in
//! Panelkit: an explicit list of callbacks notified in registration order.
//! Registration hands back a [`SubscriptionId`] that removes exactly the
//! callback it was issued for, so independent consumers can come and go
//! without knowing about each other.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Identifies one registered subscriber within a [`Subscribers`] list.
///
/// Ids are unique for the lifetime of the list and are never reused, so a
/// stale id after [`Subscribers::unsubscribe`] is harmless.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubscriptionId").field(&self.0).finish()
    }
}

type Callback<E> = Box<dyn FnMut(&E)>;

/// An explicit, ordered list of event callbacks.
///
/// Callbacks are invoked in registration order on every [`emit`]. Most lists
/// in practice hold one or two subscribers, so entries are kept inline until
/// the list grows.
///
/// Callbacks must not subscribe to or unsubscribe from the list they are
/// being notified from; the list is exclusively borrowed for the duration of
/// an [`emit`].
///
/// [`emit`]: Subscribers::emit
///
/// # Example
///
/// ```rust
/// use panelkit_events::sub::Subscribers;
/// # use core::cell::Cell;
/// # use std::rc::Rc;
///
/// let mut subs: Subscribers<u32> = Subscribers::new();
/// let seen = Rc::new(Cell::new(0_u32));
///
/// let seen_a = Rc::clone(&seen);
/// let id = subs.subscribe(move |n| seen_a.set(seen_a.get() + n));
/// subs.emit(&3);
/// assert_eq!(seen.get(), 3);
///
/// assert!(subs.unsubscribe(id));
/// subs.emit(&3);
/// assert_eq!(seen.get(), 3);
/// ```
pub struct Subscribers<E> {
    entries: SmallVec<[(SubscriptionId, Callback<E>); 2]>,
    next_id: u64,
}

impl<E> Subscribers<E> {
    /// Creates an empty subscriber list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Registers a callback and returns its id.
    ///
    /// The callback is appended after every previously registered one and
    /// will be notified after them.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes the callback registered under `id`.
    ///
    /// Returns `true` if a callback was removed. Unknown (or already
    /// removed) ids are ignored, so releasing a subscription twice is safe.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Notifies every subscriber, in registration order.
    pub fn emit(&mut self, event: &E) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no subscribers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    #[test]
    fn emit_notifies_in_registration_order() {
        let mut subs: Subscribers<()> = Subscribers::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            subs.subscribe(move |()| order.borrow_mut().push(tag));
        }

        subs.emit(&());
        assert_eq!(*order.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_removes_only_the_matching_entry() {
        let mut subs: Subscribers<u32> = Subscribers::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_a = Rc::clone(&seen);
        let a = subs.subscribe(move |n| seen_a.borrow_mut().push(("a", *n)));
        let seen_b = Rc::clone(&seen);
        let _b = subs.subscribe(move |n| seen_b.borrow_mut().push(("b", *n)));

        assert!(subs.unsubscribe(a));
        subs.emit(&7);
        assert_eq!(*seen.borrow(), [("b", 7)]);
    }

    #[test]
    fn unsubscribe_twice_is_a_no_op() {
        let mut subs: Subscribers<u32> = Subscribers::new();
        let id = subs.subscribe(|_| {});

        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut subs: Subscribers<u32> = Subscribers::new();
        let a = subs.subscribe(|_| {});
        subs.unsubscribe(a);
        let b = subs.subscribe(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn emit_on_empty_list_is_safe() {
        let mut subs: Subscribers<u32> = Subscribers::new();
        subs.emit(&1);
        assert!(subs.is_empty());
    }
}
