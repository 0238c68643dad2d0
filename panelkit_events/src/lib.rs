// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panelkit Events: subscriber lists, the pointer event model, and pointer
//! tracking.
//!
//! This crate provides the event plumbing shared by Panelkit widgets:
//!
//! - [`sub::Subscribers`]: an explicit, ordered list of callbacks. This is
//!   the broadcast primitive everything else builds on; there is no hidden
//!   global handler slot to wrap or chain.
//! - [`pointer`]: the pointer sample model — [`pointer::PointerEvent`] with
//!   its legacy coordinate-convention fallback, [`pointer::PointerPhase`],
//!   and [`pointer::PointerHub`], a cloneable injected feed of samples.
//! - [`tracker`]: [`tracker::SharedPointerTracker`], a long-lived shared
//!   record of the most recent pointer position, attached explicitly to a
//!   hub rather than installed as a process-wide singleton.
//! - [`gesture`]: [`gesture::PressGesture`], the press/drag/release state
//!   that arms on a press inside a widget rectangle and follows the pointer
//!   document-wide until release.
//!
//! ## Usage Patterns
//!
//! ### An injected pointer feed
//!
//! ```rust
//! use kurbo::Point;
//! use panelkit_events::pointer::{PointerEvent, PointerHub, PointerPhase};
//! use panelkit_events::tracker::SharedPointerTracker;
//!
//! let hub = PointerHub::new();
//! let tracker = SharedPointerTracker::new();
//! let _sub = tracker.attach(&hub);
//!
//! hub.dispatch(PointerPhase::Move, PointerEvent::from_page(Point::new(30.0, 40.0)));
//! assert_eq!(tracker.position(), Point::new(30.0, 40.0));
//! ```
//!
//! ### Rectangle-scoped drags
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use panelkit_events::gesture::PressGesture;
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let mut gesture = PressGesture::default();
//!
//! assert!(gesture.press(Point::new(10.0, 10.0), bounds));
//! // Once armed, updates outside the rectangle still belong to the drag.
//! assert!(gesture.update(Point::new(150.0, 50.0)).is_some());
//! assert!(gesture.release(Point::new(150.0, 50.0)).is_some());
//! assert!(!gesture.is_active());
//! ```
//!
//! All dispatch is synchronous and single-threaded: a sample is fully
//! processed by every subscriber, in registration order, before the next
//! one is handled.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod gesture;
pub mod pointer;
pub mod sub;
pub mod tracker;

pub use sub::{Subscribers, SubscriptionId};
