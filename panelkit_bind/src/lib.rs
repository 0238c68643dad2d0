// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panelkit Bind: host objects, slot bindings, and the bound-widget core.
//!
//! Control-panel widgets edit data the *host* owns. The host hands a widget
//! an object and a key; the widget validates the slot behind that key once,
//! at construction, and from then on reads and writes it as its value. This
//! crate provides that machinery:
//!
//! - [`object::HostObject`]: a string-keyed map of type-erased slots, so
//!   hosts can mix numeric sequences with whatever else they store.
//! - [`binding::NumericBinding`]: a validated handle to a `Vec<f64>` slot of
//!   at least two elements. Validation happens at bind time and fails with a
//!   [`error::BindError`] before anything else is wired up.
//! - [`widget::WidgetCore`]: the capability shared by bound widgets —
//!   identity, labeling, the binding, and change notification — held by
//!   composition rather than inherited from a base class.
//!
//! ## Minimal example
//!
//! ```rust
//! use panelkit_bind::binding::NumericBinding;
//! use panelkit_bind::object::HostObject;
//!
//! let mut object = HostObject::new();
//! object.insert("position", vec![0.25_f64, -0.5, 7.0]);
//! let object = object.into_shared();
//!
//! let binding = NumericBinding::bind(&object, "position").unwrap();
//! assert_eq!(binding.read_pair(), [0.25, -0.5]);
//!
//! // Writes touch only the first two elements.
//! binding.write_pair([1.0, 1.0]);
//! assert_eq!(object.borrow().get::<Vec<f64>>("position").unwrap(), &[1.0, 1.0, 7.0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod binding;
pub mod error;
pub mod object;
pub mod widget;

pub use binding::NumericBinding;
pub use error::BindError;
pub use object::{HostObject, SharedHostObject};
pub use widget::{ChangeHandler, WidgetCore, WidgetInfo};
