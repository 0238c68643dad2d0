// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panelkit Pad: a two-axis draggable input widget.
//!
//! A [`Pad`] maps pointer positions on a square surface into a two-number
//! value within configurable per-axis ranges, and renders that value as SVG
//! path data: a background axis cross at the range origin, a crosshair
//! following the handle, and a circular handle with a drop shadow. The host
//! styles the glyphs externally by class; the widget emits geometry only.
//!
//! The X axis maps directly (left edge is the range minimum). The Y axis is
//! flipped: pixel Y grows downward while value Y grows upward, so the top
//! edge of the surface is the range maximum.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use panelkit_bind::object::HostObject;
//! use panelkit_events::pointer::{PointerEvent, PointerHub, PointerPhase};
//! use panelkit_pad::{Pad, PadConfig, Panel};
//!
//! // The host owns the data; the widget edits the first two elements.
//! let mut object = HostObject::new();
//! object.insert("position", vec![0.0_f64, 0.0]);
//! let object = object.into_shared();
//!
//! let panel = Panel::new(100.0);
//! let hub = PointerHub::new();
//! let mut pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();
//!
//! // Press the top-right corner: X max, and Y max because Y is flipped.
//! hub.dispatch(PointerPhase::Down, PointerEvent::from_page(Point::new(100.0, 0.0)));
//! assert_eq!(pad.value(), [1.0, 1.0]);
//!
//! let markup = pad.markup();
//! assert!(markup.contains("class=\"handle\""));
//! # pad.destroy();
//! ```
//!
//! ## Collaborators
//!
//! - `panelkit_scale` supplies the pure pixel↔value mapping.
//! - `panelkit_events` supplies the pointer feed and gesture arming.
//! - `panelkit_bind` supplies the validated host-slot binding and the
//!   shared widget core (identity, labeling, change notification).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod markup;
mod model;
mod pad;
mod panel;

pub use config::{DEFAULT_RANGE, PadConfig};
pub use markup::{HANDLE_INNER_RADIUS, HANDLE_RADIUS, PadPaths, SHADOW_OFFSET_Y};
pub use model::PadModel;
pub use pad::{Pad, PadDebugInfo, PadError};
pub use panel::{Panel, ScrollSizeChange};
