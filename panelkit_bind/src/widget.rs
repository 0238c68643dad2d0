// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bound-widget core.
//!
//! Every value-editing widget in a control panel shares the same spine:
//! identity and labeling, a validated binding to the host slot it edits,
//! and a change callback fired when it writes a new value. [`WidgetCore`]
//! packages that spine as a capability widgets hold by composition; a
//! widget kind embeds a core and adds its own interaction and rendering on
//! top.

use core::fmt;

use alloc::boxed::Box;
use alloc::string::String;

use crate::binding::NumericBinding;

/// Callback invoked with the new pair after every value write.
pub type ChangeHandler = Box<dyn FnMut([f64; 2])>;

/// Identity and labeling shared by bound widgets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetInfo {
    /// Optional stable identifier for the widget.
    pub id: Option<String>,
    /// Optional display label.
    pub label: Option<String>,
    /// Optional label/content layout proportion.
    pub label_ratio: Option<f64>,
    /// Optional descriptive annotation text.
    pub annotation: Option<String>,
}

/// Identity, binding, and change notification for one bound widget.
///
/// Constructed with an already-validated [`NumericBinding`]; the core never
/// re-validates. [`destroy`](Self::destroy) releases the binding and drops
/// the change handler, after which writes are inert and reads report the
/// last pair written through the core.
pub struct WidgetCore {
    info: WidgetInfo,
    binding: Option<NumericBinding>,
    on_change: Option<ChangeHandler>,
    last: [f64; 2],
}

impl WidgetCore {
    /// Creates a core around a validated binding.
    #[must_use]
    pub fn new(binding: NumericBinding, info: WidgetInfo, on_change: Option<ChangeHandler>) -> Self {
        let last = binding.read_pair();
        Self {
            info,
            binding: Some(binding),
            on_change,
            last,
        }
    }

    /// Returns the widget's identity and labeling.
    #[must_use]
    pub fn info(&self) -> &WidgetInfo {
        &self.info
    }

    /// Reads the current value pair.
    ///
    /// Reads through the binding while bound, picking up external writes by
    /// host code; after [`destroy`](Self::destroy), reports the last pair
    /// written through the core.
    #[must_use]
    pub fn value(&self) -> [f64; 2] {
        match &self.binding {
            Some(binding) => binding.read_pair(),
            None => self.last,
        }
    }

    /// Writes a new value pair and fires the change handler.
    ///
    /// Inert after [`destroy`](Self::destroy).
    pub fn set_value(&mut self, pair: [f64; 2]) {
        let Some(binding) = &self.binding else {
            return;
        };
        binding.write_pair(pair);
        self.last = pair;
        if let Some(on_change) = &mut self.on_change {
            on_change(pair);
        }
    }

    /// Returns `true` while the core still holds its binding.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Releases the binding and drops the change handler.
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub fn destroy(&mut self) {
        self.binding = None;
        self.on_change = None;
    }
}

impl fmt::Debug for WidgetCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetCore")
            .field("info", &self.info)
            .field("bound", &self.binding.is_some())
            .field("value", &self.value())
            .finish()
    }
}
