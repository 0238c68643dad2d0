// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated numeric slot bindings.
//!
//! A [`NumericBinding`] is a widget's handle to the first two elements of a
//! `Vec<f64>` slot on a shared [`HostObject`](crate::object::HostObject).
//! The slot is validated once, when the binding is created; every later read
//! goes back to the host object, so external writes by host code are picked
//! up the next time the widget reads.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::error::BindError;
use crate::object::SharedHostObject;

/// A validated handle to a two-or-more element numeric slot.
///
/// Reads and writes touch only elements 0 and 1; any further elements the
/// host keeps in the slot are preserved. A host that removes or retypes the
/// slot *after* binding is tolerated: reads report the origin pair and
/// writes become no-ops.
pub struct NumericBinding {
    object: SharedHostObject,
    key: String,
}

impl NumericBinding {
    /// Binds to the slot under `key`, validating it first.
    ///
    /// # Errors
    ///
    /// - [`BindError::MissingSlot`] when no slot exists under `key`.
    /// - [`BindError::NotASequence`] when the slot is not a `Vec<f64>`.
    /// - [`BindError::TooShort`] when the sequence has fewer than two
    ///   elements.
    pub fn bind(object: &SharedHostObject, key: &str) -> Result<Self, BindError> {
        {
            let host = object.borrow();
            if !host.contains_key(key) {
                return Err(BindError::MissingSlot {
                    key: key.to_string(),
                });
            }
            let Some(values) = host.get::<Vec<f64>>(key) else {
                return Err(BindError::NotASequence {
                    key: key.to_string(),
                });
            };
            if values.len() < 2 {
                return Err(BindError::TooShort {
                    key: key.to_string(),
                    len: values.len(),
                });
            }
        }
        Ok(Self {
            object: Rc::clone(object),
            key: key.to_string(),
        })
    }

    /// Returns the key this binding points at.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads elements 0 and 1 of the bound slot.
    ///
    /// Reports the origin pair if the host has removed or retyped the slot
    /// since binding.
    #[must_use]
    pub fn read_pair(&self) -> [f64; 2] {
        let host = self.object.borrow();
        match host.get::<Vec<f64>>(&self.key) {
            Some(values) if values.len() >= 2 => [values[0], values[1]],
            _ => [0.0, 0.0],
        }
    }

    /// Writes `pair` into elements 0 and 1 of the bound slot.
    ///
    /// Elements beyond the first two are preserved. A no-op if the host has
    /// removed or retyped the slot since binding.
    pub fn write_pair(&self, pair: [f64; 2]) {
        let mut host = self.object.borrow_mut();
        if let Some(values) = host.get_mut::<Vec<f64>>(&self.key)
            && values.len() >= 2
        {
            values[0] = pair[0];
            values[1] = pair[1];
        }
    }
}

impl fmt::Debug for NumericBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericBinding")
            .field("key", &self.key)
            .field("pair", &self.read_pair())
            .finish()
    }
}
