// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding validation errors.

use alloc::string::String;
use core::fmt;

/// Error returned when a host slot fails bind-time validation.
///
/// Validation is synchronous and fatal to the bind: either the slot is a
/// numeric sequence of at least two elements, or nothing is wired up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindError {
    /// The host object has no slot under the requested key.
    MissingSlot {
        /// The key that was looked up.
        key: String,
    },
    /// The slot exists but does not hold a numeric sequence.
    NotASequence {
        /// The key that was looked up.
        key: String,
    },
    /// The slot holds a numeric sequence with fewer than two elements.
    TooShort {
        /// The key that was looked up.
        key: String,
        /// The number of elements the slot actually holds.
        len: usize,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSlot { key } => {
                write!(f, "host object has no slot {key:?}")
            }
            Self::NotASequence { key } => {
                write!(f, "slot {key:?} does not hold a numeric sequence")
            }
            Self::TooShort { key, len } => {
                write!(
                    f,
                    "slot {key:?} holds {len} element(s); at least 2 are required"
                )
            }
        }
    }
}

impl core::error::Error for BindError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_names_the_offending_key() {
        let err = BindError::TooShort {
            key: "position".to_string(),
            len: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("position"), "message was {msg:?}");
        assert!(msg.contains("at least 2"), "message was {msg:?}");
    }
}
