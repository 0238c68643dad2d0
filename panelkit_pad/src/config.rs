// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pad configuration.

use core::fmt;

use alloc::string::String;

use panelkit_bind::ChangeHandler;

/// The default per-axis range, `[-1, 1]`.
pub const DEFAULT_RANGE: [f64; 2] = [-1.0, 1.0];

/// Construction options for a [`Pad`](crate::Pad).
///
/// The struct is the allow-list: every recognized option is a field, and
/// unknown options are unrepresentable. Build one with struct-update syntax
/// over [`Default`]:
///
/// ```rust
/// use panelkit_pad::PadConfig;
///
/// let config = PadConfig {
///     label: Some("position".into()),
///     range_x: [0.0, 10.0],
///     ..PadConfig::default()
/// };
/// assert_eq!(config.range_y, [-1.0, 1.0]);
/// ```
pub struct PadConfig {
    /// Optional stable identifier.
    pub id: Option<String>,
    /// Optional display label.
    pub label: Option<String>,
    /// Optional label/content layout proportion.
    pub label_ratio: Option<f64>,
    /// X-axis range, minimum to maximum. Inverted ranges are permitted.
    pub range_x: [f64; 2],
    /// Y-axis range, minimum to maximum. Inverted ranges are permitted.
    pub range_y: [f64; 2],
    /// Callback invoked with the new pair on every value change.
    pub on_change: Option<ChangeHandler>,
    /// Optional descriptive annotation text.
    pub annotation: Option<String>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            id: None,
            label: None,
            label_ratio: None,
            range_x: DEFAULT_RANGE,
            range_y: DEFAULT_RANGE,
            on_change: None,
            annotation: None,
        }
    }
}

impl fmt::Debug for PadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PadConfig")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("label_ratio", &self.label_ratio)
            .field("range_x", &self.range_x)
            .field("range_y", &self.range_y)
            .field("on_change", &self.on_change.is_some())
            .field("annotation", &self.annotation)
            .finish()
    }
}
