// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wired pad widget.
//!
//! [`Pad`] connects the headless [`PadModel`] to its collaborators: the
//! validated host-slot binding (value storage and change notification), the
//! pointer feed (press/drag/release funneled through one handler), and the
//! parent panel's `scroll-size-change` notification (square geometry
//! derived from the panel's content width). Construction wires everything
//! up; [`destroy`](Pad::destroy) releases the subscriptions and tears the
//! widget core down.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use kurbo::Point;

use panelkit_bind::{BindError, NumericBinding, SharedHostObject, WidgetCore, WidgetInfo};
use panelkit_events::gesture::PressGesture;
use panelkit_events::pointer::{PointerHub, PointerPhase, PointerSample};
use panelkit_events::sub::SubscriptionId;

use crate::config::PadConfig;
use crate::markup::{PadPaths, render_document};
use crate::model::PadModel;
use crate::panel::Panel;

/// Error raised when pad construction fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PadError {
    /// The host slot failed bind-time validation.
    Binding(BindError),
}

impl fmt::Display for PadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binding(_) => write!(f, "pad construction failed: invalid host slot"),
        }
    }
}

impl core::error::Error for PadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Binding(err) => Some(err),
        }
    }
}

impl From<BindError> for PadError {
    fn from(err: BindError) -> Self {
        Self::Binding(err)
    }
}

/// Snapshot of a pad's state for debugging and inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct PadDebugInfo {
    /// The widget's pixel rectangle.
    pub rect: kurbo::Rect,
    /// Current X-axis range.
    pub range_x: [f64; 2],
    /// Current Y-axis range.
    pub range_y: [f64; 2],
    /// How many times the path data has been recomputed.
    pub redraw_count: u64,
    /// Whether the widget core still holds its binding.
    pub bound: bool,
}

/// Shared widget state reached from the subscriptions.
struct PadShared {
    core: WidgetCore,
    model: PadModel,
    gesture: PressGesture,
    paths: PadPaths,
    redraws: u64,
}

impl PadShared {
    /// Recomputes all four path strings from the current value and range.
    fn redraw(&mut self) {
        let value = self.core.value();
        self.paths = self.model.paths(value);
        self.redraws += 1;
    }

    /// Maps a pointer position into value space, stores it, and redraws.
    fn apply_pointer(&mut self, pos: Point) {
        let value = self.model.pointer_value(pos);
        self.core.set_value(value);
        self.redraw();
    }

    /// Press, drag, and release funnel through this one handler.
    fn on_sample(&mut self, sample: &PointerSample) {
        let pos = sample.event.position();
        let owned = match sample.phase {
            PointerPhase::Down => self.gesture.press(pos, self.model.rect()),
            PointerPhase::Move => self.gesture.update(pos).is_some(),
            PointerPhase::Up => self.gesture.release(pos).is_some(),
        };
        if owned {
            self.apply_pointer(pos);
        }
    }

    fn set_range(&mut self, range_x: [f64; 2], range_y: [f64; 2]) {
        if !self.model.set_range(range_x, range_y) {
            return;
        }
        let clamped = self.model.reclamp(self.core.value());
        self.core.set_value(clamped);
        self.redraw();
    }

    fn resize(&mut self, content_width: f64) {
        self.model.set_view_size(content_width);
        self.redraw();
    }
}

/// A two-axis draggable input widget.
///
/// See the crate documentation for an end-to-end example.
pub struct Pad {
    shared: Rc<RefCell<PadShared>>,
    panel: Panel,
    hub: PointerHub,
    pointer_sub: Option<SubscriptionId>,
    panel_sub: Option<SubscriptionId>,
}

impl Pad {
    /// The widget type name.
    pub const TYPE_NAME: &'static str = "pad";

    /// Constructs a pad bound to `object[key]`, wired into `panel` and
    /// `hub`.
    ///
    /// The slot behind `key` must hold a numeric sequence of at least two
    /// elements; validation failure aborts construction before any
    /// subscription is registered. On success the widget subscribes its
    /// pointer handler and its resize handler, then establishes its initial
    /// square geometry from the panel's current content width.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Binding`] when the host slot fails validation.
    pub fn new(
        panel: &Panel,
        hub: &PointerHub,
        object: &SharedHostObject,
        key: &str,
        config: PadConfig,
    ) -> Result<Self, PadError> {
        let binding = NumericBinding::bind(object, key)?;

        let PadConfig {
            id,
            label,
            label_ratio,
            range_x,
            range_y,
            on_change,
            annotation,
        } = config;
        let info = WidgetInfo {
            id,
            label,
            label_ratio,
            annotation,
        };
        let core = WidgetCore::new(binding, info, on_change);
        let shared = Rc::new(RefCell::new(PadShared {
            core,
            model: PadModel::new(range_x, range_y),
            gesture: PressGesture::default(),
            paths: PadPaths::default(),
            redraws: 0,
        }));

        let weak = Rc::downgrade(&shared);
        let pointer_sub = hub.subscribe(move |sample| {
            if let Some(shared) = weak.upgrade() {
                shared.borrow_mut().on_sample(sample);
            }
        });

        let weak = Rc::downgrade(&shared);
        let panel_sub = panel.on_scroll_size_change(move |change| {
            if let Some(shared) = weak.upgrade() {
                shared.borrow_mut().resize(change.content_width);
            }
        });

        shared.borrow_mut().resize(panel.content_width());

        Ok(Self {
            shared,
            panel: panel.clone(),
            hub: hub.clone(),
            pointer_sub: Some(pointer_sub),
            panel_sub: Some(panel_sub),
        })
    }

    /// Reads the current value pair from the bound slot.
    #[must_use]
    pub fn value(&self) -> [f64; 2] {
        self.shared.borrow().core.value()
    }

    /// Writes a new value pair, firing the change callback.
    ///
    /// Does not redraw; call [`sync`](Self::sync) afterwards, as after any
    /// external mutation of the bound slot.
    pub fn set_value(&mut self, pair: [f64; 2]) {
        self.shared.borrow_mut().core.set_value(pair);
    }

    /// Returns copies of both axis ranges, X first.
    #[must_use]
    pub fn range(&self) -> [[f64; 2]; 2] {
        self.shared.borrow().model.range()
    }

    /// Replaces both axis ranges.
    ///
    /// A set that is element-wise equal to the current ranges skips the
    /// re-clamp and the redraw entirely. Otherwise the current value is
    /// clamped into the interval each new axis spans (whatever the order of
    /// its bounds) and the glyphs are recomputed.
    pub fn set_range(&mut self, range_x: [f64; 2], range_y: [f64; 2]) {
        self.shared.borrow_mut().set_range(range_x, range_y);
    }

    /// Recomputes the path data from the current value, range, and rect.
    ///
    /// Idempotent; safe to call at any time, including before the first
    /// layout pass and after external mutation of the bound slot.
    pub fn sync(&mut self) {
        self.shared.borrow_mut().redraw();
    }

    /// Returns the current four path strings.
    #[must_use]
    pub fn paths(&self) -> PadPaths {
        self.shared.borrow().paths.clone()
    }

    /// Renders the widget markup: the container, the square drawing
    /// surface, and the four classed paths.
    #[must_use]
    pub fn markup(&self) -> String {
        let shared = self.shared.borrow();
        render_document(shared.model.rect().size(), &shared.paths)
    }

    /// Moves the widget's rectangle to a new top-left corner, for hosts
    /// that place the surface away from the page origin.
    pub fn set_surface_origin(&mut self, origin: Point) {
        self.shared.borrow_mut().model.set_origin(origin);
    }

    /// Returns the widget's identity and labeling.
    #[must_use]
    pub fn info(&self) -> WidgetInfo {
        self.shared.borrow().core.info().clone()
    }

    /// Returns a snapshot of the pad's state.
    #[must_use]
    pub fn debug_info(&self) -> PadDebugInfo {
        let shared = self.shared.borrow();
        let range = shared.model.range();
        PadDebugInfo {
            rect: shared.model.rect(),
            range_x: range[0],
            range_y: range[1],
            redraw_count: shared.redraws,
            bound: shared.core.is_bound(),
        }
    }

    /// Releases the pointer and resize subscriptions, then tears down the
    /// widget core.
    ///
    /// Safe to call more than once; later calls are no-ops. Dropping the
    /// pad destroys it implicitly.
    pub fn destroy(&mut self) {
        if let Some(id) = self.pointer_sub.take() {
            self.hub.unsubscribe(id);
        }
        if let Some(id) = self.panel_sub.take() {
            self.panel.remove_scroll_size_listener(id);
        }
        self.shared.borrow_mut().core.destroy();
    }
}

impl Drop for Pad {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Pad")
            .field("value", &shared.core.value())
            .field("rect", &shared.model.rect())
            .field("bound", &shared.core.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use panelkit_bind::HostObject;
    use panelkit_events::pointer::PointerEvent;

    use super::*;

    fn fixture() -> (Panel, PointerHub, SharedHostObject) {
        let mut object = HostObject::new();
        object.insert("position", vec![0.0_f64, 0.0]);
        (Panel::new(100.0), PointerHub::new(), object.into_shared())
    }

    fn press(hub: &PointerHub, x: f64, y: f64) {
        hub.dispatch(
            PointerPhase::Down,
            PointerEvent::from_page(Point::new(x, y)),
        );
    }

    #[test]
    fn construction_establishes_square_geometry_and_centers_the_handle() {
        let (panel, hub, object) = fixture();
        let pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        let info = pad.debug_info();
        assert_eq!(info.rect, kurbo::Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(info.redraw_count, 1);

        // Domain midpoint maps to the surface center.
        let paths = pad.paths();
        assert!(paths.handle.starts_with("M44 50"), "was {:?}", paths.handle);
        assert!(pad.markup().contains("viewBox=\"0 0 100 100\""));
    }

    #[test]
    fn construction_rejects_an_invalid_slot_before_subscribing() {
        let (panel, hub, _) = fixture();
        let mut object = HostObject::new();
        object.insert("position", vec![1.0_f64]);
        let object = object.into_shared();

        let err = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PadError::Binding(BindError::TooShort {
                key: "position".to_string(),
                len: 1
            })
        );
        assert_eq!(hub.subscriber_count(), 0);
        assert_eq!(panel.listener_count(), 0);
    }

    #[test]
    fn press_at_the_top_right_corner_sets_both_maxima() {
        let (panel, hub, object) = fixture();
        let pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        press(&hub, 100.0, 0.0);
        assert_eq!(pad.value(), [1.0, 1.0]);
        assert_eq!(
            object.borrow().get::<Vec<f64>>("position").unwrap(),
            &[1.0, 1.0]
        );
    }

    #[test]
    fn drag_follows_the_pointer_and_fires_on_change() {
        let (panel, hub, object) = fixture();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let config = PadConfig {
            on_change: Some(alloc::boxed::Box::new(move |pair| {
                sink.borrow_mut().push(pair);
            })),
            ..PadConfig::default()
        };
        let pad = Pad::new(&panel, &hub, &object, "position", config).unwrap();

        press(&hub, 50.0, 50.0);
        hub.dispatch(
            PointerPhase::Move,
            PointerEvent::from_page(Point::new(75.0, 50.0)),
        );
        hub.dispatch(
            PointerPhase::Up,
            PointerEvent::from_page(Point::new(75.0, 50.0)),
        );

        assert_eq!(pad.value(), [0.5, 0.0]);
        assert_eq!(*seen.borrow(), [[0.0, 0.0], [0.5, 0.0], [0.5, 0.0]]);
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let (panel, hub, object) = fixture();
        let pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        hub.dispatch(
            PointerPhase::Move,
            PointerEvent::from_page(Point::new(75.0, 25.0)),
        );
        assert_eq!(pad.value(), [0.0, 0.0]);
        assert_eq!(pad.debug_info().redraw_count, 1);
    }

    #[test]
    fn presses_outside_the_surface_are_ignored() {
        let (panel, hub, object) = fixture();
        let pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        press(&hub, 150.0, 50.0);
        assert_eq!(pad.value(), [0.0, 0.0]);
    }

    #[test]
    fn armed_drags_saturate_outside_the_surface() {
        let (panel, hub, object) = fixture();
        let pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        press(&hub, 50.0, 50.0);
        hub.dispatch(
            PointerPhase::Move,
            PointerEvent::from_page(Point::new(400.0, -80.0)),
        );
        assert_eq!(pad.value(), [1.0, 1.0]);
    }

    #[test]
    fn setting_an_identical_range_skips_the_redraw_and_the_value() {
        let (panel, hub, object) = fixture();
        let mut pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        let before = pad.debug_info().redraw_count;
        pad.set_range([-1.0, 1.0], [-1.0, 1.0]);
        assert_eq!(pad.debug_info().redraw_count, before);
        assert_eq!(pad.value(), [0.0, 0.0]);
    }

    #[test]
    fn setting_a_new_range_reclamps_the_value_and_redraws() {
        let (panel, hub, object) = fixture();
        let mut pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        let before = pad.debug_info().redraw_count;
        pad.set_range([2.0, 5.0], [7.0, 3.0]);

        let value = pad.value();
        assert!((2.0..=5.0).contains(&value[0]), "value was {value:?}");
        assert!((3.0..=7.0).contains(&value[1]), "value was {value:?}");
        assert_eq!(pad.debug_info().redraw_count, before + 1);
        assert_eq!(pad.range(), [[2.0, 5.0], [7.0, 3.0]]);
    }

    #[test]
    fn range_getter_returns_defensive_copies() {
        let (panel, hub, object) = fixture();
        let pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        let mut range = pad.range();
        range[0][0] = 99.0;
        assert_eq!(pad.range(), [[-1.0, 1.0], [-1.0, 1.0]]);
    }

    #[test]
    fn resize_recomputes_geometry() {
        let (panel, hub, object) = fixture();
        let pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        panel.set_content_width(200.0);
        let info = pad.debug_info();
        assert_eq!(info.rect.width(), 200.0);
        assert_eq!(info.rect.height(), 200.0);
        assert!(pad.markup().contains("viewBox=\"0 0 200 200\""));
    }

    #[test]
    fn sync_picks_up_external_slot_writes() {
        let (panel, hub, object) = fixture();
        let mut pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        object.borrow_mut().get_mut::<Vec<f64>>("position").unwrap()[0] = 1.0;
        pad.sync();
        // Value 1 on X lands the handle on the right edge.
        assert!(
            pad.paths().handle.starts_with("M94 50"),
            "was {:?}",
            pad.paths().handle
        );
    }

    #[test]
    fn sync_before_layout_is_safe() {
        let (_, hub, object) = fixture();
        let panel = Panel::new(0.0);
        let mut pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();
        pad.sync();
        assert!(!pad.paths().axes.is_empty());
    }

    #[test]
    fn destroy_releases_the_subscriptions() {
        let (panel, hub, object) = fixture();
        let mut pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();
        assert_eq!(hub.subscriber_count(), 1);
        assert_eq!(panel.listener_count(), 1);

        pad.destroy();
        assert_eq!(hub.subscriber_count(), 0);
        assert_eq!(panel.listener_count(), 0);

        // A previously-bound pointer event neither panics nor writes.
        press(&hub, 100.0, 0.0);
        assert_eq!(pad.value(), [0.0, 0.0]);
        assert_eq!(
            object.borrow().get::<Vec<f64>>("position").unwrap(),
            &[0.0, 0.0]
        );

        pad.destroy();
        assert!(!pad.debug_info().bound);
    }

    #[test]
    fn dropping_the_pad_releases_the_subscriptions() {
        let (panel, hub, object) = fixture();
        let pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();
        drop(pad);
        assert_eq!(hub.subscriber_count(), 0);
        assert_eq!(panel.listener_count(), 0);
    }

    #[test]
    fn custom_ranges_map_the_pointer_accordingly() {
        let (panel, hub, object) = fixture();
        let config = PadConfig {
            range_x: [0.0, 10.0],
            range_y: [0.0, 4.0],
            ..PadConfig::default()
        };
        let pad = Pad::new(&panel, &hub, &object, "position", config).unwrap();

        press(&hub, 25.0, 100.0);
        assert_eq!(pad.value(), [2.5, 0.0]);
        assert_eq!(pad.info().label, None);
        assert_eq!(Pad::TYPE_NAME, "pad");
    }

    #[test]
    fn surface_origin_offsets_the_pointer_mapping() {
        let (panel, hub, object) = fixture();
        let mut pad = Pad::new(&panel, &hub, &object, "position", PadConfig::default()).unwrap();

        pad.set_surface_origin(Point::new(200.0, 0.0));
        press(&hub, 50.0, 50.0); // left of the surface: ignored
        assert_eq!(pad.value(), [0.0, 0.0]);

        press(&hub, 300.0, 0.0); // the surface's top-right corner
        assert_eq!(pad.value(), [1.0, 1.0]);
    }
}
