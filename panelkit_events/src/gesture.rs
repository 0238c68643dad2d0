// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press/drag/release gesture state.
//!
//! [`PressGesture`] arms on a press inside a widget rectangle and then owns
//! the pointer document-wide until release: once armed, moves and the final
//! release are part of the gesture no matter where the pointer has wandered.
//! Presses outside the rectangle are ignored and leave the gesture idle.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use panelkit_events::gesture::PressGesture;
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let mut gesture = PressGesture::default();
//!
//! // A press outside the widget does nothing.
//! assert!(!gesture.press(Point::new(200.0, 200.0), bounds));
//! assert!(gesture.update(Point::new(50.0, 50.0)).is_none());
//!
//! // A press inside arms the gesture.
//! assert!(gesture.press(Point::new(10.0, 10.0), bounds));
//! assert_eq!(gesture.update(Point::new(150.0, 50.0)), Some(Point::new(150.0, 50.0)));
//! assert_eq!(gesture.release(Point::new(150.0, 50.0)), Some(Point::new(150.0, 50.0)));
//! assert!(!gesture.is_active());
//! ```

use kurbo::{Point, Rect};

/// Tracks one press/drag/release interaction scoped to a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressGesture {
    origin: Option<Point>,
    last: Option<Point>,
}

impl PressGesture {
    /// Attempts to arm the gesture with a press at `pos`.
    ///
    /// Arms and returns `true` only when `pos` lies within `bounds`;
    /// positions exactly on the border still hit the control. A press while
    /// already armed restarts the gesture from the new origin.
    pub fn press(&mut self, pos: Point, bounds: Rect) -> bool {
        if !contains_inclusive(bounds, pos) {
            return false;
        }
        self.origin = Some(pos);
        self.last = Some(pos);
        true
    }

    /// Records a pointer move, returning the position while armed.
    ///
    /// Returns `None` when the gesture is idle; the move belongs to someone
    /// else.
    pub fn update(&mut self, pos: Point) -> Option<Point> {
        self.origin?;
        self.last = Some(pos);
        Some(pos)
    }

    /// Ends the gesture, returning the release position if it was armed.
    pub fn release(&mut self, pos: Point) -> Option<Point> {
        self.origin.take()?;
        self.last = None;
        Some(pos)
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Returns the position the gesture was armed at, while active.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Returns the most recent position seen by the gesture, while active.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.last
    }
}

/// Border-inclusive point containment.
///
/// Widget surfaces treat their edges as part of the control, so a press at
/// exactly `x1`/`y1` must still arm.
fn contains_inclusive(rect: Rect, pos: Point) -> bool {
    pos.x >= rect.x0 && pos.x <= rect.x1 && pos.y >= rect.y0 && pos.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn fresh_gesture_is_idle() {
        let gesture = PressGesture::default();
        assert!(!gesture.is_active());
        assert!(gesture.origin().is_none());
        assert!(gesture.last().is_none());
    }

    #[test]
    fn press_inside_arms() {
        let mut gesture = PressGesture::default();
        assert!(gesture.press(Point::new(10.0, 20.0), BOUNDS));
        assert!(gesture.is_active());
        assert_eq!(gesture.origin(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn press_on_border_arms() {
        let mut gesture = PressGesture::default();
        assert!(gesture.press(Point::new(100.0, 0.0), BOUNDS));
        assert!(gesture.is_active());
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut gesture = PressGesture::default();
        assert!(!gesture.press(Point::new(100.1, 50.0), BOUNDS));
        assert!(!gesture.is_active());
        assert!(gesture.update(Point::new(50.0, 50.0)).is_none());
        assert!(gesture.release(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn armed_gesture_follows_moves_outside_bounds() {
        let mut gesture = PressGesture::default();
        gesture.press(Point::new(50.0, 50.0), BOUNDS);

        assert_eq!(
            gesture.update(Point::new(300.0, -20.0)),
            Some(Point::new(300.0, -20.0))
        );
        assert_eq!(gesture.last(), Some(Point::new(300.0, -20.0)));
    }

    #[test]
    fn release_disarms() {
        let mut gesture = PressGesture::default();
        gesture.press(Point::new(50.0, 50.0), BOUNDS);

        assert_eq!(
            gesture.release(Point::new(60.0, 60.0)),
            Some(Point::new(60.0, 60.0))
        );
        assert!(!gesture.is_active());
        assert!(gesture.update(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn repeated_press_restarts_from_new_origin() {
        let mut gesture = PressGesture::default();
        gesture.press(Point::new(10.0, 10.0), BOUNDS);
        gesture.update(Point::new(20.0, 20.0));

        assert!(gesture.press(Point::new(30.0, 30.0), BOUNDS));
        assert_eq!(gesture.origin(), Some(Point::new(30.0, 30.0)));
        assert_eq!(gesture.last(), Some(Point::new(30.0, 30.0)));
    }
}
