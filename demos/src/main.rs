// Copyright 2026 the Panelkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless pad demo.
//!
//! Wires a pad into a panel, a pointer hub, and a shared host object, then
//! simulates a short drag and prints the widget's value and rendered
//! markup after each step:
//!
//! `cargo run -p panelkit_demos --bin pad_headless`

use kurbo::Point;
use panelkit_bind::HostObject;
use panelkit_events::pointer::{PointerEvent, PointerHub, PointerPhase};
use panelkit_events::tracker::SharedPointerTracker;
use panelkit_pad::{Pad, PadConfig, Panel};

fn main() {
    let mut object = HostObject::new();
    object.insert("position", vec![0.0_f64, 0.0]);
    let object = object.into_shared();

    let panel = Panel::new(100.0);
    let hub = PointerHub::new();
    let tracker = SharedPointerTracker::new();
    let _tracker_sub = tracker.attach(&hub);

    let config = PadConfig {
        label: Some("position".into()),
        on_change: Some(Box::new(|pair| {
            println!("change -> [{:.3}, {:.3}]", pair[0], pair[1]);
        })),
        ..PadConfig::default()
    };
    let mut pad = Pad::new(&panel, &hub, &object, "position", config)
        .expect("host slot holds two numbers");

    println!("initial value: {:?}", pad.value());
    println!("{}\n", pad.markup());

    let drag = [
        (PointerPhase::Down, Point::new(50.0, 50.0)),
        (PointerPhase::Move, Point::new(80.0, 30.0)),
        (PointerPhase::Move, Point::new(100.0, 0.0)),
        (PointerPhase::Up, Point::new(100.0, 0.0)),
    ];
    for (phase, pos) in drag {
        hub.dispatch(phase, PointerEvent::from_page(pos));
    }

    println!("value after drag: {:?}", pad.value());
    println!("tracker saw: {:?}", tracker.position());

    // The host can also write the slot directly and re-sync the widget.
    object
        .borrow_mut()
        .get_mut::<Vec<f64>>("position")
        .expect("slot still bound")[0] = -1.0;
    pad.sync();
    println!("\nafter external write + sync:");
    println!("{}", pad.markup());

    pad.destroy();
}
