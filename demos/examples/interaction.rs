// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the viewport controller and the selection flow headlessly:
//! entrance animation, gestures, zoom buttons, reset, and a tap that
//! resolves to a taxonomy node.
//!
//! Run with:
//!
//! ```sh
//! cargo run -p flavorwheel_demos --example interaction
//! ```

use flavorwheel_demos::bundled_wheel;
use flavorwheel_layout::{WheelLayout, WheelParams, wheel_point};
use flavorwheel_taxonomy::{Node, NodeIndex};
use flavorwheel_viewport::{PressState, ViewportController};
use kurbo::{Point, Vec2};

const FRAME: f64 = 1.0 / 60.0;

fn settle(view: &mut ViewportController) -> f64 {
    let mut elapsed = 0.0;
    while view.is_animating() {
        view.tick(FRAME);
        elapsed += FRAME;
    }
    elapsed
}

/// The demo's segment-activation callback: print what the detail view
/// would show.
fn on_segment_activated(node: &Node) {
    println!("selected {:?}", node.name);
    if let Some(definition) = &node.definition {
        println!("  {definition}");
    }
    for child in &node.children {
        println!("  child: {} ({})", child.name, child.color);
    }
    for reference in &node.references {
        print!("  ref: {}", reference.reference);
        if let Some(flavor) = reference.flavor {
            print!(" | flavor {flavor:.1}");
            if let Some(preparation) = &reference.flavor_preparation {
                print!(" ({preparation})");
            }
        }
        if let Some(aroma) = reference.aroma {
            print!(" | aroma {aroma:.1}");
            if let Some(preparation) = &reference.aroma_preparation {
                print!(" ({preparation})");
            }
        }
        println!();
    }
}

fn main() {
    let doc = bundled_wheel();
    let center = Point::new(540.0, 540.0);
    let layout =
        WheelLayout::new(&doc, WheelParams::new(center, 70.0)).expect("bundled wheel lays out");
    println!(
        "laid out {} segments, outer radius {:.0}",
        layout.segments().len(),
        layout.max_outer_radius()
    );

    let mut view = ViewportController::new();
    view.start_entrance();
    let elapsed = settle(&mut view);
    println!(
        "entrance settled after {elapsed:.2}s at scale {:.2}, rotation {:.2}",
        view.transform().scale,
        view.transform().rotation
    );

    // A drag and a spread pinch, composed like a two-finger gesture.
    view.pan_begin();
    view.pinch_begin(120.0);
    view.pan_update(Vec2::new(80.0, -40.0));
    view.pinch_update(300.0);
    view.pan_end();
    view.pinch_end();
    println!(
        "after gestures: translation ({:.0}, {:.0}), scale {:.2}",
        view.transform().translation.x,
        view.transform().translation.y,
        view.transform().scale
    );

    view.zoom_out();
    settle(&mut view);
    println!("zoom out steps to scale {:.2}", view.transform().scale);

    view.reset();
    settle(&mut view);
    println!(
        "reset restored identity: {}",
        view.transform().is_near_identity(1e-9)
    );

    // Tap a point on the depth-1 ring. With the view at identity the
    // screen point is already in wheel coordinates; otherwise it would be
    // mapped through the inverse viewport affine first.
    let tap = wheel_point(center, 300.0, 45.0);
    let wheel_tap = view.transform().affine_about(center).inverse() * tap;
    let mut press: PressState<NodeIndex> = PressState::default();
    if let Some(segment) = layout.hit_test(wheel_tap) {
        press.press(segment.node);
    }
    if let Some(activated) = press.release()
        && let Some(node) = doc.node(activated)
    {
        on_segment_activated(node);
    }
}
