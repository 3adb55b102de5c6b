// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out the bundled taster's wheel and writes it to stdout as SVG.
//!
//! Run with:
//!
//! ```sh
//! cargo run -p flavorwheel_demos --example wheel_svg > wheel.svg
//! ```

use flavorwheel_demos::bundled_wheel;
use flavorwheel_layout::{WheelLayout, WheelParams};
use flavorwheel_svg::{SvgOptions, wheel_to_svg};
use kurbo::Point;

fn main() {
    let doc = bundled_wheel();
    let params = WheelParams::new(Point::new(540.0, 540.0), 70.0);
    let layout = WheelLayout::new(&doc, params).expect("bundled wheel lays out");

    let options = SvgOptions {
        subtitle: Some("Taster's Flavor Wheel"),
        ..SvgOptions::default()
    };
    println!("{}", wheel_to_svg(&doc, &layout, &options));
}
