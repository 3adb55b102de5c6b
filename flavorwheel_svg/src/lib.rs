// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export for laid-out flavor wheels.
//!
//! This crate turns a [`WheelLayout`] into a standalone SVG document:
//! one filled `<path>` and one rotated `<text>` label per segment, plus
//! the hub circle with the document title. It is intended for debugging,
//! inspection, and headless tests, not pixel-perfect production
//! rendering.
//!
//! Wedge outlines are written as native SVG arc commands: the outer arc
//! carries sweep flag 1 (clockwise under the wheel's angle convention)
//! and large-arc flag 1 exactly when the segment spans more than 180°.
//! A viewport transform can be applied to the whole wheel through
//! [`SvgOptions::transform`], mirroring how a renderer would apply the
//! transform uniformly rather than per segment.
//!
//! ```
//! use flavorwheel_layout::{WheelLayout, WheelParams};
//! use flavorwheel_svg::{SvgOptions, wheel_to_svg};
//! use flavorwheel_taxonomy::{Document, Meta, Node};
//!
//! let doc = Document::new(
//!     Meta::new("Demo"),
//!     vec![
//!         Node::new("Fruity", "#DA1D23"),
//!         Node::new("Roasted", "#C94930"),
//!     ],
//! );
//! let layout = WheelLayout::new(&doc, WheelParams::new((400.0, 400.0).into(), 70.0)).unwrap();
//! let svg = wheel_to_svg(&doc, &layout, &SvgOptions::default());
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use flavorwheel_layout::{Segment, WheelLayout, wheel_point};
use flavorwheel_taxonomy::{Document, NodeIndex};
use kurbo::{Affine, BezPath, PathEl, Point};
use peniko::Color;

/// Rendering options for [`wheel_to_svg`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SvgOptions<'a> {
    /// Viewport transform applied to the whole wheel as a `<g>` wrapper.
    /// Pass e.g. `WheelTransform::affine_about(center)` from the viewport
    /// controller; `None` renders untransformed.
    pub transform: Option<Affine>,
    /// Subtitle drawn under the document title in the hub.
    pub subtitle: Option<&'a str>,
    /// Segment currently pressed; it renders dimmed as touch feedback.
    pub pressed: Option<NodeIndex>,
}

/// Opacity of a pressed segment.
const PRESSED_OPACITY: f64 = 0.7;

/// Renders a laid-out wheel as a complete SVG document.
///
/// The view box is sized from the layout's center so the wheel sits
/// centered: `width = 2·center.x`, `height = 2·center.y`.
#[must_use]
pub fn wheel_to_svg(doc: &Document, layout: &WheelLayout, options: &SvgOptions<'_>) -> String {
    let center = layout.params().center;
    let width = center.x * 2.0;
    let height = center.y * 2.0;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        fmt_f64(width),
        fmt_f64(height),
        fmt_f64(width),
        fmt_f64(height),
    );

    let transform = options.transform.filter(|xf| *xf != Affine::IDENTITY);
    if let Some(xf) = transform {
        let _ = write!(svg, "<g transform=\"{}\">", affine_to_svg_matrix(xf));
    }

    for segment in layout.segments() {
        write_segment(&mut svg, center, segment, options.pressed);
    }
    write_hub(&mut svg, doc, layout, options.subtitle);

    if transform.is_some() {
        svg.push_str("</g>");
    }
    svg.push_str("</svg>");
    svg
}

fn write_segment(out: &mut String, center: Point, segment: &Segment, pressed: Option<NodeIndex>) {
    let d = wedge_path_data(center, segment);
    let _ = write!(
        out,
        "<path d=\"{d}\" fill=\"{}\" stroke=\"#FFFFFF\" stroke-width=\"1\"",
        color_hex(segment.fill)
    );
    if pressed == Some(segment.node) {
        let _ = write!(out, " opacity=\"{}\"", fmt_f64(PRESSED_OPACITY));
    }
    out.push_str("/>");

    let label = &segment.label;
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\"",
        fmt_f64(label.anchor.x),
        // Nudge the baseline down so the text centers vertically on the anchor.
        fmt_f64(label.anchor.y + label.size * 0.35),
        fmt_f64(label.size),
        color_hex(label.color),
    );
    if label.rotation != 0.0 {
        let _ = write!(
            out,
            " transform=\"rotate({} {} {})\"",
            fmt_f64(label.rotation),
            fmt_f64(label.anchor.x),
            fmt_f64(label.anchor.y),
        );
    }
    let _ = write!(out, ">{}</text>", xml_escape(&label.text));
}

fn write_hub(out: &mut String, doc: &Document, layout: &WheelLayout, subtitle: Option<&str>) {
    let center = layout.params().center;
    let _ = write!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#FFFFFF\" stroke=\"#333\" stroke-width=\"1\"/>",
        fmt_f64(center.x),
        fmt_f64(center.y),
        fmt_f64(layout.params().center_radius),
    );
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"20\" font-weight=\"bold\" fill=\"#333\">{}</text>",
        fmt_f64(center.x),
        fmt_f64(center.y - 10.0),
        xml_escape(&doc.meta.name),
    );
    if let Some(subtitle) = subtitle {
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#333\">{}</text>",
            fmt_f64(center.x),
            fmt_f64(center.y + 15.0),
            xml_escape(subtitle),
        );
    }
}

/// Path data for one annular wedge, using native SVG arc commands.
///
/// The boundary follows the segment's outline order: inner-start, radial
/// line to outer-start, outer arc (sweep flag 1, clockwise), radial line
/// to inner-end, inner arc back (sweep flag 0), close. The large-arc flag
/// is 1 exactly when the angular span exceeds 180°. A full-circle segment
/// has coincident arc endpoints, which SVG arcs cannot represent, so it
/// falls back to the segment's flattened Bézier outline.
#[must_use]
pub fn wedge_path_data(center: Point, segment: &Segment) -> String {
    let span = segment.angle_size();
    if span >= 360.0 - 1e-9 {
        return bez_path_to_svg_d(&segment.path);
    }

    let inner_start = wheel_point(center, segment.inner_radius, segment.start_angle);
    let inner_end = wheel_point(center, segment.inner_radius, segment.end_angle);
    let outer_start = wheel_point(center, segment.outer_radius, segment.start_angle);
    let outer_end = wheel_point(center, segment.outer_radius, segment.end_angle);
    let large_arc = i32::from(span > 180.0);

    let mut d = String::new();
    let _ = write!(d, "M{} {}", fmt_f64(inner_start.x), fmt_f64(inner_start.y));
    let _ = write!(d, "L{} {}", fmt_f64(outer_start.x), fmt_f64(outer_start.y));
    let _ = write!(
        d,
        "A{} {} 0 {large_arc} 1 {} {}",
        fmt_f64(segment.outer_radius),
        fmt_f64(segment.outer_radius),
        fmt_f64(outer_end.x),
        fmt_f64(outer_end.y),
    );
    let _ = write!(d, "L{} {}", fmt_f64(inner_end.x), fmt_f64(inner_end.y));
    let _ = write!(
        d,
        "A{} {} 0 {large_arc} 0 {} {}",
        fmt_f64(segment.inner_radius),
        fmt_f64(segment.inner_radius),
        fmt_f64(inner_start.x),
        fmt_f64(inner_start.y),
    );
    d.push('Z');
    d
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y),
                    fmt_f64(p3.x),
                    fmt_f64(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn color_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn affine_to_svg_matrix(xf: Affine) -> String {
    // kurbo::Affine stores [a, b, c, d, e, f] corresponding to:
    // [ a c e ]
    // [ b d f ]
    // [ 0 0 1 ]
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_f64(c[0]),
        fmt_f64(c[1]),
        fmt_f64(c[2]),
        fmt_f64(c[3]),
        fmt_f64(c[4]),
        fmt_f64(c[5]),
    )
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for debugging.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use flavorwheel_layout::WheelParams;
    use flavorwheel_taxonomy::{Meta, Node};
    use kurbo::Vec2;

    use super::*;

    fn quarters() -> (Document, WheelLayout) {
        let doc = Document::new(
            Meta::new("Coffee"),
            vec![Node::new("Root", "#808080").with_children(vec![
                Node::new("Small", "#FFFFFF"),
                Node::new("Large", "#222222").with_children(vec![
                    Node::new("L1", "#333333"),
                    Node::new("L2", "#444444"),
                    Node::new("L3", "#555555"),
                ]),
            ])],
        );
        let layout =
            WheelLayout::new(&doc, WheelParams::new(Point::new(400.0, 400.0), 70.0)).unwrap();
        (doc, layout)
    }

    #[test]
    fn document_has_one_path_and_label_per_segment_plus_the_hub() {
        let (doc, layout) = quarters();
        let svg = wheel_to_svg(&doc, &layout, &SvgOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        let paths = svg.matches("<path").count();
        let texts = svg.matches("<text").count();
        assert_eq!(paths, layout.segments().len());
        // One label per segment plus the hub title.
        assert_eq!(texts, layout.segments().len() + 1);
        assert!(svg.contains("<circle"));
        assert!(svg.contains(">Coffee</text>"));
    }

    #[test]
    fn subtitle_and_transform_are_optional() {
        let (doc, layout) = quarters();
        let plain = wheel_to_svg(&doc, &layout, &SvgOptions::default());
        assert!(!plain.contains("matrix("));
        assert!(!plain.contains("Taster"));

        let options = SvgOptions {
            transform: Some(Affine::translate(Vec2::new(12.0, 0.0))),
            subtitle: Some("Taster's Wheel"),
            pressed: None,
        };
        let styled = wheel_to_svg(&doc, &layout, &options);
        assert!(styled.contains("<g transform=\"matrix(1 0 0 1 12 0)\">"));
        assert!(styled.contains(">Taster&apos;s Wheel</text>") || styled.contains(">Taster's Wheel</text>"));
    }

    #[test]
    fn pressed_segment_renders_dimmed() {
        let (doc, layout) = quarters();
        let pressed = layout.segments()[1].node;
        let options = SvgOptions {
            pressed: Some(pressed),
            ..SvgOptions::default()
        };
        let svg = wheel_to_svg(&doc, &layout, &options);
        assert_eq!(svg.matches("opacity=\"0.7\"").count(), 1);
    }

    #[test]
    fn wedge_arcs_set_sweep_and_large_arc_flags() {
        let (_, layout) = quarters();
        let center = layout.params().center;
        // "Small" spans 90°: short way round, clockwise outer arc.
        let small = wedge_path_data(center, &layout.segments()[1]);
        assert!(small.contains(" 0 0 1 "), "90° wedge uses large-arc 0: {small}");
        assert!(small.contains(" 0 0 0 "), "inner arc runs counterclockwise: {small}");
        // "Large" spans 270°: the long way round.
        let large = wedge_path_data(center, &layout.segments()[2]);
        assert!(large.contains(" 0 1 1 "), "270° wedge uses large-arc 1: {large}");
    }

    #[test]
    fn full_circle_segments_fall_back_to_the_flattened_outline() {
        let (_, layout) = quarters();
        let center = layout.params().center;
        // The single root spans the full circle; SVG arcs cannot represent
        // coincident endpoints, so the d string comes from the Bézier path.
        let root = wedge_path_data(center, &layout.segments()[0]);
        assert!(root.contains('C'));
        assert!(!root.contains('A'));
    }

    #[test]
    fn white_fill_gets_a_black_label() {
        let (doc, layout) = quarters();
        let svg = wheel_to_svg(&doc, &layout, &SvgOptions::default());
        // "Small" is white, so its label text must be black.
        assert!(svg.contains("fill=\"#ffffff\""));
        assert!(svg.contains("fill=\"#000000\""));
        assert!(svg.contains(">Small</text>"));
    }

    #[test]
    fn label_text_is_escaped() {
        let doc = Document::new(
            Meta::new("Esc & Co"),
            vec![Node::new("Sweet <&> Sour", "#123456")],
        );
        let layout =
            WheelLayout::new(&doc, WheelParams::new(Point::new(200.0, 200.0), 50.0)).unwrap();
        let svg = wheel_to_svg(&doc, &layout, &SvgOptions::default());
        assert!(svg.contains("Sweet &lt;&amp;&gt; Sour"));
        assert!(svg.contains("Esc &amp; Co"));
    }

    #[test]
    fn fmt_f64_trims_trailing_noise() {
        assert_eq!(fmt_f64(400.0), "400");
        assert_eq!(fmt_f64(-12.5), "-12.5");
        assert_eq!(fmt_f64(0.125), "0.125");
        assert_eq!(fmt_f64(1.0 / 3.0), "0.333");
    }
}
