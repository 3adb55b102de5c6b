// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill color parsing and label contrast.
//!
//! Taxonomy documents carry fills as `#RRGGBB` strings. Parsing is strict:
//! a malformed color fails with a typed error up front rather than letting
//! NaN luma propagate into rendering.

use peniko::Color;
use thiserror::Error;

/// Errors from parsing an RGB hex color string.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string is not exactly six hex digits (after an optional `#`).
    #[error("expected a 6-digit hex color, found {found} bytes")]
    UnexpectedLength {
        /// Length of the rejected digit portion, in bytes.
        found: usize,
    },
    /// A character is not a hex digit.
    #[error("invalid hex digit {digit:?} in color")]
    InvalidDigit {
        /// The offending character.
        digit: char,
    },
}

fn hex_nibble(byte: u8) -> Result<u8, ColorParseError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(ColorParseError::InvalidDigit {
            digit: byte as char,
        }),
    }
}

/// Parses an opaque `#RRGGBB` (or bare `RRGGBB`) color string.
pub fn parse_hex_color(text: &str) -> Result<Color, ColorParseError> {
    let digits = text.strip_prefix('#').unwrap_or(text).as_bytes();
    if digits.len() != 6 {
        return Err(ColorParseError::UnexpectedLength {
            found: digits.len(),
        });
    }
    let mut channels = [0_u8; 3];
    for (channel, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
        *channel = hex_nibble(pair[0])? << 4 | hex_nibble(pair[1])?;
    }
    Ok(Color::from_rgb8(channels[0], channels[1], channels[2]))
}

/// Perceptual luma of a color, in 0–255, using the YIQ weighting
/// `Y = (299·R + 587·G + 114·B) / 1000`.
#[must_use]
pub fn relative_luma(color: Color) -> f64 {
    let rgba = color.to_rgba8();
    (299.0 * f64::from(rgba.r) + 587.0 * f64::from(rgba.g) + 114.0 * f64::from(rgba.b)) / 1000.0
}

/// Picks a label color that contrasts with `fill`: black on light fills
/// (luma strictly greater than 192), white otherwise.
#[must_use]
pub fn contrasting_text_color(fill: Color) -> Color {
    if relative_luma(fill) > 192.0 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_the_hash() {
        let a = parse_hex_color("#DA1D23").unwrap();
        let b = parse_hex_color("da1d23").unwrap();
        assert_eq!(a.to_rgba8(), b.to_rgba8());
        let rgba = a.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0xDA, 0x1D, 0x23, 0xFF));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            parse_hex_color("#FFF"),
            Err(ColorParseError::UnexpectedLength { found: 3 })
        );
        assert_eq!(
            parse_hex_color("#FFFFFFFF"),
            Err(ColorParseError::UnexpectedLength { found: 8 })
        );
        assert_eq!(
            parse_hex_color(""),
            Err(ColorParseError::UnexpectedLength { found: 0 })
        );
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(
            parse_hex_color("#GG0000"),
            Err(ColorParseError::InvalidDigit { digit: 'G' })
        );
        assert_eq!(
            parse_hex_color("#12 456"),
            Err(ColorParseError::InvalidDigit { digit: ' ' })
        );
    }

    #[test]
    fn luma_endpoints() {
        assert_eq!(relative_luma(parse_hex_color("#FFFFFF").unwrap()), 255.0);
        assert_eq!(relative_luma(parse_hex_color("#000000").unwrap()), 0.0);
    }

    #[test]
    fn white_fill_gets_black_text_and_black_fill_gets_white() {
        let on_white = contrasting_text_color(parse_hex_color("#FFFFFF").unwrap());
        assert_eq!(on_white.to_rgba8(), Color::BLACK.to_rgba8());
        let on_black = contrasting_text_color(parse_hex_color("#000000").unwrap());
        assert_eq!(on_black.to_rgba8(), Color::WHITE.to_rgba8());
    }

    #[test]
    fn luma_exactly_192_is_not_light() {
        // #C0C0C0 has luma exactly 192; the rule is strict `> 192`, so the
        // boundary resolves to white text.
        let fill = parse_hex_color("#C0C0C0").unwrap();
        assert_eq!(relative_luma(fill), 192.0);
        assert_eq!(contrasting_text_color(fill).to_rgba8(), Color::WHITE.to_rgba8());
    }
}
