//! Colour maths for the simulator: hex parsing, HSL conversion and the palette grid.

use crate::constants::{PALETTE_LIGHTNESS, PALETTE_SAT_BASE, PALETTE_SAT_SPAN};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected six hex digits, got {0:?}")]
    MalformedHex(String),
    #[error("channel value {0:?} is not a number")]
    BadChannel(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, any letter case.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::MalformedHex(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::MalformedHex(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`, the form native colour inputs accept.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB` for the text field.
    pub fn to_hex_label(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// `h` in degrees, `s` and `l` in 0..=1.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match h {
        h if (0.0..60.0).contains(&h) => (c, x, 0.0),
        h if (60.0..120.0).contains(&h) => (x, c, 0.0),
        h if (120.0..180.0).contains(&h) => (0.0, c, x),
        h if (180.0..240.0).contains(&h) => (0.0, x, c),
        h if (240.0..300.0).contains(&h) => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_u8(r), to_u8(g), to_u8(b))
}

/// Row-major swatches: hue sweeps across columns, saturation rises down rows.
pub fn palette_grid(cols: usize, rows: usize) -> Vec<Rgb> {
    let mut out = Vec::with_capacity(cols * rows);
    let sat_step = if rows > 1 {
        PALETTE_SAT_SPAN / (rows - 1) as f32
    } else {
        0.0
    };
    for row in 0..rows {
        for col in 0..cols {
            let h = (col as f32 * (360.0 / cols as f32)).round();
            let s = PALETTE_SAT_BASE + (row as f32 * sat_step).round();
            out.push(hsl_to_rgb(h, s / 100.0, PALETTE_LIGHTNESS / 100.0));
        }
    }
    out
}

/// Read one channel from a slider/number pair. The slider wins when it has a
/// value; the result is rounded and clamped to a byte.
pub fn channel_from_inputs(slider: &str, number: &str) -> Result<u8, ColorError> {
    let raw = if slider.trim().is_empty() { number } else { slider };
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ColorError::BadChannel(raw.to_string()))?;
    if !v.is_finite() {
        return Err(ColorError::BadChannel(raw.to_string()));
    }
    Ok(v.round().clamp(0.0, 255.0) as u8)
}
