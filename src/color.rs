//! Pixel color types and the mapping from an escape time to a final
//! color.  Two policies are supported: a grayscale ramp, and an HSV
//! sweep converted to RGB.  The HSV conversion is done entirely in
//! byte-wide integer arithmetic; the truncations involved are part of
//! the look of the output, so the widths here are deliberate.

use std::str::FromStr;

/// A final red/green/blue pixel, one byte per channel.  This is the
/// only color type that ever reaches the raster.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A hue/saturation/value triple.  Transient: it exists only between
/// the escape-time remap and the conversion to [Rgb], and is never
/// stored in a raster.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hsv {
    /// Hue, with the full color wheel squeezed into 0..=255.
    pub h: u8,
    /// Saturation, 0 (gray) to 255 (fully saturated).
    pub s: u8,
    /// Value, 0 (black) to 255 (full brightness).
    pub v: u8,
}

impl Hsv {
    /// Converts to RGB with the classic byte-wide integer algorithm:
    /// the hue wheel is cut into six regions of width 43, and the
    /// three blend channels p, q, t are built from wide products
    /// truncated to eight bits on store.  The truncations are load
    /// bearing; do not "clean up" the arithmetic.
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0 {
            return Rgb {
                r: self.v,
                g: self.v,
                b: self.v,
            };
        }

        let region = self.h / 43;
        let remainder = (self.h - region * 43).wrapping_mul(6);

        let v = u16::from(self.v);
        let s = u16::from(self.s);
        let rem = u16::from(remainder);

        let p = (v * (255 - s) >> 8) as u8;
        let q = (v * (255 - (s * rem >> 8)) >> 8) as u8;
        let t = (v * (255 - (s * (255 - rem) >> 8)) >> 8) as u8;
        let v = self.v;

        match region {
            0 => Rgb { r: v, g: t, b: p },
            1 => Rgb { r: q, g: v, b: p },
            2 => Rgb { r: p, g: v, b: t },
            3 => Rgb { r: p, g: q, b: v },
            4 => Rgb { r: t, g: p, b: v },
            _ => Rgb { r: v, g: p, b: q },
        }
    }
}

/// Remaps x from one integer range to another, preserving relative
/// position.  Division truncates toward zero, which matters for the
/// descending saturation ramp.
fn map(x: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// How an escape time becomes a pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Escape time remapped to a single gray level on all three
    /// channels.  Interior points are black.
    Grayscale,
    /// Escape time remapped to a hue sweep (saturation falling,
    /// brightness rising with the count), then converted to RGB.
    /// Interior points are black.
    Hsv,
}

impl ColorPolicy {
    /// Maps an escape time `n`, measured against the iteration cap
    /// `limit`, to a final pixel.  `n == limit` means the point never
    /// escaped and renders as the set interior.
    pub fn color(&self, n: usize, limit: usize) -> Rgb {
        match *self {
            ColorPolicy::Grayscale => {
                let gray = if n < limit {
                    map(n as i64, 0, limit as i64, 0, 255) as u8
                } else {
                    0
                };
                Rgb {
                    r: gray,
                    g: gray,
                    b: gray,
                }
            }
            ColorPolicy::Hsv => {
                let hsv = if n < limit {
                    Hsv {
                        h: map(n as i64, 0, limit as i64, 0, 255) as u8,
                        s: map(n as i64, 0, limit as i64, 255, 0) as u8,
                        v: map(n as i64, 0, limit as i64, 100, 250) as u8,
                    }
                } else {
                    Hsv { h: 0, s: 0, v: 0 }
                };
                hsv.to_rgb()
            }
        }
    }
}

impl FromStr for ColorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<ColorPolicy, String> {
        match s {
            "gray" | "grayscale" => Ok(ColorPolicy::Grayscale),
            "hsv" => Ok(ColorPolicy::Hsv),
            other => Err(format!("Unknown color policy: {}", other)),
        }
    }
}

/// Flattens a raster into the row-major channel bytes the PNM encoder
/// expects: three bytes per pixel, no padding.
pub fn to_bytes(pixels: &[Rgb]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixels.len() * 3);
    for pixel in pixels {
        bytes.push(pixel.r);
        bytes.push(pixel.g);
        bytes.push(pixel.b);
    }
    bytes
}
