#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot escape-time renderer
//!
//! The Mandelbrot set lives on the complex plane: take a point,
//! square it and add the original point back in, over and over, and
//! watch whether the result runs away to infinity.  The number of
//! steps it takes to run away -- the "escape time" -- is the number
//! used to color the image.  Points that never run away within the
//! iteration budget form the black heart of the set.
//!
//! This crate maps every pixel of a fixed raster onto a rectangle of
//! the complex plane, measures its escape time, and colors it with
//! one of two policies: a plain grayscale ramp, or a
//! hue/saturation/value sweep converted to RGB with byte-wide integer
//! arithmetic.  The finished raster is handed to a PNM encoder and
//! written out as a binary PPM.

extern crate crossbeam;
extern crate itertools;
extern crate num;

#[cfg(test)]
extern crate rand;

pub mod color;
pub mod planes;
pub mod render;

pub use color::{ColorPolicy, Hsv, Rgb};
pub use render::EscapeRenderer;
