//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the real plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of the real
//! plane.
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.  For that reason,
/// the lower-left-hand corner is not included.
#[derive(Copy, Clone, Debug)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug)]
pub struct ComplexPlane(pub Complex<f32>, pub Complex<f32>);

/// Describes the x, y of a point in a region.  Yes, it's the exact
/// same. Names are important.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex, real cartesian plane.  Maps pixels from one to points
/// on the other.  'leftlower' may seem ungrammatical, but it fits with
/// our x,y schema.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // The width and height of the complex rectangle.  Kept separate so
    // the pixel-to-point arithmetic runs multiply-then-divide in single
    // precision, the order the reference images were produced with.
    spans: (f32, f32),
}

impl PlaneMapper {
    /// Constructor.  Takes the width and height of the integral plane,
    /// and two points describing the complex plane.  Fails if the
    /// corners are not in leftlower/rightupper order.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f32>,
        rightupper: Complex<f32>,
    ) -> Result<PlaneMapper, String> {
        if rightupper.re < leftlower.re {
            return Err(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            );
        }

        if rightupper.im < leftlower.im {
            return Err(
                "The left lower corner is not lower than the right upper corner".to_string(),
            );
        }

        let spans = (
            rightupper.re - leftlower.re,
            rightupper.im - leftlower.im,
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            spans,
        })
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, map that to the
    /// corresponding point on the complex cartesian plane.  The map is
    /// half-open: pixel 0 lands exactly on the leftlower corner, and
    /// the last pixel column stops one grid step short of rightupper.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f32> {
        Complex::new(
            (pixel.0 as f32) * self.spans.0 / (self.integral_plane.0 as f32)
                + self.complex_plane.0.re,
            (pixel.1 as f32) * self.spans.1 / (self.integral_plane.1 as f32)
                + self.complex_plane.0.im,
        )
    }
}
