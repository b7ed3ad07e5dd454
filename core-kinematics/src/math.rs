use glam::DVec2;
use std::fmt;
use std::ops::{Add, MulAssign, Sub};
use tracing::debug;

#[cfg(feature = "debug")]
use tracing::trace;

/// Tolerance used for zero-snapping in the polar constructor and for equality.
pub const EPSILON: f64 = 1e-15;

// Polar and Cartesian forms are stored side by side. The polar side is only
// ever recomputed from x/y (see `resynchronize`), never the other way round.
#[derive(Clone, Copy, Debug)]
pub struct Vector2D {
    magnitude: f64,
    direction: f64, // Degrees, not normalized
    x: f64,
    y: f64,
}

impl Vector2D {
    /// Builds a vector from a magnitude and a direction in degrees.
    ///
    /// The snap to zero is decided on the unit trig value, before scaling:
    /// `new(1.0, 90.0)` has `x == 0.0` exactly, while `new(1e-16, 45.0)`
    /// keeps its tiny non-zero components. A negative magnitude is accepted
    /// and simply flips both components.
    pub fn new(magnitude: f64, direction: f64) -> Self {
        let theta = direction.to_radians();
        let x = scale_unit(theta.cos(), magnitude);
        let y = scale_unit(theta.sin(), magnitude);

        #[cfg(feature = "debug")]
        trace!(magnitude, direction, x, y, "Vector2D initialized");

        Self {
            magnitude,
            direction,
            x,
            y,
        }
    }

    /// Builds a vector with exactly the given components and derives the
    /// polar side from them.
    pub fn from_components(x: f64, y: f64) -> Self {
        let mut vec = Self {
            magnitude: 0.0,
            direction: 0.0,
            x,
            y,
        };
        vec.resynchronize();
        vec
    }

    // Raw constructor for constants; callers guarantee the fields agree.
    pub(crate) const fn from_parts(magnitude: f64, direction: f64, x: f64, y: f64) -> Self {
        Self {
            magnitude,
            direction,
            x,
            y,
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Direction in degrees, exactly as supplied or as recovered by
    /// `resynchronize`.
    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Overwrites the Cartesian side and brings magnitude/direction back in line.
    pub fn set_components(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.resynchronize();
    }

    /// Recomputes magnitude and direction from `x` and `y`.
    ///
    /// Direction comes from the single-argument arctangent, so anything in the
    /// second or third quadrant is reflected into (-90, 90): `(-1, -1)` reads
    /// as 45 degrees. On the y axis the direction is +90 when `y > 0` and -90
    /// otherwise, which makes the zero vector point at -90.
    pub fn resynchronize(&mut self) {
        self.magnitude = (self.x * self.x + self.y * self.y).sqrt();
        self.direction = if self.x == 0.0 {
            if self.y > 0.0 {
                90.0
            } else {
                -90.0
            }
        } else {
            (self.y / self.x).atan().to_degrees()
        };
    }

    /// Scales magnitude and both components in place.
    ///
    /// Direction is left untouched, so a negative `scalar` produces a vector
    /// whose components point opposite to its recorded direction and whose
    /// magnitude is negative.
    pub fn scalar_multiply(&mut self, scalar: f64) {
        self.magnitude *= scalar;
        self.x *= scalar;
        self.y *= scalar;
    }

    /// Field-by-field tolerance comparison.
    pub fn compare(&self, other: &Vector2D) -> EqualityReport {
        EqualityReport {
            magnitude: (self.magnitude - other.magnitude).abs() < EPSILON,
            direction: (self.direction - other.direction).abs() < EPSILON,
            x: (self.x - other.x).abs() < EPSILON,
            y: (self.y - other.y).abs() < EPSILON,
        }
    }

    /// True when all four fields agree within `EPSILON`. Directions are
    /// compared as plain numbers, so 370 and 10 degrees are not equal.
    pub fn approx_eq(&self, other: &Vector2D) -> bool {
        self.compare(other).is_equal()
    }

    pub fn to_glam(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_glam(v: DVec2) -> Self {
        Self::from_components(v.x, v.y)
    }
}

// Unit trig values below EPSILON count as exact zeros.
fn scale_unit(unit: f64, magnitude: f64) -> f64 {
    if unit.abs() < EPSILON {
        0.0
    } else {
        unit * magnitude
    }
}

/// Outcome of comparing each field of two vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EqualityReport {
    pub magnitude: bool,
    pub direction: bool,
    pub x: bool,
    pub y: bool,
}

impl EqualityReport {
    pub fn is_equal(&self) -> bool {
        self.magnitude && self.direction && self.x && self.y
    }
}

/// Compares two vectors and reports the per-field evaluation as a `debug`
/// event. Returns the same answer as `a == b`.
pub fn trace_equality(a: &Vector2D, b: &Vector2D) -> bool {
    let report = a.compare(b);
    debug!("About to perform equality checks between two vectors:\n{a}\n{b}");
    debug!(
        magnitude = report.magnitude,
        direction = report.direction,
        x = report.x,
        y = report.y,
        "Equality evaluations"
    );
    report.is_equal()
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector(Magnitude: {:?}, Direction: {:?}, X-Component: {:?}, Y-Component: {:?})",
            self.magnitude, self.direction, self.x, self.y
        )
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::from_glam(self.to_glam() + other.to_glam())
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::from_glam(self.to_glam() - other.to_glam())
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, scalar: f64) {
        self.scalar_multiply(scalar);
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.to_glam()
    }
}
