//! Modified Akima (makima) Interpolation
//!
//! Implements the piecewise-cubic
//! [modified Akima](https://blogs.mathworks.com/cleve/2019/04/29/makima-piecewise-cubic-interpolation/)
//! scheme.
//!
//! One derivative estimate is computed per sample node at construction,
//! as a weighted average of the four surrounding secant slopes. The
//! weighting favors the side whose local trend is more stable, which
//! suppresses the overshoot natural cubic splines produce near abrupt
//! trend changes. Evaluation locates the enclosing interval by binary
//! search and evaluates the cubic Hermite polynomial defined by the
//! interval's endpoint values and derivatives.


use std::fmt;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::helpers::{find_interval, secants, spacings};
use crate::interpolation::traits::Interpolator;


/// Below this, the weight denominator is treated as the 0/0 degenerate
/// case and the two central secants are averaged instead.
const WEIGHT_FLOOR: f64 = 1e-30;


/// Modified Akima interpolant.
///
/// # Construction
/// - [`Makima::new`] takes ownership of the sample vectors; no copy.
/// - [`Makima::from_slices`] copies borrowed samples.
///
/// Both validate up front: `x` and `y` must have equal length, at least
/// two points, and strictly increasing `x`. No partially constructed
/// value is observable on failure.
///
/// # Evaluation
/// - Through [`Interpolator::eval`] / [`Interpolator::eval_many`].
/// - Queries outside `[x[0], x[n-1]]` return
///   [`InterpolationError::OutOfBounds`].
/// - Evaluation takes `&self` and writes nothing; concurrent readers
///   need no coordination.
#[derive(Debug, Clone)]
pub struct Makima {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Hermite slope at each node
    s: Vec<f64>,
}

impl Makima {
    /// Builds the interpolant, taking ownership of the sample vectors.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] if `x` and `y` differ in length.
    /// - [`InterpolationError::InsufficientPoints`] if fewer than 2 points.
    /// - [`InterpolationError::NonIncreasingX`] at the first index whose
    ///   abscissa does not exceed its predecessor.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InterpolationError> {
        validate(&x, &y)?;

        let h = spacings(&x);
        let d = secants(&y, &h);
        let s = slopes(&d);

        Ok(Self { x, y, s })
    }

    /// Copying convenience constructor over borrowed samples.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::new(x.to_vec(), y.to_vec())
    }

    // getters
    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn slopes(&self) -> &[f64] { &self.s }
}


fn validate(x: &[f64], y: &[f64]) -> Result<(), InterpolationError> {
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: x.len() });
    }
    for i in 1..x.len() {
        if x[i] <= x[i - 1] {
            return Err(InterpolationError::NonIncreasingX {
                idx: i,
                prev: x[i - 1],
                curr: x[i],
            });
        }
    }
    Ok(())
}


/// Secant slopes extended by two phantom entries on each side, via
/// Akima's linear extrapolation of the end slopes. With a single real
/// secant every phantom equals it.
#[inline]
fn extended_secants(d: &[f64]) -> Vec<f64> {
    let nm = d.len();

    let (head2, head1, tail1, tail2) = if nm >= 2 {
        (
            3.0 * d[0] - 2.0 * d[1],
            2.0 * d[0] - d[1],
            2.0 * d[nm - 1] - d[nm - 2],
            3.0 * d[nm - 1] - 2.0 * d[nm - 2],
        )
    } else {
        (d[0], d[0], d[0], d[0])
    };

    let mut m = Vec::with_capacity(nm + 4);
    m.push(head2);
    m.push(head1);
    m.extend_from_slice(d);
    m.push(tail1);
    m.push(tail2);
    m
}


/// One Hermite slope per node.
///
/// Node `i` blends the two central secants `m[i-1]`, `m[i]` weighted by
/// the absolute secant differences on the opposite sides:
///
/// ```text
/// s[i] = (|m[i+1] - m[i]| * m[i-1] + |m[i-1] - m[i-2]| * m[i]) / w
/// w    =  |m[i+1] - m[i]|          + |m[i-1] - m[i-2]|
/// ```
///
/// The result always lies between `m[i-1]` and `m[i]`. When `w`
/// vanishes (locally linear or symmetric data) the blend is 0/0 and the
/// central secants are averaged instead, which stays inside the same
/// bracket.
#[inline]
fn slopes(d: &[f64]) -> Vec<f64> {
    let n = d.len() + 1;
    let m = extended_secants(d);

    let mut s = Vec::with_capacity(n);
    for i in 0..n {
        // m[k] holds the secant of interval i, m[k-1] the one before it
        let k = i + 2;
        let w1 = (m[k + 1] - m[k]).abs();
        let w2 = (m[k - 1] - m[k - 2]).abs();

        if w1 + w2 < WEIGHT_FLOOR {
            s.push(0.5 * (m[k - 1] + m[k]));
        } else {
            s.push((w1 * m[k - 1] + w2 * m[k]) / (w1 + w2));
        }
    }
    s
}


impl Interpolator for Makima {
    /// Evaluates the interpolant at `xq`.
    ///
    /// # Behavior
    /// - Finds the enclosing interval `[x[i], x[i+1])` by binary search
    ///   and evaluates the cubic Hermite polynomial in factored form:
    ///
    /// ```text
    /// yq = (1-t)^2 * (y[i]*(1+2t) + s[i]*dx*t)
    ///    +     t^2 * (y[i+1]*(3-2t) + dx*s[i+1]*(t-1))
    /// ```
    ///
    ///   with `dx = x[i+1] - x[i]` and `t = (xq - x[i]) / dx` in `[0, 1)`.
    /// - `xq == x[n-1]` returns `y[n-1]` directly; no interval half-open
    ///   on the right contains the final abscissa.
    ///
    /// # Errors
    /// - [`InterpolationError::OutOfBounds`] if `xq` lies outside
    ///   `[x[0], x[n-1]]`.
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let x = &self.x;
        let n = x.len();

        let x_min = x[0];
        let x_max = x[n - 1];
        if xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds {
                got: xq,
                x_min,
                x_max,
            });
        }
        if xq == x_max {
            return Ok(self.y[n - 1]);
        }

        let i = find_interval(x, xq);
        let dx = x[i + 1] - x[i];
        let t = (xq - x[i]) / dx;
        let omt = 1.0 - t;

        let yq = omt * omt * (self.y[i] * (1.0 + 2.0 * t) + self.s[i] * dx * t)
            + t * t * (self.y[i + 1] * (3.0 - 2.0 * t) + dx * self.s[i + 1] * (t - 1.0));

        Ok(yq)
    }
}


/// Diagnostic listing of each `(x, y, y')` triple. Not machine-parsable
/// and not guaranteed stable.
impl fmt::Display for Makima {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x, y, y') = {{")?;
        for i in 0..self.x.len() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {}, {})", self.x[i], self.y[i], self.s[i])?;
        }
        write!(f, "}}")
    }
}
