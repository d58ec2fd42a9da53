//! Curve interpolators.
//!
//! An interpolator consumes an ordered sequence of 2-D points and maintains a
//! model that can be queried for `y` at arbitrary `x` and rendered as a
//! human-readable equation. The single concrete implementation is
//! [`QuadraticKalman`], a recursive Bayesian estimator for the coefficients of
//! `y = ax^2 + bx + c`:
//!
//! - The state is the coefficient vector `(a, b, c)` itself; there is no
//!   motion model, so the predict step only inflates the covariance by the
//!   configured process noise.
//! - The observation row for a point `(x, y)` is `H = [x^2, x, 1]`, which
//!   makes `y = H · θ` exact for a quadratic, so each update is the exact
//!   (not linearized) Bayesian step for the linear-Gaussian model.
//! - The covariance update uses the Joseph form, which keeps the covariance
//!   symmetric and positive-semidefinite under ill-conditioned updates.
//!
//! Additional curve families (linear, cubic) would be further implementations
//! of [`Interpolator`], not subclasses of the Kalman variant.
//!
//! Fitting is inherently sequential: an instance must not be fed points from
//! multiple threads at once. Independent instances are fully independent.

mod describe;
mod kalman;

pub use kalman::QuadraticKalman;

use crate::types::Point;
use thiserror::Error;

/// Failures produced by interpolator construction and fitting.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EstimatorError {
    /// A noise parameter was not a positive finite value. Detected eagerly at
    /// construction; no estimator is produced.
    #[error("invalid configuration: {parameter} must be positive and finite, got {value}")]
    InvalidConfiguration { parameter: &'static str, value: f64 },

    /// The innovation covariance was not positive and finite during an update.
    /// The state from before the failing observation remains valid.
    #[error(
        "numerical failure at observation ({x}, {y}): \
         innovation covariance {innovation_covariance} is not positive and finite"
    )]
    Numerical {
        innovation_covariance: f64,
        x: f64,
        y: f64,
    },
}

/// Capability set shared by all curve interpolators: learn from points,
/// evaluate the model, describe it as text.
pub trait Interpolator {
    /// Incorporate the points strictly in the order given, refining the
    /// current model in place. An empty slice is a no-op; repeated calls keep
    /// refining rather than resetting.
    fn fit(&mut self, points: &[Point]) -> Result<(), EstimatorError>;

    /// Evaluate the current model at `x`. Pure; defined for all real `x`.
    fn predict(&self, x: f64) -> f64;

    /// Render the current model as a human-readable equation.
    fn describe(&self) -> String;
}

/// Sample an interpolator over `[start, end]` with the given positive step.
///
/// The end of the range is included up to a half-step of slack so that e.g.
/// `[-2, 2]` at step `0.01` ends exactly at `2.0` despite accumulation error.
/// A non-positive or non-finite step yields an empty vector.
pub fn sample_curve(interpolator: &dyn Interpolator, start: f64, end: f64, step: f64) -> Vec<Point> {
    if !(step > 0.0 && step.is_finite()) || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let mut points = Vec::new();
    let mut x = start;
    while x <= end + step * 0.5 {
        points.push(Point::new(x, interpolator.predict(x)));
        x += step;
    }
    points
}
