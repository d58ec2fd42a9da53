use super::describe::format_equation;
use super::{EstimatorError, Interpolator};
use crate::types::Point;
use log::{debug, warn};
use nalgebra::{Matrix3, RowVector3, Vector3};

/// Scale of the prior covariance. Large enough that the first few
/// observations dominate the uninformative prior.
const PRIOR_COVARIANCE_SCALE: f64 = 100.0;

/// Recursive Bayesian estimator for the coefficients of `y = ax^2 + bx + c`.
///
/// See the [module docs](super) for the filter model. The estimator starts
/// from the uninformative prior `θ = (0, 0, 0)`, `P = 100·I`, and is refined
/// in place by [`Interpolator::fit`]; [`Interpolator::predict`] and
/// [`Interpolator::describe`] never mutate it.
#[derive(Clone, Debug)]
pub struct QuadraticKalman {
    /// Current best estimate of `(a, b, c)`.
    coefficients: Vector3<f64>,
    /// Uncertainty about `coefficients`; symmetric positive-semidefinite.
    covariance: Matrix3<f64>,
    /// Covariance inflation applied before each update; fixed at construction.
    process_noise: Matrix3<f64>,
    /// Variance of the scalar `y` observation; fixed at construction.
    measurement_noise: f64,
}

impl QuadraticKalman {
    /// Create an estimator with the given noise variances.
    ///
    /// Both must be positive and finite: a non-positive measurement noise can
    /// make the update singular, and a non-positive process noise is
    /// degenerate; both are rejected with
    /// [`EstimatorError::InvalidConfiguration`].
    pub fn new(process_noise: f64, measurement_noise: f64) -> Result<Self, EstimatorError> {
        check_positive("process noise", process_noise)?;
        check_positive("measurement noise", measurement_noise)?;
        Ok(Self {
            coefficients: Vector3::zeros(),
            covariance: Matrix3::identity() * PRIOR_COVARIANCE_SCALE,
            process_noise: Matrix3::identity() * process_noise,
            measurement_noise,
        })
    }

    /// Current coefficient estimate `(a, b, c)`.
    pub fn coefficients(&self) -> Vector3<f64> {
        self.coefficients
    }

    /// Current state covariance.
    pub fn covariance(&self) -> Matrix3<f64> {
        self.covariance
    }

    /// One predict+update cycle for a single observation.
    ///
    /// The predicted covariance is kept on a local copy and only committed
    /// together with the update, so a failing observation leaves the estimator
    /// exactly as it was before the call.
    fn step(&mut self, point: Point) -> Result<(), EstimatorError> {
        // Predict: identity transition, covariance grows by the process noise.
        let predicted = self.covariance + self.process_noise;

        let h = RowVector3::new(point.x * point.x, point.x, 1.0);
        let innovation = point.y - (h * self.coefficients)[(0, 0)];
        let s = (h * predicted * h.transpose())[(0, 0)] + self.measurement_noise;
        if !(s.is_finite() && s > 0.0) {
            warn!(
                "rejecting observation ({}, {}): innovation covariance {s} \
                 is not positive and finite",
                point.x, point.y
            );
            return Err(EstimatorError::Numerical {
                innovation_covariance: s,
                x: point.x,
                y: point.y,
            });
        }

        let gain = predicted * h.transpose() / s;
        self.coefficients += gain * innovation;

        // Joseph form: preserves symmetry and positive-semidefiniteness even
        // when (I - KH)·P alone would drift after many near-singular updates.
        let i_kh = Matrix3::identity() - gain * h;
        self.covariance =
            i_kh * predicted * i_kh.transpose() + gain * self.measurement_noise * gain.transpose();
        Ok(())
    }
}

impl Interpolator for QuadraticKalman {
    fn fit(&mut self, points: &[Point]) -> Result<(), EstimatorError> {
        for &point in points {
            self.step(point)?;
        }
        if !points.is_empty() {
            debug!(
                "fitted {} points: a={} b={} c={}",
                points.len(),
                self.coefficients[0],
                self.coefficients[1],
                self.coefficients[2]
            );
        }
        Ok(())
    }

    fn predict(&self, x: f64) -> f64 {
        self.coefficients[0] * x * x + self.coefficients[1] * x + self.coefficients[2]
    }

    fn describe(&self) -> String {
        format_equation(&self.coefficients)
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<(), EstimatorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimatorError::InvalidConfiguration { parameter, value })
    }
}
