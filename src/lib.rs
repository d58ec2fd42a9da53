#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod extract;
pub mod interpolator;
pub mod render;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: point extraction + the quadratic estimator.
pub use crate::extract::extract_points;
pub use crate::interpolator::{sample_curve, EstimatorError, Interpolator, QuadraticKalman};
pub use crate::types::{LineSegment, Point};

// Rendering helpers for diagnostic output.
pub use crate::render::{render_scene, Canvas, RenderOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_curve::prelude::*;
///
/// # fn main() -> Result<(), EstimatorError> {
/// let segments = vec![LineSegment::new(0.0, 0.0, 2.0, 2.0)];
/// let points = extract_points(&segments);
///
/// let mut estimator = QuadraticKalman::new(0.01, 10.0)?;
/// estimator.fit(&points)?;
/// println!("{}", estimator.describe());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::extract::extract_points;
    pub use crate::interpolator::{EstimatorError, Interpolator, QuadraticKalman};
    pub use crate::types::{LineSegment, Point};
}
