//! Relative perturbation axes.
//!
//! An axis is the arithmetic sequence of factors `start + step · i` for
//! `i` in `0..points`; the perturbed values are `base · factor`.

use super::error::GridError;

/// Arithmetic sequence of relative factors applied to a base value.
///
/// # Examples
/// ```
/// use pricer_risk::scenarios::AxisSpec;
///
/// let spot = AxisSpec::spot_default();
/// let values = spot.values(100.0);
/// assert_eq!(values.len(), 11);
/// assert_eq!(values[0], 80.0);
/// assert_eq!(values[5], 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    start: f64,
    step: f64,
    points: usize,
}

impl AxisSpec {
    /// Number of points on each default axis.
    pub const DEFAULT_POINTS: usize = 11;

    /// Creates a validated axis specification.
    ///
    /// # Arguments
    /// * `axis` - Axis name used in error messages
    /// * `start` - First factor (must be positive and finite)
    /// * `step` - Increment between factors (must be non-negative and finite)
    /// * `points` - Number of factors (at least 1)
    ///
    /// # Errors
    /// `GridError::InvalidAxis` describing the first violated constraint.
    pub fn new(axis: &'static str, start: f64, step: f64, points: usize) -> Result<Self, GridError> {
        if !start.is_finite() || start <= 0.0 {
            return Err(GridError::invalid_axis(
                axis,
                format!("start must be positive and finite, got {}", start),
            ));
        }
        if !step.is_finite() || step < 0.0 {
            return Err(GridError::invalid_axis(
                axis,
                format!("step must be non-negative and finite, got {}", step),
            ));
        }
        if points == 0 {
            return Err(GridError::invalid_axis(axis, "points must be at least 1"));
        }

        let spec = Self {
            start,
            step,
            points,
        };
        let last = spec.factor(points - 1);
        if !last.is_finite() {
            return Err(GridError::invalid_axis(
                axis,
                format!("last factor is not finite ({})", last),
            ));
        }
        Ok(spec)
    }

    /// Spot axis: 80% to 120% of the base spot in 4% steps.
    pub fn spot_default() -> Self {
        Self {
            start: 0.8,
            step: 0.04,
            points: Self::DEFAULT_POINTS,
        }
    }

    /// Volatility axis: 50% to 150% of the base volatility in 10% steps.
    pub fn volatility_default() -> Self {
        Self {
            start: 0.5,
            step: 0.1,
            points: Self::DEFAULT_POINTS,
        }
    }

    /// Returns the first factor.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the increment between factors.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of points.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Factor at `index`: `start + step · index`.
    #[inline]
    pub fn factor(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Iterator over all factors.
    pub fn factors(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.points).map(move |i| self.factor(i))
    }

    /// Perturbed values `base · factor(i)`, in axis order.
    pub fn values(&self, base: f64) -> Vec<f64> {
        self.factors().map(|f| base * f).collect()
    }
}
