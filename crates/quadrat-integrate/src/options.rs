//! Tunable parameters of the integration engine.

use quadrat_integers::DEFAULT_MAX_DENOMINATOR;

use crate::error::IntegrateError;

/// Default threshold below which a floating-point leading coefficient counts as zero.
pub const DEFAULT_LEADING_TOLERANCE: f64 = 1e-12;

/// Options for [`integrate_with_options`](crate::integrate_with_options).
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationOptions {
    /// `|a| <= leading_tolerance` selects the linear branch on the
    /// floating-point path. Exact inputs ignore it and test `a == 0`.
    pub leading_tolerance: f64,
    /// Denominator bound used whenever a floating-point or irrational result
    /// is rounded to a fraction.
    pub max_denominator: u64,
}

impl Default for IntegrationOptions {
    fn default() -> Self {
        Self {
            leading_tolerance: DEFAULT_LEADING_TOLERANCE,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
        }
    }
}

impl IntegrationOptions {
    /// Sets the leading coefficient tolerance.
    pub fn with_leading_tolerance(mut self, tolerance: f64) -> Self {
        self.leading_tolerance = tolerance;
        self
    }

    /// Sets the denominator bound for approximated values.
    pub fn with_max_denominator(mut self, max_denominator: u64) -> Self {
        self.max_denominator = max_denominator;
        self
    }

    /// Checks that the options can be used.
    pub fn validate(&self) -> Result<(), IntegrateError> {
        if !self.leading_tolerance.is_finite() || self.leading_tolerance < 0.0 {
            return Err(IntegrateError::InvalidTolerance(self.leading_tolerance));
        }
        if self.max_denominator == 0 {
            return Err(quadrat_integers::RationalError::ZeroDenominatorBound.into());
        }
        Ok(())
    }
}
