//! Errors surfaced by the integration engine.

use quadrat_integers::RationalError;
use thiserror::Error;

/// Errors that can occur while preparing or running an integration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum IntegrateError {
    /// An operand is NaN or infinite.
    #[error("{field} is not a finite number")]
    NonFiniteInput {
        /// Name of the offending field (`"a"`, `"x_start"`, ...).
        field: &'static str,
    },

    /// Text that is neither a fraction nor a finite decimal.
    #[error("invalid number {0:?}")]
    InvalidOperand(String),

    /// A negative or non-finite leading coefficient tolerance.
    #[error("leading coefficient tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// Failure in rational arithmetic or approximation.
    #[error(transparent)]
    Rational(#[from] RationalError),
}
