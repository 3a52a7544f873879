//! Exact Definite Integrals of Quadratics
//!
//! This crate computes `∫ ax² + bx + c dx` over a finite interval, either as
//! the signed integral or as the total area enclosed between the curve and
//! the x-axis.
//!
//! # Quick Start
//!
//! ```
//! use quadrat_integrate::{integrate, IntegrationRequest, QuadraticCoefficients};
//!
//! // ∫₋₂² |x² - 1| dx = 4
//! let f = QuadraticCoefficients::new(1, 0, -1);
//! let result = integrate(&IntegrationRequest::absolute_area(f, -2, 2)).unwrap();
//! assert_eq!(result.value.to_string(), "4");
//! assert_eq!(result.segments.len(), 3);
//! ```
//!
//! # Exactness
//!
//! When every coefficient and bound is an exact rational, the antiderivative
//! is evaluated in exact arithmetic, including at irrational roots, which are
//! carried as quadratic surds. Real-valued (`f64`) inputs switch to a
//! floating-point path whose results are tagged
//! [`Value::Approximate`](quadrat_integers::Value::Approximate).
//!
//! # Features
//!
//! - **Closed-form roots**: quadratic formula with an explicit near-zero
//!   leading coefficient branch ([`IntegrationOptions::leading_tolerance`])
//! - **Segmented area**: splits the interval at every interior root
//! - **Audit trail**: every result carries its per-segment trace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod antiderivative;
pub mod definite;
pub mod error;
pub mod operand;
pub mod options;
pub mod partition;
pub mod quadratic;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use antiderivative::Antiderivative;
pub use definite::{
    integrate, integrate_with_options, IntegrationMode, IntegrationRequest, IntegrationResult,
    SegmentTrace,
};
pub use error::IntegrateError;
pub use operand::Operand;
pub use options::IntegrationOptions;
pub use partition::{partition, Segment};
pub use quadratic::{ExactQuadratic, QuadraticCoefficients, RealQuadratic};
pub use roots::{exact_roots, real_roots, RealRoots};
