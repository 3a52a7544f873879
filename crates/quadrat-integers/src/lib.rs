//! # quadrat-integers
//!
//! Exact number types for the quadrat area engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//! - Best rational approximation of `f64` values under a denominator bound
//! - Exactness-tagged results (`Value`)
//! - Quadratic surds `p + q√k` (`QuadraticSurd`) for irrational roots
//!
//! ## Exactness
//!
//! Integrating an integer-coefficient quadratic over rational bounds never
//! leaves the rationals. Approximation only enters through
//! [`Rational::from_f64_approx`], and every value produced that way is tagged
//! [`Value::Approximate`] so callers can tell the two apart.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;
pub mod surd;
pub mod value;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use integer::Integer;
pub use rational::{Rational, DEFAULT_MAX_DENOMINATOR};
pub use surd::QuadraticSurd;
pub use value::Value;
