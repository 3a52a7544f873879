//! # Quadrat
//!
//! Exact areas under quadratic curves.
//!
//! Quadrat integrates `f(x) = ax² + bx + c` over `[x_start, x_end]`, either
//! as a signed integral or as the total area between the curve and the
//! x-axis. Rational inputs give exact rational answers; irrational roots are
//! handled as quadratic surds and rounded once at the end.
//!
//! ## Crates
//!
//! - [`integers`]: arbitrary precision integers, rationals and surds
//! - [`integrate`]: roots, partitioning and the integration engine
//!
//! ## Quick Start
//!
//! ```rust
//! use quadrat::prelude::*;
//!
//! let f = QuadraticCoefficients::new(1, 0, -1);
//! let request = IntegrationRequest::absolute_area(f, -2, 2);
//! let result = integrate(&request).unwrap();
//!
//! assert_eq!(result.value.to_string(), "4");
//! println!("{}", quadrat::summary::render(&request, &result));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quadrat_integers as integers;
pub use quadrat_integrate as integrate;

pub mod summary;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quadrat_integers::{Integer, QuadraticSurd, Rational, Value};
    pub use quadrat_integrate::{
        integrate, integrate_with_options, IntegrateError, IntegrationMode, IntegrationOptions,
        IntegrationRequest, IntegrationResult, Operand, QuadraticCoefficients,
    };
}
