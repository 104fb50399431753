//! Theoretical values of European and American options, either on a
//! discrete binomial lattice or with the Black-Scholes closed form.
//!
//! ```
//! use valuation::{OptionContract, OptionParameters, TimeHorizon};
//!
//! let params = OptionParameters::new(0.1, 20.0, 21.0, TimeHorizon::Periods(2))
//!     .with_up(1.2)
//!     .with_down(0.67);
//! let mut contract = OptionContract::new(params);
//! contract.binomial_model().unwrap();
//! assert!((contract.value().unwrap() - 4.2432).abs() < 1e-4);
//! ```

pub mod analytic;
pub mod common;
pub mod contract;
pub mod error;
pub mod lattice;

pub use common::models::{ExerciseStyle, OptionParameters, OptionType, TimeHorizon};
pub use contract::OptionContract;
pub use error::{ValuationError, ValuationResult};
