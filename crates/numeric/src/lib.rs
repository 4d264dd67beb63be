//! Numeric kernel for the Poseidon ground-motion selector.
//!
//! Stateless utility functions shared by every stage of the selection
//! pipeline:
//!
//! - [`lower_bound`] / [`interpolate`] — binary search and piecewise-linear
//!   interpolation over sorted (key, value) pairs
//! - [`empirical_cdf`] — right-continuous staircase CDF from sample values
//! - [`binomial`] — floating-point binomial coefficient
//! - [`ks_critical_value`] — two-sided Kolmogorov–Smirnov critical value
//!   (exact Miller table for n ≤ 20, asymptotic approximation above)
//! - [`sample_without_replacement`] — partial Fisher–Yates sampling over an
//!   injected [`rand::Rng`]
//!
//! # Quick start
//!
//! ```
//! use poseidon_numeric::{interpolate, ks_critical_value};
//!
//! let cdf = [(0.1, 0.0), (0.2, 0.5), (0.4, 1.0)];
//! assert!((interpolate(&cdf, 0.3).unwrap() - 0.75).abs() < 1e-12);
//! assert!(ks_critical_value(30, 0.10).is_ok());
//! ```

pub mod cdf;
pub mod combin;
pub mod error;
pub mod interp;
pub mod ks;
pub mod sample;

pub use cdf::empirical_cdf;
pub use combin::binomial;
pub use error::NumericError;
pub use interp::{interpolate, lower_bound};
pub use ks::ks_critical_value;
pub use sample::sample_without_replacement;
