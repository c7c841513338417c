//! Shared test fixtures for argcheck crates.
//!
//! This crate provides data and pure functions for testing.
//! It depends only on `argcheck-core`, so the facade can use it as a
//! dev-dependency without a cycle.
//!
//! - [`generator`] - Deterministic argument generator
//! - [`values`] - Sample values per runtime type and sequence shape
//! - [`descriptions`] - Common constraint descriptions
//! - [`functions`] - Declared-parameter fixtures for the canonical test functions
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! argcheck-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use argcheck_test::generator::ArgGen;
//! use argcheck_test::functions::two_params_first_int;
//! ```

pub mod descriptions;
pub mod functions;
pub mod generator;
pub mod values;

// Re-export commonly used types at crate root for convenience
pub use functions::{FixtureFn, FixtureParam};
pub use generator::ArgGen;
