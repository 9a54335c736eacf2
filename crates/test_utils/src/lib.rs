//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! inheritance engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Worked estate scenarios with known distributions
//! - `builders`: Builder for estate inputs
//! - `assertions`: Distribution invariants as assertion helpers
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
