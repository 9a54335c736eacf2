//! Core Kernel - Foundational value types for the inheritance engine
//!
//! This crate provides the building blocks shared by the domain and interface crates:
//! - Money types with precise decimal arithmetic
//! - Exact rational fractions for share arithmetic
//! - Common error types

pub mod money;
pub mod fraction;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use fraction::{Fraction, FractionError};
pub use error::CoreError;
