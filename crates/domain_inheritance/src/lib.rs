//! Inheritance Domain
//!
//! This crate implements an Islamic inheritance (Fara'id) distribution engine:
//! given an estate and the counts of surviving relatives, it computes each
//! heir class's exact entitlement under the classical fixed-share and
//! residuary rules.
//!
//! # Pipeline
//!
//! ```text
//! EstateInput
//!   -> InputValidator      structural checks
//!   -> NetEstate           debts, then a bequest capped at one third
//!   -> Eligibility         who is excluded by a closer relative
//!   -> FixedShares         Qur'anic fractions per survivor context
//!   -> ResidualDistributor remainder to the closest residuary tier
//!   -> Normalizer          awl / radd, then amounts per class and member
//!   -> DistributionResult
//! ```
//!
//! # Key Concepts
//!
//! - **Fixed share**: a fraction (1/2, 1/3, 1/4, 1/6, 1/8, 2/3) owed to a class
//! - **Residuary heir**: takes what fixed shares leave, males two portions per head
//! - **Awl**: proportional reduction when fixed shares exceed the estate
//! - **Radd**: proportional return of a remainder to blood relatives
//!
//! # Exactness
//!
//! All share arithmetic uses [`core_kernel::Fraction`]. Fractions are
//! converted to decimal amounts only in the final step, so the awarded
//! fractions always close at exactly one (or at one minus an unresolved
//! remainder).

pub mod allocation;
pub mod distribution;
pub mod eligibility;
pub mod error;
pub mod fixed_share;
pub mod heir;
pub mod input;
pub mod net_estate;
pub mod normalizer;
pub mod payout;
pub mod residual;
pub mod validation;
pub mod warning;

pub use allocation::ShareTable;
pub use distribution::{compute, ClassShare, DistributionResult, IndividualShare};
pub use eligibility::{Eligibility, ExcludedClass, ExclusionReason, HeirStatus};
pub use error::{DistributionError, InputField, ValidationError};
pub use fixed_share::{FixedShares, ShareBasis};
pub use heir::HeirClass;
pub use input::{DeceasedSex, EstateInput};
pub use net_estate::NetEstate;
pub use normalizer::{Normalization, Normalizer};
pub use payout::{Payout, PayoutSchedule};
pub use residual::{ResidualDistributor, ResidueOutcome};
pub use validation::InputValidator;
pub use warning::{Warning, WarningKind};
