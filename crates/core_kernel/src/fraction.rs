//! Exact rational arithmetic for share calculations
//!
//! Inheritance shares are simple fractions (1/2, 1/3, 1/4, 1/6, 1/8, 2/3)
//! whose sums must be compared exactly. `Fraction` keeps a reduced
//! numerator/denominator pair and only converts to a decimal amount
//! when applied to money, via [`Fraction::apply_to`].
//!
//! # Invariants
//!
//! - The denominator is always strictly positive
//! - Numerator and denominator share no common factor
//! - Zero is always represented as `0/1`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during fraction arithmetic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("Fraction denominator cannot be zero")]
    ZeroDenominator,

    #[error("Fraction arithmetic overflow")]
    Overflow,

    #[error("Decimal overflow applying fraction {0} to {1}")]
    DecimalOverflow(String, String),
}

/// An exact, always-reduced rational number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFraction")]
pub struct Fraction {
    numerator: i128,
    denominator: i128,
}

/// Unchecked wire form, reduced on deserialization
#[derive(Deserialize)]
struct RawFraction {
    numerator: i128,
    denominator: i128,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = FractionError;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

const fn const_gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn gcd(a: i128, b: i128) -> u128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numerator: 0, denominator: 1 };
    pub const ONE: Fraction = Fraction { numerator: 1, denominator: 1 };

    /// Creates a reduced fraction
    ///
    /// # Errors
    ///
    /// Returns `ZeroDenominator` if `denominator` is zero, `Overflow` if the
    /// sign cannot be normalized.
    pub fn new(numerator: i128, denominator: i128) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        if numerator == 0 {
            return Ok(Self::ZERO);
        }

        let g = gcd(numerator, denominator);
        // g divides both, so it fits whenever either magnitude fits
        let g = i128::try_from(g).map_err(|_| FractionError::Overflow)?;
        let (mut n, mut d) = (numerator / g, denominator / g);
        if d < 0 {
            n = n.checked_neg().ok_or(FractionError::Overflow)?;
            d = d.checked_neg().ok_or(FractionError::Overflow)?;
        }
        Ok(Self { numerator: n, denominator: d })
    }

    /// Creates a whole-number fraction
    pub fn from_integer(value: i128) -> Self {
        Self { numerator: value, denominator: 1 }
    }

    /// Creates a fraction from two small constants, for rule tables
    ///
    /// Reduces like [`Fraction::new`]. A zero denominator fails const
    /// evaluation when used in a `const` item.
    pub const fn ratio(numerator: u32, denominator: u32) -> Self {
        assert!(denominator != 0, "Fraction denominator cannot be zero");
        let divisor = const_gcd(numerator, denominator);
        Self {
            numerator: (numerator / divisor) as i128,
            denominator: (denominator / divisor) as i128,
        }
    }

    pub fn numerator(&self) -> i128 {
        self.numerator
    }

    pub fn denominator(&self) -> i128 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Checked addition
    pub fn checked_add(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        let g = i128::try_from(gcd(self.denominator, other.denominator))
            .map_err(|_| FractionError::Overflow)?;
        let left = self
            .numerator
            .checked_mul(other.denominator / g)
            .ok_or(FractionError::Overflow)?;
        let right = other
            .numerator
            .checked_mul(self.denominator / g)
            .ok_or(FractionError::Overflow)?;
        let numerator = left.checked_add(right).ok_or(FractionError::Overflow)?;
        let denominator = self
            .denominator
            .checked_mul(other.denominator / g)
            .ok_or(FractionError::Overflow)?;
        Fraction::new(numerator, denominator)
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        self.checked_add(&other.checked_neg()?)
    }

    /// Checked negation
    pub fn checked_neg(&self) -> Result<Fraction, FractionError> {
        Ok(Fraction {
            numerator: self.numerator.checked_neg().ok_or(FractionError::Overflow)?,
            denominator: self.denominator,
        })
    }

    /// Checked multiplication, cross-reducing before multiplying
    pub fn checked_mul(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Fraction::ZERO);
        }
        let g1 = i128::try_from(gcd(self.numerator, other.denominator))
            .map_err(|_| FractionError::Overflow)?;
        let g2 = i128::try_from(gcd(other.numerator, self.denominator))
            .map_err(|_| FractionError::Overflow)?;
        let numerator = (self.numerator / g1)
            .checked_mul(other.numerator / g2)
            .ok_or(FractionError::Overflow)?;
        let denominator = (self.denominator / g2)
            .checked_mul(other.denominator / g1)
            .ok_or(FractionError::Overflow)?;
        Fraction::new(numerator, denominator)
    }

    /// Checked division
    pub fn checked_div(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        self.checked_mul(&other.recip()?)
    }

    /// Multiplies by an integer count
    pub fn checked_mul_int(&self, factor: i128) -> Result<Fraction, FractionError> {
        self.checked_mul(&Fraction::from_integer(factor))
    }

    /// Divides by an integer count
    pub fn checked_div_int(&self, divisor: i128) -> Result<Fraction, FractionError> {
        self.checked_mul(&Fraction::new(1, divisor)?)
    }

    /// Returns the reciprocal
    pub fn recip(&self) -> Result<Fraction, FractionError> {
        Fraction::new(self.denominator, self.numerator)
    }

    /// Sums a sequence of fractions exactly
    pub fn checked_sum<'a, I>(values: I) -> Result<Fraction, FractionError>
    where
        I: IntoIterator<Item = &'a Fraction>,
    {
        values
            .into_iter()
            .try_fold(Fraction::ZERO, |acc, f| acc.checked_add(f))
    }

    /// Applies this fraction to a decimal amount: `amount * numerator / denominator`
    ///
    /// This is the only place share arithmetic leaves exact rationals.
    pub fn apply_to(&self, amount: Decimal) -> Result<Decimal, FractionError> {
        let overflow = || FractionError::DecimalOverflow(self.to_string(), amount.to_string());
        let numerator =
            Decimal::try_from_i128_with_scale(self.numerator, 0).map_err(|_| overflow())?;
        let denominator =
            Decimal::try_from_i128_with_scale(self.denominator, 0).map_err(|_| overflow())?;
        amount
            .checked_mul(numerator)
            .and_then(|product| product.checked_div(denominator))
            // Large per-head denominators: divide first, at some cost in the last digits
            .or_else(|| {
                amount
                    .checked_div(denominator)
                    .and_then(|quotient| quotient.checked_mul(numerator))
            })
            .ok_or_else(overflow)
    }

    /// Lossy decimal view, for display and logging
    pub fn to_decimal(&self) -> Option<Decimal> {
        self.apply_to(Decimal::ONE).ok()
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl Ord for Fraction {
    /// Compares by continued-fraction expansion so no cross product can overflow
    fn cmp(&self, other: &Self) -> Ordering {
        let (mut a, mut b) = (self.numerator, self.denominator);
        let (mut c, mut d) = (other.numerator, other.denominator);
        let mut flipped = false;

        loop {
            let (qa, ra) = (a.div_euclid(b), a.rem_euclid(b));
            let (qc, rc) = (c.div_euclid(d), c.rem_euclid(d));
            let ordering = match qa.cmp(&qc) {
                Ordering::Equal => match (ra == 0, rc == 0) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    // ra/b vs rc/d compares inversely to b/ra vs d/rc
                    (false, false) => {
                        (a, b, c, d) = (b, ra, d, rc);
                        flipped = !flipped;
                        continue;
                    }
                },
                unequal => unequal,
            };
            return if flipped { ordering.reverse() } else { ordering };
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
