//! Non-fatal conditions attached to a successful distribution

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Fraction;
use crate::heir::HeirClass;

/// Warning kinds, without payload, for matching and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    BequestCapped,
    UnresolvedRemainder,
    ResidueExhausted,
}

/// A non-fatal warning
///
/// Serialized as `{ "kind": ..., "detail": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Warning {
    /// The requested bequest exceeded one third of the estate after debts;
    /// only the capped amount was applied
    BequestCapped { excess_amount: Decimal },

    /// Part of the estate could not be assigned to any heir and reverts to
    /// the public treasury
    UnresolvedRemainder { fraction: Fraction, amount: Decimal },

    /// Residuary heirs survive but the fixed shares left them nothing
    ResidueExhausted { heir_classes: Vec<HeirClass> },
}

impl Warning {
    pub fn kind(&self) -> WarningKind {
        match self {
            Warning::BequestCapped { .. } => WarningKind::BequestCapped,
            Warning::UnresolvedRemainder { .. } => WarningKind::UnresolvedRemainder,
            Warning::ResidueExhausted { .. } => WarningKind::ResidueExhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_serialized_shape() {
        let warning = Warning::BequestCapped { excess_amount: dec!(10000) };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "bequest_capped");
        assert_eq!(json["detail"]["excess_amount"], "10000");
    }

    #[test]
    fn test_kind() {
        let warning = Warning::ResidueExhausted { heir_classes: vec![HeirClass::FullBrotherGroup] };
        assert_eq!(warning.kind(), WarningKind::ResidueExhausted);
    }
}
