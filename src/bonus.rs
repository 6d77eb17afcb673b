// Bonus policies + client tiers
//
// Deposit amounts get adjusted at construction time in two ways: through a
// pluggable bonus strategy, or through a VIP flag whose bonus must be
// stripped back out before the record hits the database. Both live here as
// closed enums dispatched by pattern matching.

use serde::{Deserialize, Serialize};

/// Flat bonus granted to privileged (VIP) clients, in whole currency units.
///
/// The persisted store always holds the bonus-free base amount; the runtime
/// record always holds the bonus-applied amount. [`Tier::display_amount`] and
/// [`Tier::base_amount`] are the two directions of that conversion.
pub const VIP_BONUS: i64 = 1_000;

/// Conventional fixed bonus offered by the depositor book.
pub const DEFAULT_FIXED_BONUS: f64 = 500.0;

// ============================================================================
// BONUS POLICY
// ============================================================================

/// Rule transforming a base deposit amount into a final amount.
///
/// Pure and infallible: `apply` never rejects its input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BonusPolicy {
    /// Final amount equals the base amount
    NoBonus,

    /// Adds a fixed amount configured at construction
    FixedBonus(f64),
}

impl BonusPolicy {
    pub fn apply(&self, base_amount: f64) -> f64 {
        match self {
            BonusPolicy::NoBonus => base_amount,
            BonusPolicy::FixedBonus(bonus) => base_amount + bonus,
        }
    }

    /// Human-readable label for menus and listings
    pub fn label(&self) -> String {
        match self {
            BonusPolicy::NoBonus => "no bonus".to_string(),
            BonusPolicy::FixedBonus(bonus) => format!("fixed bonus ({:.2})", bonus),
        }
    }
}

// ============================================================================
// CLIENT TIER
// ============================================================================

/// Ordinary vs. privileged (VIP) client discriminator for persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Ordinary,
    Privileged,
}

impl Tier {
    pub fn is_privileged(&self) -> bool {
        matches!(self, Tier::Privileged)
    }

    /// Runtime amount for a stored base amount.
    /// Privileged clients carry the flat [`VIP_BONUS`] on top of the base.
    pub fn display_amount(&self, base: i64) -> i64 {
        match self {
            Tier::Ordinary => base,
            Tier::Privileged => base + VIP_BONUS,
        }
    }

    /// Stored base amount for a runtime amount. Exact inverse of
    /// [`Tier::display_amount`].
    pub fn base_amount(&self, display: i64) -> i64 {
        match self {
            Tier::Ordinary => display,
            Tier::Privileged => display - VIP_BONUS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Ordinary => "ordinary",
            Tier::Privileged => "VIP",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bonus_is_identity() {
        let policy = BonusPolicy::NoBonus;

        assert_eq!(policy.apply(0.0), 0.0);
        assert_eq!(policy.apply(1234.56), 1234.56);
    }

    #[test]
    fn test_fixed_bonus_adds_constant() {
        let policy = BonusPolicy::FixedBonus(DEFAULT_FIXED_BONUS);

        assert_eq!(policy.apply(1000.0), 1500.0);
        assert_eq!(policy.apply(0.0), 500.0);
    }

    #[test]
    fn test_policy_labels() {
        assert_eq!(BonusPolicy::NoBonus.label(), "no bonus");
        assert_eq!(BonusPolicy::FixedBonus(500.0).label(), "fixed bonus (500.00)");
    }

    #[test]
    fn test_tier_display_amount() {
        assert_eq!(Tier::Ordinary.display_amount(4000), 4000);
        assert_eq!(Tier::Privileged.display_amount(4000), 5000);
    }

    #[test]
    fn test_tier_base_amount() {
        assert_eq!(Tier::Ordinary.base_amount(4000), 4000);
        assert_eq!(Tier::Privileged.base_amount(5000), 4000);
    }

    #[test]
    fn test_tier_conversions_are_inverse() {
        for base in [0, 1, 999, 1000, 4000, 9_999_999] {
            for tier in [Tier::Ordinary, Tier::Privileged] {
                assert_eq!(tier.base_amount(tier.display_amount(base)), base);
            }
        }
    }

    #[test]
    fn test_tier_is_privileged() {
        assert!(!Tier::Ordinary.is_privileged());
        assert!(Tier::Privileged.is_privileged());
    }
}
