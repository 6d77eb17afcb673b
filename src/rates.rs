// Deposit kinds + per-kind annual interest rates

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// DEPOSIT KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositKind {
    /// Fixed-term deposit
    Fixed,

    /// Savings deposit
    Savings,

    /// Long-term deposit
    LongTerm,
}

impl DepositKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositKind::Fixed => "fixed-term",
            DepositKind::Savings => "savings",
            DepositKind::LongTerm => "long-term",
        }
    }

    /// All kinds, in menu order
    pub fn all() -> [DepositKind; 3] {
        [DepositKind::Fixed, DepositKind::Savings, DepositKind::LongTerm]
    }
}

// ============================================================================
// RATE TABLE
// ============================================================================

/// Annual interest rates per deposit kind, expressed as fractions (0.08 = 8%).
///
/// One table per [`crate::Ledger`]. Rates can be overwritten at any time;
/// a kind with no stored rate reads back as 0.0 so interest aggregation
/// never fails on a gap in the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    rates: HashMap<DepositKind, f64>,
}

impl RateTable {
    /// Create a table with the conventional defaults:
    /// fixed-term 8%, savings 6%, long-term 10%.
    pub fn new() -> Self {
        let mut rates = HashMap::new();
        rates.insert(DepositKind::Fixed, 0.08);
        rates.insert(DepositKind::Savings, 0.06);
        rates.insert(DepositKind::LongTerm, 0.10);
        RateTable { rates }
    }

    /// Overwrite the rate for a kind. No range check here; what counts as a
    /// sensible rate is the caller's call.
    pub fn set_rate(&mut self, kind: DepositKind, rate: f64) {
        self.rates.insert(kind, rate);
    }

    /// Stored rate for a kind, or 0.0 if absent.
    pub fn rate(&self, kind: DepositKind) -> f64 {
        self.rates.get(&kind).copied().unwrap_or(0.0)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
