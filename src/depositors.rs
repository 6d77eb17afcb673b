// Depositor book - bonus-strategy deposits
//
// Deliberately the laxest of the three collections: `add` appends
// unconditionally, with no uniqueness check and no amount validation.
// The bonus policy is applied exactly once, at construction; the stored
// amount is already final.

use crate::bonus::BonusPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Depositor {
    name: String,
    amount: f64,
}

impl Depositor {
    /// Build a depositor with the policy already applied to the base amount.
    pub fn new(name: &str, base_amount: f64, policy: &BonusPolicy) -> Self {
        Depositor {
            name: name.to_string(),
            amount: policy.apply(base_amount),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Final (bonus-applied) amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Append-only collection of depositors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepositorBook {
    depositors: Vec<Depositor>,
}

impl DepositorBook {
    pub fn new() -> Self {
        DepositorBook {
            depositors: Vec::new(),
        }
    }

    /// Unconditional append. Duplicate names are allowed by contract.
    pub fn add(&mut self, depositor: Depositor) {
        self.depositors.push(depositor);
    }

    /// Sum of all stored (final) amounts.
    pub fn total(&self) -> f64 {
        self.depositors.iter().map(|d| d.amount).sum()
    }

    pub fn all(&self) -> &[Depositor] {
        &self.depositors
    }

    pub fn len(&self) -> usize {
        self.depositors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depositors.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
