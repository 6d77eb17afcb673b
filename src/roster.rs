// Client roster - the index-addressed collection behind the SQLite store
//
// Records carry the runtime (bonus-applied) amount; the store strips the VIP
// bonus back out on save. Field validation lives in the constructor so every
// driver (console or form) builds records through the same gate.

use crate::bonus::Tier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound (exclusive) for the base deposit amount a form accepts.
pub const MAX_BASE_AMOUNT: i64 = 10_000_000;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("client name must not be empty")]
    EmptyName,
    #[error("rate must be an integer in (0, 100]")]
    RateOutOfRange,
    #[error("amount must be an integer in (0, 10000000)")]
    AmountOutOfRange,
    #[error("no client at index {0}")]
    IndexOutOfRange(usize),
}

// ============================================================================
// CLIENT RECORD
// ============================================================================

/// One persisted-variant client: tier, name, integer percent rate, and the
/// runtime amount (VIP records already include the flat bonus).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    tier: Tier,
    name: String,
    rate: i64,
    amount: i64,
}

impl ClientRecord {
    /// Validated constructor. `base_amount` is the bonus-free figure the user
    /// enters; a privileged record materializes `base + 1000` as its runtime
    /// amount.
    ///
    /// Accepted ranges: rate in (0, 100], base amount in (0, 10 000 000).
    pub fn new(tier: Tier, name: &str, rate: i64, base_amount: i64) -> Result<Self, RecordError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if rate <= 0 || rate > 100 {
            return Err(RecordError::RateOutOfRange);
        }
        if base_amount <= 0 || base_amount >= MAX_BASE_AMOUNT {
            return Err(RecordError::AmountOutOfRange);
        }

        Ok(ClientRecord {
            tier,
            name: name.to_string(),
            rate,
            amount: tier.display_amount(base_amount),
        })
    }

    /// Rebuild a record from persisted fields, bypassing form validation.
    /// `base_amount` is the stored bonus-free value.
    pub(crate) fn from_stored(tier: Tier, name: String, rate: i64, base_amount: i64) -> Self {
        ClientRecord {
            tier,
            name,
            rate,
            amount: tier.display_amount(base_amount),
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annual rate as an integer percentage.
    pub fn rate(&self) -> i64 {
        self.rate
    }

    /// Runtime (bonus-applied) amount.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Bonus-free amount, the value the store persists.
    pub fn base_amount(&self) -> i64 {
        self.tier.base_amount(self.amount)
    }

    /// Annual income: runtime amount times the percent rate.
    pub fn annual_income(&self) -> f64 {
        self.amount as f64 * self.rate as f64 / 100.0
    }
}

// ============================================================================
// CLIENT ROSTER
// ============================================================================

/// Ordered, index-addressed collection of client records.
///
/// Unlike the passport-keyed [`crate::Ledger`], the roster has no uniqueness
/// rule; position is the only identity, matching the row-per-line editing
/// model of the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRoster {
    records: Vec<ClientRecord>,
}

impl ClientRoster {
    pub fn new() -> Self {
        ClientRoster {
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: ClientRecord) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&ClientRecord> {
        self.records.get(index)
    }

    /// Remove by position. An out-of-range index is reported, never ignored.
    pub fn remove(&mut self, index: usize) -> Result<ClientRecord, RecordError> {
        if index >= self.records.len() {
            return Err(RecordError::IndexOutOfRange(index));
        }
        Ok(self.records.remove(index))
    }

    /// Replace the record at a position.
    pub fn update(&mut self, index: usize, record: ClientRecord) -> Result<(), RecordError> {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RecordError::IndexOutOfRange(index)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record. Used when a load replaces the collection wholesale.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Sum of `annual_income` over all records.
    pub fn total_income(&self) -> f64 {
        self.records.iter().map(|r| r.annual_income()).sum()
    }
}

// ============================================================================
// TESTS
// ============================================================================
