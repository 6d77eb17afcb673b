// Ledger - clients, deposits, and the interest aggregate
//
// The ledger owns every client and deposit and mediates every mutation.
// There is no global instance: the driver constructs a Ledger and passes it
// around, which also lets tests run any number of independent ledgers.

use crate::rates::{DepositKind, RateTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Domain precondition failures.
///
/// Every mutator reports its reason through this enum; none of them fail
/// silently and none of them panic. The driver decides the user-facing
/// message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("client name must not be empty")]
    EmptyName,
    #[error("passport must not be empty")]
    EmptyPassport,
    #[error("a client with this passport already exists")]
    DuplicatePassport,
    #[error("no client with this passport")]
    UnknownClient,
    #[error("amount must be strictly positive")]
    NonPositiveAmount,
    #[error("client already has an open deposit")]
    DepositAlreadyOpen,
    #[error("client has no deposit to top up")]
    NoDeposit,
}

// ============================================================================
// CLIENT
// ============================================================================

/// A named party identified by a passport string unique within the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    name: String,
    passport: String,
    has_deposit: bool,
}

impl Client {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passport(&self) -> &str {
        &self.passport
    }

    pub fn has_deposit(&self) -> bool {
        self.has_deposit
    }
}

// ============================================================================
// DEPOSIT
// ============================================================================

/// One deposit, owned by the client whose passport it carries.
///
/// The amount is strictly positive at creation and only ever grows
/// (top-up only, no withdrawal operation exists).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deposit {
    owner_passport: String,
    kind: DepositKind,
    amount: f64,
}

impl Deposit {
    pub fn owner_passport(&self) -> &str {
        &self.owner_passport
    }

    pub fn kind(&self) -> DepositKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Annual interest at the given rate. A negative rate reads as no yield.
    pub fn annual_interest(&self, rate: f64) -> f64 {
        if rate < 0.0 {
            return 0.0;
        }
        self.amount * rate
    }
}

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    // BTreeMap keeps client listings in stable passport order
    clients: BTreeMap<String, Client>,
    deposits: Vec<Deposit>,
    rates: RateTable,
}

impl Ledger {
    /// Empty ledger with the default rate table.
    pub fn new() -> Self {
        Ledger {
            clients: BTreeMap::new(),
            deposits: Vec::new(),
            rates: RateTable::new(),
        }
    }

    // ------------------------------------------------------------------
    // Rates
    // ------------------------------------------------------------------

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn rates_mut(&mut self) -> &mut RateTable {
        &mut self.rates
    }

    // ------------------------------------------------------------------
    // Clients
    // ------------------------------------------------------------------

    /// Register a client. Passport uniqueness is enforced here, at creation
    /// time; there is no rename or re-key operation.
    pub fn add_client(&mut self, name: &str, passport: &str) -> Result<(), LedgerError> {
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if passport.is_empty() {
            return Err(LedgerError::EmptyPassport);
        }
        if self.clients.contains_key(passport) {
            return Err(LedgerError::DuplicatePassport);
        }

        self.clients.insert(
            passport.to_string(),
            Client {
                name: name.to_string(),
                passport: passport.to_string(),
                has_deposit: false,
            },
        );
        Ok(())
    }

    pub fn has_client(&self, passport: &str) -> bool {
        self.clients.contains_key(passport)
    }

    pub fn client(&self, passport: &str) -> Option<&Client> {
        self.clients.get(passport)
    }

    /// All clients, ordered by passport.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    // ------------------------------------------------------------------
    // Deposits
    // ------------------------------------------------------------------

    /// Open a deposit for an existing client. At most one deposit per client.
    pub fn open_deposit(
        &mut self,
        passport: &str,
        kind: DepositKind,
        initial: f64,
    ) -> Result<(), LedgerError> {
        let client = self
            .clients
            .get_mut(passport)
            .ok_or(LedgerError::UnknownClient)?;
        if initial <= 0.0 {
            return Err(LedgerError::NonPositiveAmount);
        }
        if client.has_deposit {
            return Err(LedgerError::DepositAlreadyOpen);
        }

        self.deposits.push(Deposit {
            owner_passport: passport.to_string(),
            kind,
            amount: initial,
        });
        client.has_deposit = true;
        Ok(())
    }

    /// Add to an existing deposit in place.
    pub fn top_up(&mut self, passport: &str, amount: f64) -> Result<(), LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount);
        }
        let deposit = self
            .deposits
            .iter_mut()
            .find(|d| d.owner_passport == passport)
            .ok_or(LedgerError::NoDeposit)?;

        deposit.amount += amount;
        Ok(())
    }

    pub fn deposit_for(&self, passport: &str) -> Option<&Deposit> {
        self.deposits.iter().find(|d| d.owner_passport == passport)
    }

    /// All deposits, in opening order.
    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }

    // ------------------------------------------------------------------
    // Aggregates
    // ------------------------------------------------------------------

    /// Total annual interest across all deposits: sum of `amount * rate(kind)`.
    ///
    /// A kind missing from the rate table contributes 0. Never fails: this is
    /// a pure fold over the current state, and changing a rate afterwards
    /// changes future results but never stored amounts.
    pub fn total_annual_interest(&self) -> f64 {
        self.deposits
            .iter()
            .map(|d| d.annual_interest(self.rates.rate(d.kind)))
            .sum()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with_client(name: &str, passport: &str) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_client(name, passport).unwrap();
        ledger
    }

    #[test]
    fn test_add_client() {
        let mut ledger = Ledger::new();

        assert!(ledger.add_client("Ivanov", "P001").is_ok());
        assert!(ledger.has_client("P001"));
        assert_eq!(ledger.client("P001").unwrap().name(), "Ivanov");
        assert!(!ledger.client("P001").unwrap().has_deposit());
    }

    #[test]
    fn test_add_client_rejects_empty_fields() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.add_client("", "P001"), Err(LedgerError::EmptyName));
        assert_eq!(
            ledger.add_client("Ivanov", ""),
            Err(LedgerError::EmptyPassport)
        );
        assert_eq!(ledger.client_count(), 0);
    }

    #[test]
    fn test_add_client_rejects_duplicate_passport() {
        let mut ledger = ledger_with_client("Ivanov", "P001");

        assert_eq!(
            ledger.add_client("Petrov", "P001"),
            Err(LedgerError::DuplicatePassport)
        );

        // Original entry untouched, no duplicate appended
        assert_eq!(ledger.client_count(), 1);
        assert_eq!(ledger.client("P001").unwrap().name(), "Ivanov");
    }

    #[test]
    fn test_open_deposit() {
        let mut ledger = ledger_with_client("Ivanov", "P001");

        assert!(ledger.open_deposit("P001", DepositKind::Fixed, 1000.0).is_ok());
        assert!(ledger.client("P001").unwrap().has_deposit());

        let deposit = ledger.deposit_for("P001").unwrap();
        assert_eq!(deposit.kind(), DepositKind::Fixed);
        assert_eq!(deposit.amount(), 1000.0);
    }

    #[test]
    fn test_open_deposit_requires_existing_client() {
        let mut ledger = Ledger::new();

        assert_eq!(
            ledger.open_deposit("P404", DepositKind::Fixed, 1000.0),
            Err(LedgerError::UnknownClient)
        );
        assert!(ledger.deposits().is_empty());
    }

    #[test]
    fn test_open_deposit_rejects_non_positive_amount() {
        let mut ledger = ledger_with_client("Ivanov", "P001");

        assert_eq!(
            ledger.open_deposit("P001", DepositKind::Fixed, 0.0),
            Err(LedgerError::NonPositiveAmount)
        );
        assert_eq!(
            ledger.open_deposit("P001", DepositKind::Fixed, -50.0),
            Err(LedgerError::NonPositiveAmount)
        );
        assert!(!ledger.client("P001").unwrap().has_deposit());
    }

    #[test]
    fn test_second_deposit_rejected_regardless_of_amount() {
        let mut ledger = ledger_with_client("Ivanov", "P001");
        ledger.open_deposit("P001", DepositKind::Fixed, 1000.0).unwrap();

        assert_eq!(
            ledger.open_deposit("P001", DepositKind::Savings, 500.0),
            Err(LedgerError::DepositAlreadyOpen)
        );

        // First deposit unchanged
        assert_eq!(ledger.deposits().len(), 1);
        assert_eq!(ledger.deposit_for("P001").unwrap().amount(), 1000.0);
    }

    #[test]
    fn test_top_up_adds_in_place() {
        let mut ledger = ledger_with_client("Ivanov", "P001");
        ledger.open_deposit("P001", DepositKind::Savings, 200.0).unwrap();

        assert!(ledger.top_up("P001", 300.5).is_ok());
        assert_eq!(ledger.deposit_for("P001").unwrap().amount(), 500.5);
    }

    #[test]
    fn test_top_up_rejects_non_positive_amount() {
        let mut ledger = ledger_with_client("Ivanov", "P001");
        ledger.open_deposit("P001", DepositKind::Savings, 200.0).unwrap();

        assert_eq!(ledger.top_up("P001", 0.0), Err(LedgerError::NonPositiveAmount));
        assert_eq!(ledger.top_up("P001", -10.0), Err(LedgerError::NonPositiveAmount));

        // Amount unchanged on failure
        assert_eq!(ledger.deposit_for("P001").unwrap().amount(), 200.0);
    }

    #[test]
    fn test_top_up_requires_deposit() {
        let mut ledger = ledger_with_client("Ivanov", "P001");

        assert_eq!(ledger.top_up("P001", 100.0), Err(LedgerError::NoDeposit));
        assert_eq!(ledger.top_up("P404", 100.0), Err(LedgerError::NoDeposit));
    }

    #[test]
    fn test_total_interest_scenario() {
        // One fixed-term deposit of 1000 at 8% yields 80.0
        let mut ledger = ledger_with_client("Ivanov", "P001");
        ledger.open_deposit("P001", DepositKind::Fixed, 1000.0).unwrap();
        ledger.rates_mut().set_rate(DepositKind::Fixed, 0.08);

        assert_eq!(ledger.total_annual_interest(), 80.0);

        // Second open for the same client fails, interest unchanged
        assert!(ledger.open_deposit("P001", DepositKind::Savings, 500.0).is_err());
        assert_eq!(ledger.total_annual_interest(), 80.0);
    }

    #[test]
    fn test_total_interest_sums_all_deposits() {
        let mut ledger = Ledger::new();
        ledger.add_client("Ivanov", "P001").unwrap();
        ledger.add_client("Petrov", "P002").unwrap();
        ledger.add_client("Sidorov", "P003").unwrap();

        ledger.open_deposit("P001", DepositKind::Fixed, 1000.0).unwrap();
        ledger.open_deposit("P002", DepositKind::Savings, 2000.0).unwrap();
        ledger.open_deposit("P003", DepositKind::LongTerm, 500.0).unwrap();

        // Defaults: 8%, 6%, 10%
        let expected = 1000.0 * 0.08 + 2000.0 * 0.06 + 500.0 * 0.10;
        assert!((ledger.total_annual_interest() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rate_change_affects_later_computations_only() {
        let mut ledger = ledger_with_client("Ivanov", "P001");
        ledger.open_deposit("P001", DepositKind::Fixed, 1000.0).unwrap();

        let before = ledger.total_annual_interest();
        assert_eq!(before, 80.0);

        ledger.rates_mut().set_rate(DepositKind::Fixed, 0.05);
        assert_eq!(ledger.total_annual_interest(), 50.0);

        // Stored amount never retroactively altered by a rate change
        assert_eq!(ledger.deposit_for("P001").unwrap().amount(), 1000.0);
    }

    #[test]
    fn test_negative_rate_contributes_nothing() {
        let mut ledger = ledger_with_client("Ivanov", "P001");
        ledger.open_deposit("P001", DepositKind::Fixed, 1000.0).unwrap();
        ledger.rates_mut().set_rate(DepositKind::Fixed, -0.05);

        assert_eq!(ledger.total_annual_interest(), 0.0);
    }

    #[test]
    fn test_independent_ledgers() {
        // No global state: two ledgers never see each other's clients
        let a = ledger_with_client("Ivanov", "P001");
        let b = Ledger::new();

        assert!(a.has_client("P001"));
        assert!(!b.has_client("P001"));
    }
}
