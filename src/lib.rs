// Deposit Ledger - Core Library
// Client/deposit bookkeeping: rate-table ledger, bonus depositor book,
// and the persisted client roster with its SQLite store.

pub mod bonus;
pub mod depositors;
pub mod input;
pub mod ledger;
pub mod rates;
pub mod roster;
pub mod store;

// Re-export commonly used types
pub use bonus::{BonusPolicy, Tier, DEFAULT_FIXED_BONUS, VIP_BONUS};
pub use depositors::{Depositor, DepositorBook};
pub use input::{non_empty, parse_int_in_range, parse_positive_amount, ParseOutcome};
pub use ledger::{Client, Deposit, Ledger, LedgerError};
pub use rates::{DepositKind, RateTable};
pub use roster::{ClientRecord, ClientRoster, RecordError, MAX_BASE_AMOUNT};
pub use store::{
    ensure_schema, export_json, load_from_path, load_roster, save_roster, save_to_path,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
