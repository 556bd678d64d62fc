// Account Ledger - Core Library
// In-memory account ledger: list, running total, threshold filter, add form

pub mod account;
pub mod input;
pub mod store;

// Re-export commonly used types
pub use account::Account;
pub use input::{parse_amount, InputError};
pub use store::LedgerStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
