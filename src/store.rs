// 📒 LedgerStore - in-memory account list with derived views
//
// Owns the account list, the pending (not yet committed) account, and the
// balance filter threshold. Derived views are recomputed on every read, so
// they can never go stale; with a handful of records there is nothing worth
// caching.

use serde::{Deserialize, Serialize};

use crate::account::Account;

// ============================================================================
// LEDGER STORE
// ============================================================================

/// Holds all ledger state and exposes the one mutating operation.
///
/// The account list is owned exclusively by the store: new entries go to the
/// front, nothing is ever deleted or edited in place. The rendering layer
/// reads through the getters and writes the pending fields and the filter
/// threshold through the setters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerStore {
    accounts: Vec<Account>,
    pending: Account,
    filter_threshold: f64,
}

impl LedgerStore {
    /// Create a store over an initial account list.
    pub fn new(accounts: Vec<Account>) -> Self {
        LedgerStore {
            accounts,
            pending: Account::default(),
            filter_threshold: 0.0,
        }
    }

    /// The demo ledger: four seed accounts, filter at 0.
    pub fn demo() -> Self {
        LedgerStore::new(vec![
            Account::new("Daniella Ellicombe", 600.0),
            Account::new("Barbara Rabson", 750.0),
            Account::new("James Schofield", 200.0),
            Account::new("Irma Diloway", 1200.0),
        ])
    }

    // ========================================================================
    // READS
    // ========================================================================

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn pending(&self) -> &Account {
        &self.pending
    }

    pub fn filter_threshold(&self) -> f64 {
        self.filter_threshold
    }

    // ========================================================================
    // DERIVED VIEWS
    // ========================================================================

    /// Sum of all balances, starting from 0.
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|acc| acc.balance).sum()
    }

    /// Accounts whose balance meets the filter threshold, in list order.
    ///
    /// An empty result is a valid view, not an error.
    pub fn filtered_accounts(&self) -> Vec<Account> {
        self.accounts
            .iter()
            .filter(|acc| acc.balance >= self.filter_threshold)
            .cloned()
            .collect()
    }

    // ========================================================================
    // WRITES
    // ========================================================================

    pub fn set_pending_name(&mut self, name: impl Into<String>) {
        self.pending.name = name.into();
    }

    pub fn set_pending_balance(&mut self, balance: f64) {
        self.pending.balance = balance;
    }

    pub fn set_filter_threshold(&mut self, threshold: f64) {
        self.filter_threshold = threshold;
    }

    /// Move the pending account to the front of the list and reset it.
    ///
    /// Accepts whatever is staged, empty name and zero balance included; any
    /// input validation happens before the value reaches the store (see the
    /// `input` module). The list grows by exactly one entry.
    pub fn commit_pending_account(&mut self) {
        self.accounts.insert(0, self.pending.clone());
        self.pending = Account::default();
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::demo()
    }
}

// ============================================================================
// TESTS
// ============================================================================
