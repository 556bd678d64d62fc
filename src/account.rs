// 💳 Account - the name/balance record the ledger is made of

use serde::{Deserialize, Serialize};

/// A single ledger entry.
///
/// Accounts are plain values: no identity, no uniqueness constraint on the
/// name, and no mutation after they enter the ledger. The balance is a signed
/// amount with no currency unit attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub balance: f64,
}

impl Account {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Account {
            name: name.into(),
            balance,
        }
    }

    /// Check if the account is overdrawn (negative balance)
    pub fn is_overdrawn(&self) -> bool {
        self.balance < 0.0
    }
}

/// The default account doubles as the pending-record reset value.
impl Default for Account {
    fn default() -> Self {
        Account {
            name: String::new(),
            balance: 0.0,
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
    fn test_account_creation() {
        let account = Account::new("Daniella Ellicombe", 600.0);
        assert_eq!(account.name, "Daniella Ellicombe");
        assert_eq!(account.balance, 600.0);
        assert!(!account.is_overdrawn());
    }

    #[test]
    fn test_account_default_is_pending_reset_value() {
        let account = Account::default();
        assert_eq!(account.name, "");
        assert_eq!(account.balance, 0.0);
    }

    #[test]
    fn test_account_overdrawn() {
        let account = Account::new("Overdrawn", -50.0);
        assert!(account.is_overdrawn());

        let zero = Account::new("Zero", 0.0);
        assert!(!zero.is_overdrawn());
    }

    #[test]
    fn test_account_serde_round_trip() {
        let account = Account::new("Barbara Rabson", 750.0);
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }
}
