//! Debt model
//!
//! A single amount someone owes the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::Money;
use super::record::Record;

/// A debt owed to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtRecord {
    /// Unique identifier
    pub id: DebtId,

    /// Who owes the money
    pub name: String,

    /// Amount owed; only positive amounts count as "owed to you"
    pub amount: Money,
}

impl DebtRecord {
    /// Create a new debt with a fresh id
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: DebtId::new(),
            name: name.into(),
            amount,
        }
    }

    /// Whether this debt is shown in the "owed to you" list
    pub fn is_owed(&self) -> bool {
        self.amount.is_positive()
    }
}

impl Record for DebtRecord {
    type Id = DebtId;

    const ENTITY: &'static str = "Debt";
    const COLLECTION: &'static str = "debts";

    fn id(&self) -> DebtId {
        self.id
    }
}

impl fmt::Display for DebtRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes you {}", self.name, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_debt() {
        let debt = DebtRecord::new("Alice", Money::from_cents(5000));
        assert_eq!(debt.name, "Alice");
        assert_eq!(debt.amount.cents(), 5000);
        assert!(debt.is_owed());
        assert_eq!(debt.to_string(), "Alice owes you $50.00");
    }

    #[test]
    fn test_non_positive_is_not_owed() {
        assert!(!DebtRecord::new("Bob", Money::zero()).is_owed());
        assert!(!DebtRecord::new("Bob", Money::from_cents(-100)).is_owed());
    }

    #[test]
    fn test_json_field_order() {
        let debt = DebtRecord::new("Alice", Money::from_cents(5000));
        let json = serde_json::to_string(&debt).unwrap();
        let expected = format!(
            r#"{{"id":{},"name":"Alice","amount":50.0}}"#,
            serde_json::to_string(&debt.id).unwrap()
        );
        assert_eq!(json, expected);
    }
}
