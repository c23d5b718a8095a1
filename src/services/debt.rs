//! Debt service
//!
//! Adds debts from raw user input and exposes the "owed to you" view.

use std::collections::BTreeSet;

use crate::error::{RamError, RamResult};
use crate::models::{DebtRecord, Money};
use crate::storage::Storage;

/// Service for debt management
pub struct DebtService<'a> {
    storage: &'a Storage,
}

impl<'a> DebtService<'a> {
    /// Create a new debt service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a debt
    ///
    /// The amount is parsed before the store is touched; an unparseable
    /// amount aborts the add with `InvalidInput`.
    pub fn add(&self, name: &str, amount: &str) -> RamResult<DebtRecord> {
        let amount = Money::parse(amount).map_err(|e| RamError::InvalidInput(e.to_string()))?;

        let debt = DebtRecord::new(name, amount);
        self.storage.debts.append(debt.clone())?;

        tracing::info!(id = %debt.id, "Added debt");
        Ok(debt)
    }

    /// All debts in insertion order
    pub fn list(&self) -> RamResult<Vec<DebtRecord>> {
        self.storage.debts.records()
    }

    /// Debts with a positive amount, paired with their store position
    pub fn outstanding(&self) -> RamResult<Vec<(usize, DebtRecord)>> {
        Ok(self
            .storage
            .debts
            .records()?
            .into_iter()
            .enumerate()
            .filter(|(_, debt)| debt.is_owed())
            .collect())
    }

    /// Sum of every debt amount
    pub fn total(&self) -> RamResult<Money> {
        self.storage
            .debts
            .records()?
            .iter()
            .try_fold(Money::zero(), |total, debt| total.checked_add(debt.amount))
            .ok_or_else(|| RamError::InvalidInput("total of all debts is too large".into()))
    }

    /// Delete debts by store position
    pub fn delete(&self, positions: &BTreeSet<usize>) -> RamResult<Vec<DebtRecord>> {
        let removed = self.storage.debts.delete_at(positions)?;
        tracing::info!(count = removed.len(), "Deleted debts");
        Ok(removed)
    }

    /// Delete debts by their position in the outstanding view
    pub fn delete_outstanding(&self, view_positions: &BTreeSet<usize>) -> RamResult<Vec<DebtRecord>> {
        let outstanding = self.outstanding()?;

        let positions = view_positions
            .iter()
            .map(|&view| {
                outstanding
                    .get(view)
                    .map(|(position, _)| *position)
                    .ok_or_else(|| RamError::position_out_of_range(view, outstanding.len()))
            })
            .collect::<RamResult<BTreeSet<_>>>()?;

        self.delete(&positions)
    }
}
