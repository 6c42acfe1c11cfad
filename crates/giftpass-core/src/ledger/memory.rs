//! In-memory ledger backend for tests and dry runs.

use std::sync::Mutex;

use super::{LedgerError, RedemptionLedger, RedemptionRecord};

/// Redemption ledger held entirely in memory.
///
/// Observes the same trait contract as the flat-file backend: append-only,
/// trimmed team comparison, `Ok(false)` while empty. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    records: Mutex<Vec<RedemptionRecord>>,
}

impl MemoryLedger {
    /// Creates an empty in-memory ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RedemptionLedger for MemoryLedger {
    fn has_redeemed(&self, team_name: &str) -> Result<bool, LedgerError> {
        let records = self.records.lock().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(records
            .iter()
            .any(|record| record.team_name.trim() == team_name.trim()))
    }

    fn record_redemption(&self, record: &RedemptionRecord) -> Result<(), LedgerError> {
        let mut records = self.records.lock().map_err(|_| LedgerError::LockPoisoned)?;
        records.push(record.clone());
        Ok(())
    }

    fn records(&self) -> Result<Vec<RedemptionRecord>, LedgerError> {
        let records = self.records.lock().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(records.clone())
    }
}
