//! Append-only redemption ledger.
//!
//! The ledger records which teams have already collected their gift, one row
//! per completed redemption. Rows are only ever appended; the sole way to
//! remove anything is the wholesale delete used to reset state between runs.
//!
//! Business logic goes through the [`RedemptionLedger`] trait so the storage
//! backend can vary without touching the pipeline: [`FlatFileLedger`]
//! persists to the comma-separated ledger file, [`MemoryLedger`] keeps
//! records in memory for tests and dry runs.
//!
//! # Failure posture
//!
//! A ledger that does not exist yet is not an error: `has_redeemed` reports
//! `Ok(false)`, which is exactly how a first-time redemption is permitted.
//! A ledger that is present but cannot be read or parsed surfaces as
//! [`LedgerError`], and callers deny eligibility on it. "Empty" and
//! "broken" are deliberately distinct.

mod flat_file;
mod memory;


use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use flat_file::FlatFileLedger;
pub use memory::MemoryLedger;

use crate::mapping::MappingRecord;

/// Header line of the ledger file.
pub const LEDGER_HEADER: &str = "staff_pass_id,team_name,redeemed_at";

/// Errors from ledger operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LedgerError {
    /// The ledger file is present but could not be read or written.
    #[error("ledger I/O error at {path}: {source}")]
    Io {
        /// The ledger file path.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The ledger file is readable but its header lacks a required column.
    #[error("ledger header lacks column {column:?}")]
    MalformedHeader {
        /// The missing column name.
        column: &'static str,
    },

    /// A concurrent user of an in-memory ledger panicked while holding the
    /// lock.
    #[error("ledger lock poisoned")]
    LockPoisoned,
}

/// One completed redemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRecord {
    /// The staff pass that triggered the redemption.
    #[serde(rename = "staff_pass_id")]
    pub staff_id: String,

    /// The team the gift was collected for.
    pub team_name: String,

    /// Wall-clock time of the redemption, milliseconds since the Unix epoch
    /// rendered as a decimal string.
    pub redeemed_at: String,
}

impl RedemptionRecord {
    /// Stamps a new record for the given mapping row at the current wall
    /// clock.
    #[must_use]
    pub fn stamp_now(record: &MappingRecord) -> Self {
        Self {
            staff_id: record.staff_id.clone(),
            team_name: record.team_name.clone(),
            redeemed_at: unix_millis_now().to_string(),
        }
    }
}

/// Append-only store of completed redemptions.
pub trait RedemptionLedger {
    /// Whether `team_name` already has a redemption entry.
    ///
    /// Comparison trims both sides. A backing store that simply does not
    /// exist yet reports `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is present but unreadable;
    /// callers fail closed on it.
    fn has_redeemed(&self, team_name: &str) -> Result<bool, LedgerError>;

    /// Appends one redemption record, creating the store if absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the record could not be durably appended.
    fn record_redemption(&self, record: &RedemptionRecord) -> Result<(), LedgerError>;

    /// Every recorded redemption, oldest first.
    ///
    /// An absent store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is present but unreadable.
    fn records(&self) -> Result<Vec<RedemptionRecord>, LedgerError>;
}

/// Current wall clock in milliseconds since the Unix epoch.
fn unix_millis_now() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
