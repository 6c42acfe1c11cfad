//! Flat-file ledger backend over the comma-separated redemption file.
//!
//! The file carries the header `staff_pass_id,team_name,redeemed_at`
//! followed by one comma-space separated row per redemption. The file is
//! created lazily, header first, on the first successful redemption.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::table::{REDEEMED_AT_COLUMN, STAFF_PASS_COLUMN, TEAM_COLUMN, Table};

use super::{LEDGER_HEADER, LedgerError, RedemptionLedger, RedemptionRecord};

/// Redemption ledger persisted as a flat comma-separated file.
#[derive(Debug, Clone)]
pub struct FlatFileLedger {
    path: PathBuf,
}

impl FlatFileLedger {
    /// Creates a ledger over the given file path. The file itself is not
    /// touched until the first redemption is recorded.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The ledger file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the ledger file exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Deletes the ledger file wholesale.
    ///
    /// Used to reset state between runs, not during normal operation. A
    /// missing file is a quiet no-op; any other failure is logged, not
    /// raised.
    pub fn delete(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::info!(path = %self.path.display(), "ledger deleted"),
            Err(err) if err.kind() == ErrorKind::NotFound => {},
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to delete ledger");
            },
        }
    }

    /// Creates the ledger file with its header row if it does not exist.
    fn ensure_exists(&self) -> Result<(), LedgerError> {
        if self.path.exists() {
            return Ok(());
        }
        fs::write(&self.path, format!("{LEDGER_HEADER}\n")).map_err(|err| self.io_error(err))
    }

    fn io_error(&self, source: std::io::Error) -> LedgerError {
        LedgerError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Reads the ledger into a [`Table`], or `None` when the file does not
    /// exist yet.
    fn read_table(&self) -> Result<Option<Table>, LedgerError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(Table::parse(&content))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

impl RedemptionLedger for FlatFileLedger {
    fn has_redeemed(&self, team_name: &str) -> Result<bool, LedgerError> {
        let Some(table) = self.read_table()? else {
            tracing::debug!(path = %self.path.display(), "ledger absent, no redemptions yet");
            return Ok(false);
        };

        let Some(team_col) = table.column(TEAM_COLUMN) else {
            return Err(LedgerError::MalformedHeader { column: TEAM_COLUMN });
        };

        // Only data rows are scanned: a team literally named "team_name"
        // must not read as already-redeemed off the header.
        let redeemed = table.rows().iter().any(|row| {
            row.get(team_col)
                .is_some_and(|cell| cell.trim() == team_name.trim())
        });
        Ok(redeemed)
    }

    fn record_redemption(&self, record: &RedemptionRecord) -> Result<(), LedgerError> {
        self.ensure_exists()?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_error(err))?;

        // Comma-space separation matches the historical ledger format.
        writeln!(
            file,
            "{}, {}, {}",
            record.staff_id, record.team_name, record.redeemed_at
        )
        .map_err(|err| self.io_error(err))
    }

    fn records(&self) -> Result<Vec<RedemptionRecord>, LedgerError> {
        let Some(table) = self.read_table()? else {
            return Ok(Vec::new());
        };

        let Some(staff_col) = table.column(STAFF_PASS_COLUMN) else {
            return Err(LedgerError::MalformedHeader {
                column: STAFF_PASS_COLUMN,
            });
        };
        let Some(team_col) = table.column(TEAM_COLUMN) else {
            return Err(LedgerError::MalformedHeader { column: TEAM_COLUMN });
        };
        let Some(redeemed_col) = table.column(REDEEMED_AT_COLUMN) else {
            return Err(LedgerError::MalformedHeader {
                column: REDEEMED_AT_COLUMN,
            });
        };

        let records = table
            .rows()
            .iter()
            .filter_map(|row| {
                let staff_id = row.get(staff_col)?;
                let team_name = row.get(team_col)?;
                let redeemed_at = row.get(redeemed_col)?;
                Some(RedemptionRecord {
                    staff_id: staff_id.trim().to_string(),
                    team_name: team_name.trim().to_string(),
                    redeemed_at: redeemed_at.trim().to_string(),
                })
            })
            .collect();
        Ok(records)
    }
}
