//! Linear-scan resolver over the short and long mapping tables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::table::{STAFF_PASS_COLUMN, TEAM_COLUMN, Table};

/// A single staff-pass-to-team association from a mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// The staff pass identifier as it appears in the table.
    #[serde(rename = "staff_pass_id")]
    pub staff_id: String,

    /// The team the pass belongs to.
    pub team_name: String,
}

/// Outcome of a staff pass lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Exactly one mapping row carries the pass.
    Found(MappingRecord),

    /// No mapping row in either table carries the pass.
    NotFound,

    /// More than one mapping row carries the pass; the reference data is
    /// invalid for this identifier.
    Ambiguous {
        /// How many rows matched.
        matches: usize,
    },
}

impl LookupOutcome {
    /// Whether the lookup resolved to a single record.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The resolved record, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&MappingRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound | Self::Ambiguous { .. } => None,
        }
    }
}

/// Resolver over the short and long mapping tables.
#[derive(Debug, Clone)]
pub struct Resolver {
    short_path: PathBuf,
    long_path: PathBuf,
}

impl Resolver {
    /// Creates a resolver over the given table paths. The short table is
    /// always consulted first.
    pub fn new(short_path: impl Into<PathBuf>, long_path: impl Into<PathBuf>) -> Self {
        Self {
            short_path: short_path.into(),
            long_path: long_path.into(),
        }
    }

    /// Resolves a staff pass identifier to its team.
    ///
    /// Comparison against the `staff_pass_id` column is exact and
    /// case-sensitive. The long table is scanned only when the short table
    /// yields no match at all, so a pass present in both tables resolves
    /// from the short one.
    #[must_use]
    pub fn resolve(&self, staff_id: &str) -> LookupOutcome {
        let mut candidates = scan_table(&self.short_path, staff_id);
        if candidates.is_empty() {
            candidates = scan_table(&self.long_path, staff_id);
        }

        if candidates.len() > 1 {
            tracing::warn!(
                staff_id,
                matches = candidates.len(),
                "staff pass maps to multiple teams"
            );
            return LookupOutcome::Ambiguous {
                matches: candidates.len(),
            };
        }

        match candidates.pop() {
            Some(record) => LookupOutcome::Found(record),
            None => LookupOutcome::NotFound,
        }
    }
}

/// Collects every row of one mapping table whose staff column equals
/// `staff_id`. An unreadable table or one without the required columns is
/// treated as empty.
fn scan_table(path: &Path, staff_id: &str) -> Vec<MappingRecord> {
    let table = match Table::from_file(path) {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "mapping table unreadable, treating as empty"
            );
            return Vec::new();
        },
    };

    let (Some(staff_col), Some(team_col)) =
        (table.column(STAFF_PASS_COLUMN), table.column(TEAM_COLUMN))
    else {
        tracing::warn!(
            path = %path.display(),
            "mapping table header lacks required columns, treating as empty"
        );
        return Vec::new();
    };

    table
        .rows()
        .iter()
        .filter(|row| row.get(staff_col).map(String::as_str) == Some(staff_id))
        .filter_map(|row| {
            row.get(team_col).map(|team| MappingRecord {
                staff_id: staff_id.to_string(),
                team_name: team.clone(),
            })
        })
        .collect()
}
