//! Flat tabular file primitives shared by the mapping and ledger scans.
//!
//! A table is plain comma-separated text whose first line is a header row
//! naming its columns in unspecified order. Each physical row is trimmed of
//! leading and trailing whitespace and split on `,`; individual fields are
//! kept verbatim, so callers decide where comparison is exact and where it
//! trims. No quoting or escaping is supported.

use std::fs;
use std::io;
use std::path::Path;

/// Header name of the staff pass identifier column.
pub const STAFF_PASS_COLUMN: &str = "staff_pass_id";

/// Header name of the team column.
pub const TEAM_COLUMN: &str = "team_name";

/// Header name of the redemption timestamp column.
pub const REDEEMED_AT_COLUMN: &str = "redeemed_at";

/// A flat table split into a header row and data rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parses table text.
    ///
    /// The first non-blank line is the header; every following non-blank
    /// line is a data row. Blank lines carry no fields and are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut lines = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let header = lines.next().map(split_row).unwrap_or_default();
        let rows = lines.map(split_row).collect();

        Self { header, rows }
    }

    /// Reads and parses a table file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file is missing, not
    /// readable, or not UTF-8; callers decide whether that degrades to an
    /// empty table or denies the operation.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    /// Index of the named header column, order-independent.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|col| col == name)
    }

    /// Data rows, header excluded.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_is_order_independent() {
        let table = Table::parse("team_name,staff_pass_id\nAlpha,STAFF_1");
        assert_eq!(table.column(STAFF_PASS_COLUMN), Some(1));
        assert_eq!(table.column(TEAM_COLUMN), Some(0));
        assert_eq!(table.column("no_such_column"), None);
    }

    #[test]
    fn rows_exclude_header() {
        let table = Table::parse("staff_pass_id,team_name\nSTAFF_1,Alpha\nSTAFF_2,Beta");
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], vec!["STAFF_1", "Alpha"]);
    }

    #[test]
    fn rows_are_trimmed_but_fields_are_verbatim() {
        let table = Table::parse("staff_pass_id,team_name,redeemed_at\n  STAFF_1, Alpha, 17000\t");
        assert_eq!(table.rows()[0], vec!["STAFF_1", " Alpha", " 17000"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = Table::parse("staff_pass_id,team_name\n\nSTAFF_1,Alpha\n   \n");
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn empty_input_parses_to_empty_table() {
        let table = Table::parse("");
        assert_eq!(table.column(TEAM_COLUMN), None);
        assert!(table.rows().is_empty());
    }

    #[test]
    fn missing_file_surfaces_the_io_error() {
        let err = Table::from_file(Path::new("/no/such/table.csv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
