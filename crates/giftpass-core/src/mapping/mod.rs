//! Staff-pass-to-team mapping tables and the lookup resolver.
//!
//! Reference data lives in two read-only mapping tables, a "short" one and a
//! "long" one, each a flat table whose header names a `staff_pass_id` and a
//! `team_name` column in unspecified order. The [`Resolver`] scans the short
//! table first and falls through to the long table only when the short one
//! yields nothing.
//!
//! A pass must map to exactly one team. Zero matches and multiple matches
//! are both surfaced, as distinct [`LookupOutcome`] variants, so operators
//! can tell an unknown pass from corrupt reference data; neither is eligible
//! for redemption.
//!
//! Tables are re-read on every call. An unreadable table is logged and
//! treated as empty, so a broken deployment denies redemption instead of
//! taking the counter down.

mod resolver;

#[cfg(test)]
mod tests;

pub use resolver::{LookupOutcome, MappingRecord, Resolver};
