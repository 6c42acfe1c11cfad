//! Staff gift redemption: pass-to-team lookup and redemption ledger.
//!
//! This crate implements the full redemption workflow for a gift counter:
//! resolve a staff pass identifier to a team through flat mapping tables,
//! check the redemption ledger for a prior entry by that team, and append a
//! ledger row once the redemption is granted.
//!
//! # Pipeline
//!
//! ```text
//! staff pass ──▶ mapping::Resolver ──▶ LookupOutcome
//!                                          │
//!                        RedemptionService::verify ◀── ledger backend
//!                                          │
//!                        RedemptionService::record ──▶ ledger row
//! ```
//!
//! Each stage is a pure function over file contents; no state is cached
//! between calls. Storage sits behind the [`ledger::RedemptionLedger`]
//! trait so the flat-file backend can be swapped for an in-memory one in
//! tests.
//!
//! # Failure posture
//!
//! Mapping tables that are missing or unreadable are treated as empty (the
//! lookup then denies); a missing ledger means "no team has redeemed yet",
//! while a ledger that is present but unreadable is an error and eligibility
//! fails closed. See the module docs of [`mapping`] and [`ledger`] for the
//! details.

pub mod config;
pub mod ledger;
pub mod mapping;
pub mod redemption;
pub mod table;

pub use config::{ConfigError, StationConfig};
pub use ledger::{FlatFileLedger, LedgerError, MemoryLedger, RedemptionLedger, RedemptionRecord};
pub use mapping::{LookupOutcome, MappingRecord, Resolver};
pub use redemption::{RedemptionDecision, RedemptionService};
