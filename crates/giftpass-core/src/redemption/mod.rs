//! The lookup → verify → record redemption pipeline.
//!
//! [`RedemptionService`] wires a [`Resolver`] to a [`RedemptionLedger`]
//! backend and exposes the three pipeline stages individually, plus a
//! composed [`redeem`](RedemptionService::redeem) for callers that want the
//! whole flow in one call.
//!
//! Eligibility fails closed: an unknown pass, an ambiguous mapping, a prior
//! redemption by the team, and an unreadable ledger all deny.


use crate::ledger::{LedgerError, RedemptionLedger, RedemptionRecord};
use crate::mapping::{LookupOutcome, MappingRecord, Resolver};

/// Outcome of a full redemption attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedemptionDecision {
    /// The redemption was recorded.
    Granted(RedemptionRecord),

    /// The staff pass did not resolve to a single team.
    NotEligible(LookupOutcome),

    /// The team has already collected its gift.
    AlreadyRedeemed {
        /// The team that already redeemed.
        team_name: String,
    },
}

/// Drives the redemption pipeline over a resolver and a ledger backend.
#[derive(Debug)]
pub struct RedemptionService<L> {
    resolver: Resolver,
    ledger: L,
}

impl<L: RedemptionLedger> RedemptionService<L> {
    /// Creates a service over the given resolver and ledger.
    pub const fn new(resolver: Resolver, ledger: L) -> Self {
        Self { resolver, ledger }
    }

    /// The ledger backend.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Stage 1: resolves a staff pass identifier.
    #[must_use]
    pub fn look_up(&self, staff_id: &str) -> LookupOutcome {
        self.resolver.resolve(staff_id)
    }

    /// Stage 2: whether the resolved staff member may redeem.
    ///
    /// True only for an unambiguously resolved pass whose team has no prior
    /// redemption. A ledger failure denies rather than propagating; the
    /// counter must never hand out a second gift because the ledger was
    /// unreadable.
    #[must_use]
    pub fn verify(&self, outcome: &LookupOutcome) -> bool {
        let Some(record) = outcome.record() else {
            return false;
        };

        match self.ledger.has_redeemed(&record.team_name) {
            Ok(redeemed) => !redeemed,
            Err(err) => {
                tracing::warn!(
                    team = %record.team_name,
                    error = %err,
                    "redemption check failed, denying"
                );
                false
            },
        }
    }

    /// Stage 3: records a redemption for `record` when `eligible`.
    ///
    /// With `eligible == false` this is a guaranteed no-op, whatever the
    /// ledger state. Returns whether a row was appended.
    ///
    /// # Errors
    ///
    /// Returns an error when the ledger could not be written.
    pub fn record(&self, record: &MappingRecord, eligible: bool) -> Result<bool, LedgerError> {
        if !eligible {
            return Ok(false);
        }

        let stamped = RedemptionRecord::stamp_now(record);
        self.ledger.record_redemption(&stamped)?;
        tracing::info!(
            team = %stamped.team_name,
            staff = %stamped.staff_id,
            "redemption recorded"
        );
        Ok(true)
    }

    /// The full pipeline: resolve, verify, record.
    ///
    /// # Errors
    ///
    /// Returns an error when the ledger is present but unreadable, or when
    /// the appended row could not be written. No row is ever appended on an
    /// error path.
    pub fn redeem(&self, staff_id: &str) -> Result<RedemptionDecision, LedgerError> {
        let outcome = self.look_up(staff_id);
        let Some(record) = outcome.record() else {
            return Ok(RedemptionDecision::NotEligible(outcome));
        };

        if self.ledger.has_redeemed(&record.team_name)? {
            return Ok(RedemptionDecision::AlreadyRedeemed {
                team_name: record.team_name.clone(),
            });
        }

        let stamped = RedemptionRecord::stamp_now(record);
        self.ledger.record_redemption(&stamped)?;
        tracing::info!(
            team = %stamped.team_name,
            staff = %stamped.staff_id,
            "redemption recorded"
        );
        Ok(RedemptionDecision::Granted(stamped))
    }
}
