//! Redemption command: the full resolve → verify → record pipeline.

use anyhow::{Context, Result, bail};
use giftpass_core::config::StationConfig;
use giftpass_core::mapping::LookupOutcome;
use giftpass_core::redemption::RedemptionDecision;

/// Runs the full pipeline for one staff pass.
///
/// Exits zero only when the redemption was granted and recorded.
pub fn run(config: &StationConfig, staff_id: &str) -> Result<()> {
    let decision = super::service(config)
        .redeem(staff_id)
        .context("redemption pipeline failed")?;

    match decision {
        RedemptionDecision::Granted(record) => {
            println!(
                "gift granted to team {} (staff pass {})",
                record.team_name, record.staff_id
            );
            Ok(())
        },
        RedemptionDecision::AlreadyRedeemed { team_name } => {
            bail!("team {team_name} has already collected their gift")
        },
        RedemptionDecision::NotEligible(LookupOutcome::Ambiguous { matches }) => {
            bail!("staff pass {staff_id} matches {matches} mapping rows; reference data is invalid")
        },
        RedemptionDecision::NotEligible(_) => {
            bail!("staff pass {staff_id} not found in any mapping table")
        },
    }
}
