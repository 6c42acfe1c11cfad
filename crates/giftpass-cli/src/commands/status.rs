//! Ledger listing command.

use anyhow::{Context, Result};
use giftpass_core::config::StationConfig;
use giftpass_core::ledger::RedemptionLedger;

/// Lists recorded redemptions, optionally restricted to one team.
pub fn run(config: &StationConfig, team: Option<&str>) -> Result<()> {
    let records = super::ledger(config)
        .records()
        .context("failed to read the redemption ledger")?;

    let mut shown = 0;
    for record in &records {
        if team.is_some_and(|team| record.team_name != team) {
            continue;
        }
        println!(
            "{}  {}  {}",
            record.redeemed_at, record.team_name, record.staff_id
        );
        shown += 1;
    }

    match (shown, team) {
        (0, Some(team)) => println!("no redemption recorded for team {team}"),
        (0, None) => println!("no redemptions recorded"),
        (n, _) => println!("{n} redemption(s)"),
    }
    Ok(())
}
