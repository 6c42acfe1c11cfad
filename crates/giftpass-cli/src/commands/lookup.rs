//! Staff pass lookup command.

use anyhow::{Result, bail};
use giftpass_core::config::StationConfig;
use giftpass_core::mapping::LookupOutcome;

/// Resolves a staff pass and prints the outcome.
///
/// Exits non-zero when the pass does not resolve to a single team, so the
/// command composes in scripts.
pub fn run(config: &StationConfig, staff_id: &str, json: bool) -> Result<()> {
    match super::resolver(config).resolve(staff_id) {
        LookupOutcome::Found(record) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{} -> {}", record.staff_id, record.team_name);
            }
            Ok(())
        },
        LookupOutcome::NotFound => {
            bail!("staff pass {staff_id} not found in any mapping table")
        },
        LookupOutcome::Ambiguous { matches } => {
            bail!("staff pass {staff_id} matches {matches} mapping rows; reference data is invalid")
        },
    }
}
