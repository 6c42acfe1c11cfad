//! Ledger reset command.

use anyhow::Result;
use giftpass_core::config::StationConfig;

/// Deletes the redemption ledger. Delete failures are logged by the
/// library, not raised; a missing ledger is already reset.
pub fn run(config: &StationConfig) -> Result<()> {
    let ledger = super::ledger(config);
    ledger.delete();
    println!("ledger reset: {}", ledger.path().display());
    Ok(())
}
