//! Subcommand implementations.

pub mod lookup;
pub mod redeem;
pub mod reset;
pub mod status;

use giftpass_core::config::StationConfig;
use giftpass_core::ledger::FlatFileLedger;
use giftpass_core::mapping::Resolver;
use giftpass_core::redemption::RedemptionService;

/// Builds the station's resolver from its configured table paths.
fn resolver(config: &StationConfig) -> Resolver {
    Resolver::new(&config.paths.mapping_short, &config.paths.mapping_long)
}

/// Builds the station's flat-file ledger.
fn ledger(config: &StationConfig) -> FlatFileLedger {
    FlatFileLedger::new(&config.paths.ledger)
}

/// Builds the full pipeline service for the station.
fn service(config: &StationConfig) -> RedemptionService<FlatFileLedger> {
    RedemptionService::new(resolver(config), ledger(config))
}
