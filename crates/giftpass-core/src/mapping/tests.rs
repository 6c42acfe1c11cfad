//! Tests for the mapping resolver.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

/// Writes a mapping table into `dir` and returns its path.
fn write_table(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write mapping table");
    path
}

fn fixture_resolver(short: &str, long: &str) -> (Resolver, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let short_path = write_table(&dir, "short.csv", short);
    let long_path = write_table(&dir, "long.csv", long);
    (Resolver::new(short_path, long_path), dir)
}

#[test]
fn resolves_from_the_short_table() {
    let (resolver, _dir) = fixture_resolver(
        "staff_pass_id,team_name\nBOSS_T000000001P,Alpha\nMANAGER_P49NK2CS3B5G,Beta",
        "staff_pass_id,team_name\n",
    );

    let outcome = resolver.resolve("BOSS_T000000001P");
    assert_eq!(
        outcome,
        LookupOutcome::Found(MappingRecord {
            staff_id: "BOSS_T000000001P".to_string(),
            team_name: "Alpha".to_string(),
        })
    );
}

#[test]
fn falls_through_to_the_long_table() {
    let (resolver, _dir) = fixture_resolver(
        "staff_pass_id,team_name\nBOSS_T000000001P,Alpha",
        "staff_pass_id,team_name\nSTAFF_LONG_ONLY,Gamma",
    );

    let outcome = resolver.resolve("STAFF_LONG_ONLY");
    assert_eq!(
        outcome.record().map(|record| record.team_name.as_str()),
        Some("Gamma")
    );
}

#[test]
fn short_table_match_shadows_the_long_table() {
    let (resolver, _dir) = fixture_resolver(
        "staff_pass_id,team_name\nSTAFF_BOTH,ShortTeam",
        "staff_pass_id,team_name\nSTAFF_BOTH,LongTeam",
    );

    let outcome = resolver.resolve("STAFF_BOTH");
    assert_eq!(
        outcome.record().map(|record| record.team_name.as_str()),
        Some("ShortTeam")
    );
}

#[test]
fn unknown_pass_is_not_found() {
    let (resolver, _dir) = fixture_resolver(
        "staff_pass_id,team_name\nBOSS_T000000001P,Alpha",
        "staff_pass_id,team_name\nMANAGER_P49NK2CS3B5G,Beta",
    );

    assert_eq!(resolver.resolve("STAFF_UNKNOWN"), LookupOutcome::NotFound);
}

#[test]
fn duplicate_rows_are_ambiguous() {
    let (resolver, _dir) = fixture_resolver(
        "staff_pass_id,team_name\nSTAFF_DUP,Alpha\nSTAFF_DUP,Beta",
        "staff_pass_id,team_name\n",
    );

    assert_eq!(
        resolver.resolve("STAFF_DUP"),
        LookupOutcome::Ambiguous { matches: 2 }
    );
    assert!(!resolver.resolve("STAFF_DUP").is_found());
}

#[test]
fn header_column_order_does_not_matter() {
    let (resolver, _dir) = fixture_resolver(
        "team_name,staff_pass_id\nAlpha,BOSS_T000000001P",
        "staff_pass_id,team_name\n",
    );

    let outcome = resolver.resolve("BOSS_T000000001P");
    assert_eq!(
        outcome.record().map(|record| record.team_name.as_str()),
        Some("Alpha")
    );
}

#[test]
fn comparison_is_case_sensitive_and_exact() {
    let (resolver, _dir) = fixture_resolver(
        "staff_pass_id,team_name\nBOSS_T000000001P,Alpha",
        "staff_pass_id,team_name\n",
    );

    assert_eq!(resolver.resolve("boss_t000000001p"), LookupOutcome::NotFound);
    assert_eq!(resolver.resolve("BOSS_T000000001"), LookupOutcome::NotFound);
}

#[test]
fn missing_tables_degrade_to_not_found() {
    let resolver = Resolver::new("/no/such/short.csv", "/no/such/long.csv");
    assert_eq!(resolver.resolve("BOSS_T000000001P"), LookupOutcome::NotFound);
}

#[test]
fn table_without_required_columns_is_treated_as_empty() {
    let (resolver, _dir) = fixture_resolver(
        "id,team\nBOSS_T000000001P,Alpha",
        "staff_pass_id,team_name\nBOSS_T000000001P,Fallback",
    );

    // The short table lacks the expected header, so the long table answers.
    let outcome = resolver.resolve("BOSS_T000000001P");
    assert_eq!(
        outcome.record().map(|record| record.team_name.as_str()),
        Some("Fallback")
    );
}

#[test]
fn duplicates_across_one_table_do_not_consult_the_other() {
    let (resolver, _dir) = fixture_resolver(
        "staff_pass_id,team_name\nSTAFF_DUP,Alpha\nSTAFF_DUP,Alpha",
        "staff_pass_id,team_name\nSTAFF_DUP,Beta",
    );

    // Two short-table matches are already ambiguous; the long table cannot
    // rescue the lookup.
    assert_eq!(
        resolver.resolve("STAFF_DUP"),
        LookupOutcome::Ambiguous { matches: 2 }
    );
}
