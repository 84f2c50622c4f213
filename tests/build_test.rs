//! Tests for batch building from `MANAGER:EMPLOYEE:SIDE` placements

use rstest::rstest;

use teamtree::application::ApplicationError;
use teamtree::cli::commands::build;
use teamtree::cli::CliError;
use teamtree::config::Settings;
use teamtree::domain::{Side, TreeError};
use teamtree::exitcode;

#[ctor::ctor]
fn init() {
    teamtree::util::testing::init_test_setup();
}

fn placements(specs: &[&str]) -> Vec<String> {
    specs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_valid_placements_when_building_then_team_in_order() {
    let specs = placements(&["CEO:CTO:left", "ceo:CFO:RIGHT", "CTO:Engineer:left"]);

    let directory = build(Settings::default(), "CEO", &specs, true).expect("build");

    assert_eq!(directory.tree().len(), 4);
    assert_eq!(
        directory.structure(),
        "- CEO\n  - CTO\n    - Engineer\n  - CFO"
    );
}

#[test]
fn given_rejected_placement_when_building_non_strict_then_continues() {
    let specs = placements(&[
        "CEO:CTO:left",
        "CEO:Usurper:left", // occupied
        "Nobody:X:right",   // not found
        "CEO:COO:up",       // invalid side
        "CEO:CFO:right",
    ]);

    let directory = build(Settings::default(), "CEO", &specs, false).expect("build");

    assert_eq!(directory.structure(), "- CEO\n  - CTO\n  - CFO");
    assert!(!directory.tree().contains("Usurper"));
    assert!(!directory.tree().contains("X"));
    assert!(!directory.tree().contains("COO"));
}

#[test]
fn given_rejected_placement_when_building_strict_then_aborts_with_dataerr() {
    let specs = placements(&["CEO:CTO:left", "CEO:Usurper:left", "CEO:CFO:right"]);

    let err = build(Settings::default(), "CEO", &specs, true).unwrap_err();

    assert!(
        matches!(
            err,
            CliError::Application(ApplicationError::Tree(TreeError::SlotOccupied {
                ref manager,
                side: Side::Left,
            })) if manager == "CEO"
        ),
        "{err:?}"
    );
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[rstest]
#[case("CEO-CTO-left")]
#[case("CEO:CTO")]
#[case("CEO::left")]
#[case("CEO:CTO:left:extra")]
fn given_malformed_placement_when_building_then_usage_error(#[case] spec: &str) {
    let specs = placements(&["CEO:CFO:right", spec]);

    let err = build(Settings::default(), "CEO", &specs, false).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)), "{err:?}");
    assert!(err.to_string().contains(spec), "{err}");
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_blank_lead_when_building_then_dataerr() {
    let err = build(Settings::default(), "  ", &[], false).unwrap_err();

    assert!(
        matches!(err, CliError::Application(ApplicationError::EmptyName(_))),
        "{err:?}"
    );
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}
