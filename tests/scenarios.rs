//! Replaying the YAML scenarios shipped in samples/scenarios

use std::path::Path;

use segdrop::scenario::Scenario;
use segdrop::DropLocation;

fn sample_scenarios() -> Vec<Scenario> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/scenarios");
    Scenario::load_dir(&dir).unwrap()
}

#[test]
fn test_sample_scenarios_resolve_to_expected_location() {
    let scenarios = sample_scenarios();
    assert!(scenarios.iter().any(|s| s.expect.is_some()));

    for scenario in &scenarios {
        let overlay = scenario
            .run()
            .unwrap_or_else(|e| panic!("{}: {:#}", scenario.name, e));
        let published = overlay.host().drop_location();
        assert_eq!(published, overlay.current_drop_location(), "{}", scenario.name);
        if let Some(expected) = scenario.expect {
            assert_eq!(published, expected, "{}", scenario.name);
        }
    }
}

#[test]
fn test_scenario_without_pointer_shows_outer_ring() {
    let scenario = sample_scenarios()
        .into_iter()
        .find(|s| s.pointer.is_none())
        .unwrap();
    let overlay = scenario.run().unwrap();

    assert_eq!(overlay.host().drop_location(), DropLocation::None);
    assert!(overlay.segments().contains(DropLocation::OuterLeft));
    assert!(!overlay.segments().contains(DropLocation::Center));
}

#[test]
fn test_wrong_expectation_fails() {
    let scenario: Scenario = serde_yaml::from_str(
        "name: wrong\ncolumns: 2\npointer: [600, 300]\nexpect: outer-left\n",
    )
    .unwrap();
    let err = scenario.run().err().unwrap();
    assert!(err.to_string().contains("expected outer-left"), "{}", err);
}

#[test]
fn test_invalid_size_fails() {
    let scenario: Scenario = serde_yaml::from_str("name: empty\nwidth: 0\n").unwrap();
    assert!(scenario.run().is_err());
}
