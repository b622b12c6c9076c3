//! Integration tests for the parameter validator and scenario config.

mod common;

use ev_demand_sim::config::ScenarioConfig;
use ev_demand_sim::params::{Field, ParameterInput, validate};

#[test]
fn valid_iff_every_field_in_range() {
    let mut input = ParameterInput::from(common::reference_params());
    assert!(validate(&input).is_empty());

    // Push each field just outside either bound; only that field fails.
    for field in Field::ALL {
        let (lo, hi) = field.bounds();
        for bad in [lo - 1.0, hi + 1.0] {
            let mut candidate = input;
            candidate.set(field, Some(bad));
            let errors = validate(&candidate);
            assert_eq!(errors.len(), 1, "{field} = {bad}");
            assert_eq!(errors.get(field), Some(field.message()));
        }
    }

    // And exactly on the bounds is accepted.
    for field in Field::ALL {
        let (lo, hi) = field.bounds();
        input.set(field, Some(lo));
        assert!(validate(&input).is_empty());
        input.set(field, Some(hi));
        assert!(validate(&input).is_empty());
    }
}

#[test]
fn boundary_zero_charge_points_reports_range_message() {
    let mut input = ParameterInput::from(common::reference_params());
    input.set(Field::ChargePoints, Some(0.0));
    let errors = validate(&input);
    assert_eq!(errors.get(Field::ChargePoints), Some("Must be between 1 and 50"));
}

#[test]
fn fields_are_validated_independently() {
    let input = ParameterInput {
        charge_points: Some(0.0),
        arrival_multiplier: None,
        consumption_per_visit: Some(18.0),
        charging_power: Some(f64::NAN),
    };
    let errors = validate(&input);
    assert_eq!(errors.len(), 3);
    assert!(errors.get(Field::ConsumptionPerVisit).is_none());
}

#[test]
fn scenario_files_on_disk_parse_and_validate() {
    for name in ["baseline", "rush_hour", "overnight_fleet"] {
        let path = format!("scenarios/{name}.toml");
        let cfg = ScenarioConfig::from_toml_file(std::path::Path::new(&path))
            .unwrap_or_else(|e| panic!("{path}: {e}"));
        assert!(cfg.validate().is_empty(), "{path} should be valid");

        let preset = ScenarioConfig::from_preset(name).expect("preset exists");
        assert_eq!(cfg.params(), preset.params(), "{path} matches its preset");
    }
}

#[test]
fn scenario_validation_uses_the_same_rules_as_the_form() {
    let cfg = ScenarioConfig::from_toml_str(
        "[station]\ncharge_points = 60\narrival_multiplier_pct = 10\n",
    )
    .expect("parseable TOML");
    let errors = cfg.validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "station.charge_points");
    assert_eq!(errors[0].message, "Must be between 1 and 50");
    assert_eq!(errors[1].field, "station.arrival_multiplier_pct");
    assert_eq!(errors[1].message, "Must be between 20% and 200%");
}
