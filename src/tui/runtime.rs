//! TUI application state: the editable parameter cell and its result.

use crate::config::ScenarioConfig;
use crate::params::{Field, FieldErrors, ParameterInput, validate};
use crate::sim::{SimulationResult, simulate_with_rng};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Per-field nudge step applied by the arrow keys.
fn nudge_step(field: Field) -> f64 {
    match field {
        Field::ArrivalMultiplier => 10.0,
        _ => 1.0,
    }
}

/// TUI application state.
///
/// `input` is the single mutable current-value cell; every edit goes
/// through [`App::recompute`], which re-validates and — only while valid —
/// refreshes `result`. An invalid edit keeps the previous result on screen
/// alongside the field errors.
pub struct App {
    /// Current candidate parameter set.
    pub input: ParameterInput,
    /// Validation state of `input`.
    pub errors: FieldErrors,
    /// Result of the last valid parameter set, if any.
    pub result: Option<SimulationResult>,
    /// Seed for the hourly-series draws.
    pub seed: u64,
    /// Index of the selected field in [`Field::ALL`].
    pub selected: usize,
    /// Name of the active preset.
    pub preset_name: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates a new app from a preset name, falling back to baseline.
    pub fn new(preset: &str) -> Self {
        let scenario =
            ScenarioConfig::from_preset(preset).unwrap_or_else(|_| ScenarioConfig::baseline());
        let mut app = Self {
            input: ParameterInput::from(scenario.params()),
            errors: FieldErrors::default(),
            result: None,
            seed: scenario.simulation.seed,
            selected: 0,
            preset_name: preset.to_string(),
            quit: false,
        };
        app.recompute();
        app
    }

    /// The currently selected field.
    pub fn selected_field(&self) -> Field {
        Field::ALL[self.selected]
    }

    /// Moves the field selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(Field::ALL.len() - 1);
    }

    /// Moves the field selection down.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Field::ALL.len();
    }

    /// Adjusts the selected field by `direction` nudge steps.
    ///
    /// A missing field starts from its lower bound. No clamping is applied:
    /// the validator is the single source of range truth, and pushing a
    /// value out of range shows its message.
    pub fn nudge(&mut self, direction: f64) {
        let field = self.selected_field();
        let (lo, _) = field.bounds();
        let current = self.input.get(field).unwrap_or(lo);
        self.input.set(field, Some(current + direction * nudge_step(field)));
        self.recompute();
    }

    /// Advances the seed and resamples the hourly series.
    pub fn resample(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.recompute();
    }

    /// Replaces the parameter set with a named preset.
    pub fn switch_preset(&mut self, name: &str) {
        if let Ok(scenario) = ScenarioConfig::from_preset(name) {
            self.input = ParameterInput::from(scenario.params());
            self.preset_name = name.to_string();
            self.recompute();
        }
    }

    /// Re-validates the input and, when valid, recomputes the result.
    fn recompute(&mut self) {
        self.errors = validate(&self.input);
        if !self.errors.is_empty() {
            return;
        }
        if let Ok(params) = self.input.resolve() {
            let mut rng = StdRng::seed_from_u64(self.seed);
            if let Ok(result) = simulate_with_rng(&params, &mut rng) {
                self.result = Some(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_valid_with_a_result() {
        let app = App::new("baseline");
        assert!(app.errors.is_empty());
        assert!(app.result.is_some());
    }

    #[test]
    fn invalid_edit_keeps_previous_result() {
        let mut app = App::new("baseline");
        let before = app.result.clone().expect("initial result");

        app.input.set(Field::ChargePoints, Some(0.0));
        app.recompute();

        assert!(app.errors.get(Field::ChargePoints).is_some());
        assert_eq!(app.result, Some(before), "stale result stays on screen");
    }

    #[test]
    fn nudge_moves_selected_field_and_recomputes() {
        let mut app = App::new("baseline");
        let before = app.input.get(Field::ChargePoints).expect("present");
        app.nudge(1.0);
        let after = app.input.get(Field::ChargePoints).expect("present");
        assert_eq!(after, before + 1.0);
        assert!(app.result.is_some());
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut app = App::new("baseline");
        app.select_prev();
        assert_eq!(app.selected_field(), Field::ChargingPower);
        app.select_next();
        assert_eq!(app.selected_field(), Field::ChargePoints);
    }

    #[test]
    fn resample_changes_only_the_hourly_series() {
        let mut app = App::new("baseline");
        let before = app.result.clone().expect("initial result");
        app.resample();
        let after = app.result.clone().expect("resampled result");
        assert_eq!(before.statistics, after.statistics);
        assert_ne!(before.hourly, after.hourly);
    }

    #[test]
    fn preset_switch_replaces_parameters() {
        let mut app = App::new("baseline");
        app.switch_preset("rush_hour");
        assert_eq!(app.preset_name, "rush_hour");
        assert_eq!(app.input.get(Field::ChargePoints), Some(30.0));
        assert!(app.errors.is_empty());
    }
}
