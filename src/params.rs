//! Simulation parameters and the per-field range validator.
//!
//! The presentation layer (CLI, API, TUI) holds a [`ParameterInput`] — a
//! candidate value set where any field may still be empty or unparseable —
//! and re-validates it on every edit. Only [`ParameterInput::resolve`]
//! produces a [`SimulationParameters`] for the engine.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete, numeric parameter set for one simulation run.
///
/// Construction via [`ParameterInput::resolve`] guarantees every field is
/// present and finite; range validity is checked separately so callers can
/// still render an out-of-range candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Number of charging bays at the station.
    pub charge_points: f64,
    /// Percentage scaling on the nominal vehicle arrival rate.
    pub arrival_multiplier: f64,
    /// Energy delivered per charging event (kWh).
    pub consumption_per_visit: f64,
    /// Power rating of a single bay (kW).
    pub charging_power: f64,
}

impl Default for SimulationParameters {
    /// The original form defaults: 20 bays, 100%, 18 kWh, 11 kW.
    fn default() -> Self {
        Self {
            charge_points: 20.0,
            arrival_multiplier: 100.0,
            consumption_per_visit: 18.0,
            charging_power: 11.0,
        }
    }
}

impl SimulationParameters {
    /// Validates this parameter set against the field ranges.
    pub fn validate(&self) -> FieldErrors {
        validate(&ParameterInput::from(*self))
    }
}

/// Candidate parameter values as collected from raw user input.
///
/// `None` models a transient empty or non-numeric text field; a `NaN`
/// value is treated the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterInput {
    /// Candidate charge point count.
    pub charge_points: Option<f64>,
    /// Candidate arrival multiplier (%).
    pub arrival_multiplier: Option<f64>,
    /// Candidate consumption per visit (kWh).
    pub consumption_per_visit: Option<f64>,
    /// Candidate charging power (kW).
    pub charging_power: Option<f64>,
}

impl From<SimulationParameters> for ParameterInput {
    fn from(p: SimulationParameters) -> Self {
        Self {
            charge_points: Some(p.charge_points),
            arrival_multiplier: Some(p.arrival_multiplier),
            consumption_per_visit: Some(p.consumption_per_visit),
            charging_power: Some(p.charging_power),
        }
    }
}

impl ParameterInput {
    /// Returns the candidate value for one field.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::ChargePoints => self.charge_points,
            Field::ArrivalMultiplier => self.arrival_multiplier,
            Field::ConsumptionPerVisit => self.consumption_per_visit,
            Field::ChargingPower => self.charging_power,
        }
    }

    /// Sets the candidate value for one field.
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::ChargePoints => &mut self.charge_points,
            Field::ArrivalMultiplier => &mut self.arrival_multiplier,
            Field::ConsumptionPerVisit => &mut self.consumption_per_visit,
            Field::ChargingPower => &mut self.charging_power,
        };
        *slot = value;
    }

    /// Validates and converts into a [`SimulationParameters`].
    ///
    /// # Errors
    ///
    /// Returns the full [`FieldErrors`] map if any field is missing,
    /// non-numeric, or out of range.
    pub fn resolve(&self) -> Result<SimulationParameters, FieldErrors> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        // All fields present and finite once validation passes.
        Ok(SimulationParameters {
            charge_points: self.charge_points.unwrap_or_default(),
            arrival_multiplier: self.arrival_multiplier.unwrap_or_default(),
            consumption_per_visit: self.consumption_per_visit.unwrap_or_default(),
            charging_power: self.charging_power.unwrap_or_default(),
        })
    }
}

/// The four operator-supplied parameter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Number of charging bays.
    ChargePoints,
    /// Arrival rate multiplier (%).
    ArrivalMultiplier,
    /// Energy per charging event (kWh).
    ConsumptionPerVisit,
    /// Per-bay power rating (kW).
    ChargingPower,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::ChargePoints,
        Field::ArrivalMultiplier,
        Field::ConsumptionPerVisit,
        Field::ChargingPower,
    ];

    /// Inclusive valid range for this field.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Field::ChargePoints => (1.0, 50.0),
            Field::ArrivalMultiplier => (20.0, 200.0),
            Field::ConsumptionPerVisit => (1.0, 100.0),
            Field::ChargingPower => (1.0, 50.0),
        }
    }

    /// Fixed validation message for this field.
    pub fn message(self) -> &'static str {
        match self {
            Field::ChargePoints => "Must be between 1 and 50",
            Field::ArrivalMultiplier => "Must be between 20% and 200%",
            Field::ConsumptionPerVisit => "Must be between 1 and 100 kWh",
            Field::ChargingPower => "Must be between 1 and 50 kW",
        }
    }

    /// Stable snake_case key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Field::ChargePoints => "charge_points",
            Field::ArrivalMultiplier => "arrival_multiplier",
            Field::ConsumptionPerVisit => "consumption_per_visit",
            Field::ChargingPower => "charging_power",
        }
    }

    /// Human-readable label with unit, as shown on the form.
    pub fn label(self) -> &'static str {
        match self {
            Field::ChargePoints => "Number of Charge Points",
            Field::ArrivalMultiplier => "Arrival Multiplier (%)",
            Field::ConsumptionPerVisit => "Consumption (kWh)",
            Field::ChargingPower => "Charging Power (kW)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-field validation messages; empty means the candidate is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message for one field, if it failed validation.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Iterates over `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    fn insert(&mut self, field: Field) {
        self.0.insert(field, field.message());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Checks a candidate parameter set against the fixed field ranges.
///
/// Each field is evaluated independently: a missing or non-numeric value
/// fails only that field. Pure and deterministic; never panics.
pub fn validate(input: &ParameterInput) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        let (lo, hi) = field.bounds();
        match input.get(field) {
            Some(v) if v.is_finite() && v >= lo && v <= hi => {}
            _ => errors.insert(field),
        }
    }
    errors
}
