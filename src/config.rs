//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::params::{Field, ParameterInput, SimulationParameters, validate};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from TOML
/// with [`ScenarioConfig::from_toml_file`] or use one of the named presets.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Station parameters fed to the demand engine.
    #[serde(default)]
    pub station: StationConfig,
    /// Simulation-wide settings.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Station parameters fed to the demand engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StationConfig {
    /// Number of charging bays (1–50).
    pub charge_points: f64,
    /// Arrival rate multiplier in percent (20–200).
    pub arrival_multiplier_pct: f64,
    /// Energy per charging event in kWh (1–100).
    pub consumption_kwh_per_visit: f64,
    /// Per-bay power rating in kW (1–50).
    pub charging_power_kw: f64,
}

impl Default for StationConfig {
    fn default() -> Self {
        let p = SimulationParameters::default();
        Self {
            charge_points: p.charge_points,
            arrival_multiplier_pct: p.arrival_multiplier,
            consumption_kwh_per_visit: p.consumption_per_visit,
            charging_power_kw: p.charging_power,
        }
    }
}

/// Simulation-wide settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seed for the hourly-series random draws.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"station.charge_points"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario (original form defaults).
    pub fn baseline() -> Self {
        Self {
            station: StationConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }

    /// Returns the rush-hour preset: busy urban site, fast chargers.
    pub fn rush_hour() -> Self {
        Self {
            station: StationConfig {
                charge_points: 30.0,
                arrival_multiplier_pct: 180.0,
                consumption_kwh_per_visit: 15.0,
                charging_power_kw: 22.0,
            },
            simulation: SimulationConfig::default(),
        }
    }

    /// Returns the overnight-fleet preset: few bays, long slow charges.
    pub fn overnight_fleet() -> Self {
        Self {
            station: StationConfig {
                charge_points: 8.0,
                arrival_multiplier_pct: 40.0,
                consumption_kwh_per_visit: 60.0,
                charging_power_kw: 7.0,
            },
            simulation: SimulationConfig::default(),
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "rush_hour", "overnight_fleet"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "rush_hour" => Ok(Self::rush_hour()),
            "overnight_fleet" => Ok(Self::overnight_fleet()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Converts the station table into engine parameters.
    pub fn params(&self) -> SimulationParameters {
        SimulationParameters {
            charge_points: self.station.charge_points,
            arrival_multiplier: self.station.arrival_multiplier_pct,
            consumption_per_visit: self.station.consumption_kwh_per_visit,
            charging_power: self.station.charging_power_kw,
        }
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Range checks delegate to the parameter validator so scenario files
    /// and interactive input enforce identical rules. Returns an empty
    /// vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let errors = validate(&ParameterInput::from(self.params()));
        errors
            .iter()
            .map(|(field, message)| ConfigError {
                field: format!("station.{}", config_key(field)),
                message: message.to_string(),
            })
            .collect()
    }
}

/// Maps a validator field to its TOML key under `[station]`.
fn config_key(field: Field) -> &'static str {
    match field {
        Field::ChargePoints => "charge_points",
        Field::ArrivalMultiplier => "arrival_multiplier_pct",
        Field::ConsumptionPerVisit => "consumption_kwh_per_visit",
        Field::ChargingPower => "charging_power_kw",
    }
}
