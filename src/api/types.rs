//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::params::{FieldErrors, ParameterInput, SimulationParameters};
use crate::sim::SimulationResult;

/// `GET /result` response: the parameters and everything derived from them.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    /// Parameters the result was computed from.
    pub params: SimulationParameters,
    /// Seed used for the hourly-series draws.
    pub seed: u64,
    /// Full simulation result.
    pub result: SimulationResult,
}

/// `POST /simulate` request body.
///
/// Every parameter is optional so the caller can forward raw form state;
/// missing fields fail validation for that field only.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulateRequest {
    /// Candidate charge point count.
    pub charge_points: Option<f64>,
    /// Candidate arrival multiplier (%).
    pub arrival_multiplier: Option<f64>,
    /// Candidate consumption per visit (kWh).
    pub consumption_per_visit: Option<f64>,
    /// Candidate charging power (kW).
    pub charging_power: Option<f64>,
    /// Optional seed; defaults to the server's run seed.
    pub seed: Option<u64>,
}

impl SimulateRequest {
    /// The candidate parameter set carried by this request.
    pub fn input(&self) -> ParameterInput {
        ParameterInput {
            charge_points: self.charge_points,
            arrival_multiplier: self.arrival_multiplier,
            consumption_per_visit: self.consumption_per_visit,
            charging_power: self.charging_power,
        }
    }
}

/// 422 response body: per-field validation messages.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// Field name to fixed message.
    pub errors: FieldErrors,
}

/// Error response body for 500-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Field, validate};

    #[test]
    fn simulate_request_maps_to_parameter_input() {
        let req = SimulateRequest {
            charge_points: Some(10.0),
            arrival_multiplier: None,
            consumption_per_visit: Some(18.0),
            charging_power: Some(11.0),
            seed: Some(3),
        };
        let input = req.input();
        assert_eq!(input.charge_points, Some(10.0));
        assert_eq!(input.arrival_multiplier, None);

        let errors = validate(&input);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::ArrivalMultiplier).is_some());
    }

    #[test]
    fn field_errors_serialize_as_string_map() {
        let errors = validate(&ParameterInput::default());
        let json = serde_json::to_value(ValidationResponse { errors }).expect("serializable");
        assert_eq!(
            json["errors"]["charge_points"],
            "Must be between 1 and 50"
        );
        assert_eq!(
            json["errors"]["arrival_multiplier"],
            "Must be between 20% and 200%"
        );
    }
}
