// src/payload.rs
use crate::models::{RequestPayload, ValidatedInput};

/// Assembles the request body. Categories go out as the raw strings the user
/// picked; the service does its own encoding.
pub fn build(input: ValidatedInput) -> RequestPayload {
    RequestPayload {
        distance: input.distance,
        prep_time: input.prep_time,
        experience: input.experience,
        weather: input.weather,
        traffic: input.traffic,
        vehicle: input.vehicle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(distance: f64, prep_time: f64, experience: f64, vehicle: &str) -> ValidatedInput {
        ValidatedInput {
            distance,
            prep_time,
            experience,
            weather: "Delay-Risk".to_string(),
            traffic: "High".to_string(),
            vehicle: vehicle.to_string(),
        }
    }

    #[test]
    fn payload_mirrors_validated_input() {
        let inputs = [
            input(4.2, 15.0, 0.0, "Car"),
            input(0.0, -0.0, 1e9, "Scooter"),
            input(f64::NAN, 12.5, f64::INFINITY, "Hovercraft"),
            input(-0.0, f64::NAN, 3.0, ""),
        ];

        for original in inputs {
            let payload = build(original.clone());

            assert_eq!(payload.distance.to_bits(), original.distance.to_bits());
            assert_eq!(payload.prep_time.to_bits(), original.prep_time.to_bits());
            assert_eq!(payload.experience.to_bits(), original.experience.to_bits());
            assert_eq!(payload.weather, original.weather);
            assert_eq!(payload.traffic, original.traffic);
            assert_eq!(payload.vehicle, original.vehicle);
        }
    }

    #[test]
    fn wire_shape_uses_form_names() {
        let payload = build(ValidatedInput {
            distance: 1.0,
            prep_time: 2.0,
            experience: 3.0,
            weather: "Clear".to_string(),
            traffic: "Low".to_string(),
            vehicle: "Bike".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "distance": 1.0,
                "prep_time": 2.0,
                "experience": 3.0,
                "weather": "Clear",
                "traffic": "Low",
                "vehicle": "Bike"
            })
        );
    }
}
