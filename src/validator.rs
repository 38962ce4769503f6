// src/validator.rs
use crate::errors::ValidationError;
use crate::models::{RawFormValues, ValidatedInput};

/// Checks raw form values and coerces the numeric fields.
///
/// Checks run in a fixed order and the first failure is returned:
/// presence of all six fields, then the sign of distance, preparation time
/// and experience. Category values are not checked against any set.
pub fn validate(raw: &RawFormValues) -> Result<ValidatedInput, ValidationError> {
    if raw.fields().iter().any(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    let distance = parse_leading_float(&raw.distance);
    if distance < 0.0 {
        return Err(ValidationError::NegativeDistance);
    }

    let prep_time = parse_leading_float(&raw.prep_time);
    if prep_time < 0.0 {
        return Err(ValidationError::NegativePrepTime);
    }

    let experience = parse_leading_float(&raw.experience);
    if experience < 0.0 {
        return Err(ValidationError::NegativeExperience);
    }

    Ok(ValidatedInput {
        distance,
        prep_time,
        experience,
        weather: raw.weather.clone(),
        traffic: raw.traffic.clone(),
        vehicle: raw.vehicle.clone(),
    })
}

/// Parses the longest numeric prefix of `text` after leading whitespace.
/// Returns NaN when there is none, so such values never compare below zero.
pub fn parse_leading_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].replace("Infinity", "inf").parse().unwrap_or(f64::NAN);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> RawFormValues {
        RawFormValues {
            distance: "7.93".to_string(),
            prep_time: "12".to_string(),
            experience: "1.5".to_string(),
            weather: "Clear".to_string(),
            traffic: "Medium".to_string(),
            vehicle: "Scooter".to_string(),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let input = validate(&complete()).unwrap();
        assert_eq!(input.distance, 7.93);
        assert_eq!(input.prep_time, 12.0);
        assert_eq!(input.experience, 1.5);
        assert_eq!(input.vehicle, "Scooter");
    }

    #[test]
    fn each_missing_field_is_reported() {
        for field in crate::models::FIELD_NAMES {
            let mut raw = complete();
            raw.set(field, "");
            assert_eq!(validate(&raw), Err(ValidationError::MissingFields), "field {}", field);
        }
    }

    #[test]
    fn each_negative_number_is_reported() {
        let cases = [
            ("distance", ValidationError::NegativeDistance),
            ("prep_time", ValidationError::NegativePrepTime),
            ("experience", ValidationError::NegativeExperience),
        ];
        for (field, expected) in cases {
            let mut raw = complete();
            raw.set(field, "-0.5");
            assert_eq!(validate(&raw), Err(expected));
        }
    }

    #[test]
    fn first_failure_wins() {
        let mut raw = complete();
        raw.distance = "-1".to_string();
        raw.prep_time = "-1".to_string();
        raw.experience = "-1".to_string();
        assert_eq!(validate(&raw), Err(ValidationError::NegativeDistance));

        raw.distance = "3".to_string();
        assert_eq!(validate(&raw), Err(ValidationError::NegativePrepTime));

        raw.vehicle.clear();
        assert_eq!(validate(&raw), Err(ValidationError::MissingFields));
    }

    #[test]
    fn unknown_categories_are_forwarded() {
        let mut raw = complete();
        raw.weather = "Sandstorm".to_string();
        raw.vehicle = "Hovercraft".to_string();
        let input = validate(&raw).unwrap();
        assert_eq!(input.weather, "Sandstorm");
        assert_eq!(input.vehicle, "Hovercraft");
    }

    #[test]
    fn zero_is_allowed() {
        let mut raw = complete();
        raw.distance = "0".to_string();
        raw.experience = "-0".to_string();
        assert!(validate(&raw).is_ok());
    }

    #[test]
    fn non_numeric_text_passes_as_nan() {
        let mut raw = complete();
        raw.prep_time = "soon".to_string();
        let input = validate(&raw).unwrap();
        assert!(input.prep_time.is_nan());
    }

    #[test]
    fn leading_float_prefixes() {
        assert_eq!(parse_leading_float("  12km"), 12.0);
        assert_eq!(parse_leading_float("3.5.1"), 3.5);
        assert_eq!(parse_leading_float(".5"), 0.5);
        assert_eq!(parse_leading_float("5."), 5.0);
        assert_eq!(parse_leading_float("-2e3x"), -2000.0);
        assert_eq!(parse_leading_float("4e"), 4.0);
        assert_eq!(parse_leading_float("+7"), 7.0);
        assert_eq!(parse_leading_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_leading_float("").is_nan());
        assert!(parse_leading_float("-").is_nan());
        assert!(parse_leading_float(".").is_nan());
        assert!(parse_leading_float("abc").is_nan());
    }
}
