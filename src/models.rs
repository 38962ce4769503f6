// src/models.rs
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const FIELD_NAMES: [&str; 6] = ["distance", "prep_time", "experience", "weather", "traffic", "vehicle"];

/// Form field values exactly as captured at submission time.
/// Missing entries are empty strings.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RawFormValues {
    #[serde(deserialize_with = "text_or_number")]
    pub distance: String,
    #[serde(deserialize_with = "text_or_number")]
    pub prep_time: String,
    #[serde(deserialize_with = "text_or_number")]
    pub experience: String,
    #[serde(deserialize_with = "text_or_number")]
    pub weather: String,
    #[serde(deserialize_with = "text_or_number")]
    pub traffic: String,
    #[serde(deserialize_with = "text_or_number")]
    pub vehicle: String,
}

impl RawFormValues {
    /// Sets a field by its form name. Returns `false` for unknown names.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "distance" => &mut self.distance,
            "prep_time" => &mut self.prep_time,
            "experience" => &mut self.experience,
            "weather" => &mut self.weather,
            "traffic" => &mut self.traffic,
            "vehicle" => &mut self.vehicle,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("distance", self.distance.as_str()),
            ("prep_time", self.prep_time.as_str()),
            ("experience", self.experience.as_str()),
            ("weather", self.weather.as_str()),
            ("traffic", self.traffic.as_str()),
            ("vehicle", self.vehicle.as_str()),
        ]
    }
}

/// Form files may write numeric fields as numbers; the form itself only
/// ever holds text.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(i) => i.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}

/// Input that passed validation. Numeric fields are coerced; a non-numeric
/// text coerces to NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub distance: f64,
    pub prep_time: f64,
    pub experience: f64,
    pub weather: String,
    pub traffic: String,
    pub vehicle: String,
}

/// Body of `POST /predict`. NaN numbers serialize as `null`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RequestPayload {
    pub distance: f64,
    pub prep_time: f64,
    pub experience: f64,
    pub weather: String,
    pub traffic: String,
    pub vehicle: String,
}

/// Success body of the prediction service. Only `prediction` on a JSON
/// object is read; any other body shape has no prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub prediction: Option<f64>,
}

impl<'de> Deserialize<'de> for PredictionResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = Value::deserialize(deserializer)?;
        let prediction = match body.as_object().and_then(|fields| fields.get("prediction")) {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => {
                return Err(de::Error::custom(format!("prediction is not a number: {}", other)));
            }
        };
        Ok(Self { prediction })
    }
}

/// Failure body of the prediction service.
#[derive(Debug, Default)]
pub struct ErrorBody {
    pub error: Option<Value>,
}

impl<'de> Deserialize<'de> for ErrorBody {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = Value::deserialize(deserializer)?;
        let error = body.as_object().and_then(|fields| fields.get("error")).cloned();
        Ok(Self { error })
    }
}

impl ErrorBody {
    /// The server's message, if `error` holds a non-empty string, a non-zero
    /// number or `true`.
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}
