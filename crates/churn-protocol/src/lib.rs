use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub mod health;

/// Body of `POST /predict`.
///
/// Fields are sent exactly as coerced from the form; a non-finite value
/// serializes as JSON `null`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PredictionRequest {
    pub recency_days: f64,
    pub frequency: f64,
    pub monetary: f64,
}

impl PredictionRequest {
    pub fn is_finite(&self) -> bool {
        self.recency_days.is_finite() && self.frequency.is_finite() && self.monetary.is_finite()
    }
}

/// Response body of `POST /predict`, kept verbatim.
///
/// The backend is expected to answer with
/// `{"churn_prediction": 0|1, "churn_probability": f, "risk_level": "..."}`
/// but nothing here enforces that shape. Accessors return `None` for
/// anything missing or of the wrong type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PredictionResult(Value);

impl PredictionResult {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn churn_prediction(&self) -> Option<f64> {
        self.field("churn_prediction").and_then(Value::as_f64)
    }

    /// True only for a numeric `1`, mirroring a strict equality check.
    pub fn predicts_churn(&self) -> bool {
        self.churn_prediction() == Some(1.0)
    }

    pub fn churn_probability(&self) -> Option<&Number> {
        match self.field("churn_probability") {
            Some(Value::Number(number)) => Some(number),
            _ => None,
        }
    }

    pub fn risk_label(&self) -> Option<&str> {
        self.field("risk_level").and_then(Value::as_str)
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_label(self.risk_label())
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }
}

impl From<Value> for PredictionResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Presentation bucket for the backend's `risk_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// Missing, non-string, or unrecognized label.
    Unknown,
}

impl RiskLevel {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Low") => RiskLevel::Low,
            Some("Medium") => RiskLevel::Medium,
            Some("High") => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_wire_keys() {
        let request = PredictionRequest {
            recency_days: 90.0,
            frequency: 1.0,
            monetary: 1200.5,
        };
        let value = serde_json::to_value(request).expect("serialize");
        assert_eq!(
            value,
            json!({"recency_days": 90.0, "frequency": 1.0, "monetary": 1200.5})
        );
        assert!(request.is_finite());
    }

    #[test]
    fn non_finite_fields_serialize_as_null() {
        let request = PredictionRequest {
            recency_days: f64::NAN,
            frequency: 3.0,
            monetary: f64::NAN,
        };
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(json, r#"{"recency_days":null,"frequency":3.0,"monetary":null}"#);
        assert!(!request.is_finite());
    }

    #[test]
    fn result_accessors_read_documented_shape() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"churn_prediction":1,"churn_probability":0.82,"risk_level":"High"}"#,
        )
        .expect("deserialize");
        assert!(result.predicts_churn());
        assert_eq!(
            result.churn_probability().and_then(Number::as_f64),
            Some(0.82)
        );
        assert_eq!(result.risk_label(), Some("High"));
        assert_eq!(result.risk_level(), RiskLevel::High);
    }

    #[test]
    fn result_accepts_partial_and_foreign_shapes() {
        let partial = PredictionResult::from(json!({"churn_prediction": 0}));
        assert!(!partial.predicts_churn());
        assert!(partial.churn_probability().is_none());
        assert_eq!(partial.risk_level(), RiskLevel::Unknown);

        let foreign = PredictionResult::from(json!({"detail": [{"msg": "field required"}]}));
        assert!(foreign.churn_prediction().is_none());
        assert_eq!(foreign.risk_level(), RiskLevel::Unknown);

        let scalar = PredictionResult::from(json!("ok"));
        assert!(scalar.risk_label().is_none());
    }

    #[test]
    fn churn_prediction_is_strict_about_one() {
        assert!(PredictionResult::from(json!({"churn_prediction": 1.0})).predicts_churn());
        assert!(!PredictionResult::from(json!({"churn_prediction": "1"})).predicts_churn());
        assert!(!PredictionResult::from(json!({"churn_prediction": true})).predicts_churn());
    }

    #[test]
    fn risk_level_is_case_sensitive() {
        assert_eq!(RiskLevel::from_label(Some("Medium")), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_label(Some("Low")), RiskLevel::Low);
        assert_eq!(RiskLevel::from_label(Some("high")), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_label(Some("Critical")), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_label(None), RiskLevel::Unknown);
    }
}
