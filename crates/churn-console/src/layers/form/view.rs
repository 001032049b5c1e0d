use churn_protocol::{PredictionResult, RiskLevel};

use crate::config::ProbabilityFormat;

/// The single user-facing failure message.
pub(crate) const CONNECTION_ERROR_NOTICE: &str = "Error connecting to backend";

const MISSING: &str = "n/a";

/// Display values for a settled prediction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResultView {
    pub(crate) prediction: &'static str,
    pub(crate) probability: String,
    pub(crate) risk_label: String,
    pub(crate) risk: RiskLevel,
}

impl ResultView {
    pub(crate) fn from_result(result: &PredictionResult, format: ProbabilityFormat) -> Self {
        let prediction = if result.predicts_churn() { "Yes" } else { "No" };
        let probability = match (result.churn_probability(), format) {
            (None, _) => MISSING.to_string(),
            (Some(number), ProbabilityFormat::Raw) => number.to_string(),
            (Some(number), ProbabilityFormat::Percent) => match number.as_f64() {
                Some(value) => format!("{:.1}%", value * 100.0),
                None => MISSING.to_string(),
            },
        };
        let risk_label = match result.raw().get("risk_level") {
            None | Some(serde_json::Value::Null) => "unknown".to_string(),
            Some(serde_json::Value::String(label)) => label.clone(),
            Some(other) => other.to_string(),
        };
        Self {
            prediction,
            probability,
            risk_label,
            risk: result.risk_level(),
        }
    }

    pub(crate) fn plain_lines(&self) -> Vec<String> {
        vec![
            format!("Churn Prediction: {}", self.prediction),
            format!("Churn Probability: {}", self.probability),
            format!("Risk Level: {}", self.risk_label),
        ]
    }
}
