use serde::Deserialize;

/// Body of the backend root endpoint, e.g.
/// `{"message": "Churn Prediction API is running"}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub message: String,
}

impl HealthStatus {
    /// Accepts the JSON form, falling back to the trimmed body text.
    pub fn from_body(body: &str) -> Option<Self> {
        if let Ok(status) = serde_json::from_str::<HealthStatus>(body) {
            return Some(status);
        }
        let text = body.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self {
                message: text.to_string(),
            })
        }
    }
}
