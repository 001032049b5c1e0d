use churn_protocol::health::HealthStatus;
use churn_protocol::PredictionResult;

use super::backend::PredictError;

pub(crate) enum UiEvent {
    Settled {
        seq: u64,
        outcome: Result<PredictionResult, PredictError>,
    },
    Health(Result<HealthStatus, PredictError>),
}
