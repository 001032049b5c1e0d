pub(crate) mod backend;
pub(crate) mod dispatch;
pub(crate) mod events;
pub(crate) mod headless;
pub(crate) mod logging;

pub(crate) use backend::{HttpBackend, PredictionBackend};
pub(crate) use dispatch::{spawn_health_probe, spawn_submission};
pub(crate) use events::UiEvent;
pub(crate) use headless::predict_once;
pub(crate) use logging::init_tracing;
