use anyhow::Context;
use async_trait::async_trait;
use churn_protocol::health::HealthStatus;
use churn_protocol::{PredictionRequest, PredictionResult};
use reqwest::Client;

use crate::config::BackendConfig;

#[derive(Debug, thiserror::Error)]
pub(crate) enum PredictError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("empty response body")]
    EmptyBody,
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// The prediction service as seen from the form.
#[async_trait]
pub(crate) trait PredictionBackend: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError>;

    async fn health(&self) -> Result<HealthStatus, PredictError>;
}

pub(crate) fn join_base_path(base: &str, path: &str) -> Result<String, PredictError> {
    if base.trim().is_empty() {
        return Err(PredictError::InvalidEndpoint("base_url is empty".to_string()));
    }
    let normalized_base = base.trim().trim_end_matches('/');
    let normalized_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Ok(format!("{normalized_base}{normalized_path}"))
}

pub(crate) struct HttpBackend {
    client: Client,
    predict_url: String,
    health_url: String,
}

impl HttpBackend {
    pub(crate) fn from_config(config: &BackendConfig) -> anyhow::Result<Self> {
        let predict_url = join_base_path(&config.base_url, &config.predict_path)?;
        let health_url = join_base_path(&config.base_url, &config.health_path)?;
        let mut builder = Client::builder().user_agent("churn-console");
        if let Some(timeout) = config.timeout()? {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build http client")?;
        tracing::info!(predict_url = %predict_url, health_url = %health_url, "backend configured");
        Ok(Self {
            client,
            predict_url,
            health_url,
        })
    }

    pub(crate) fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl PredictionBackend for HttpBackend {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError> {
        let response = self
            .client
            .post(&self.predict_url)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(
                    is_timeout = err.is_timeout(),
                    is_connect = err.is_connect(),
                    error = %err,
                    "predict request failed"
                );
                err
            })?;
        let status = response.status();
        if !status.is_success() {
            // The body is still consumed as the result, whatever its status.
            tracing::warn!(status = %status, "predict returned non-success status");
        }
        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(PredictionResult::from(value))
    }

    async fn health(&self) -> Result<HealthStatus, PredictError> {
        let response = self.client.get(&self.health_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "health probe returned non-success status");
            return Err(PredictError::Status(status));
        }
        let body = response.text().await?;
        tracing::debug!(status = %status, body_len = body.len(), "health probe answered");
        HealthStatus::from_body(&body).ok_or(PredictError::EmptyBody)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    type Seen = Arc<Mutex<Vec<Value>>>;

    async fn spawn_mock(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn backend_for(base_url: String) -> HttpBackend {
        let config = BackendConfig {
            base_url,
            ..BackendConfig::default()
        };
        HttpBackend::from_config(&config).unwrap()
    }

    fn predict_router(seen: Seen, reply: Value) -> Router {
        Router::new()
            .route(
                "/predict",
                post(
                    move |State(seen): State<Seen>, Json(body): Json<Value>| async move {
                        seen.lock().unwrap().push(body);
                        Json(reply)
                    },
                ),
            )
            .route(
                "/",
                get(|| async { Json(json!({"message": "Churn Prediction API is running"})) }),
            )
            .with_state(seen)
    }

    #[test]
    fn join_base_path_normalizes_slashes() {
        assert_eq!(
            join_base_path("http://host/", "predict").unwrap(),
            "http://host/predict"
        );
        assert_eq!(
            join_base_path("http://host", "/predict").unwrap(),
            "http://host/predict"
        );
        assert_eq!(join_base_path("http://host/", "/").unwrap(), "http://host/");
        assert!(join_base_path("  ", "/predict").is_err());
    }

    #[tokio::test]
    async fn predict_posts_json_and_returns_body() {
        let seen: Seen = Arc::default();
        let reply = json!({"churn_prediction": 1, "churn_probability": 0.82, "risk_level": "High"});
        let base = spawn_mock(predict_router(Arc::clone(&seen), reply.clone())).await;
        let backend = backend_for(base);

        let request = PredictionRequest {
            recency_days: 90.0,
            frequency: 1.0,
            monetary: 1200.0,
        };
        let result = backend.predict(&request).await.unwrap();
        assert_eq!(result.raw(), &reply);

        let bodies = seen.lock().unwrap().clone();
        assert_eq!(
            bodies,
            vec![json!({"recency_days": 90.0, "frequency": 1.0, "monetary": 1200.0})]
        );
    }

    #[tokio::test]
    async fn nan_fields_go_out_as_null() {
        let seen: Seen = Arc::default();
        let base = spawn_mock(predict_router(Arc::clone(&seen), json!({}))).await;
        let backend = backend_for(base);

        let request = PredictionRequest {
            recency_days: f64::NAN,
            frequency: f64::NAN,
            monetary: f64::NAN,
        };
        backend.predict(&request).await.unwrap();
        let bodies = seen.lock().unwrap().clone();
        assert_eq!(
            bodies,
            vec![json!({"recency_days": null, "frequency": null, "monetary": null})]
        );
    }

    #[tokio::test]
    async fn error_status_with_json_body_is_still_a_result() {
        let router = Router::new().route(
            "/predict",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"detail": "validation error"})),
                )
            }),
        );
        let backend = backend_for(spawn_mock(router).await);
        let request = PredictionRequest {
            recency_days: f64::NAN,
            frequency: 1.0,
            monetary: 1.0,
        };
        let result = backend.predict(&request).await.unwrap();
        assert_eq!(result.raw(), &json!({"detail": "validation error"}));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_failure() {
        let router = Router::new().route("/predict", post(|| async { "Internal Server Error" }));
        let backend = backend_for(spawn_mock(router).await);
        let request = PredictionRequest {
            recency_days: 1.0,
            frequency: 1.0,
            monetary: 1.0,
        };
        let err = backend.predict(&request).await.unwrap_err();
        assert!(matches!(err, PredictError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = backend_for(format!("http://{addr}"));
        let request = PredictionRequest {
            recency_days: 1.0,
            frequency: 1.0,
            monetary: 1.0,
        };
        let err = backend.predict(&request).await.unwrap_err();
        assert!(matches!(err, PredictError::Transport(_)));
    }

    #[tokio::test]
    async fn health_reads_root_message() {
        let seen: Seen = Arc::default();
        let base = spawn_mock(predict_router(seen, json!({}))).await;
        let backend = backend_for(base);
        let status = backend.health().await.unwrap();
        assert_eq!(status.message, "Churn Prediction API is running");
    }

    #[tokio::test]
    async fn health_error_status_is_not_online() {
        let router = Router::new().route(
            "/",
            get(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "<html>Service Unavailable</html>",
                )
            }),
        );
        let backend = backend_for(spawn_mock(router).await);
        let err = backend.health().await.unwrap_err();
        assert!(matches!(
            err,
            PredictError::Status(status) if status.as_u16() == 503
        ));
    }

    #[test]
    fn from_config_builds_urls() {
        let config = BackendConfig {
            base_url: "http://127.0.0.1:8000/".to_string(),
            predict_path: "v1/predict".to_string(),
            timeout: Some("2s".to_string()),
            ..BackendConfig::default()
        };
        let backend = HttpBackend::from_config(&config).unwrap();
        assert_eq!(backend.predict_url(), "http://127.0.0.1:8000/v1/predict");
    }
}
