use serde_json::Value;
use tokio::sync::RwLock;

use crate::upstream::{is_success_code, UpstreamConfig};


/// Upstream route listing every feed, used as a liveness probe.
pub const HEALTH_CHECK_PATH: &str = "all";

#[derive(Debug, thiserror::Error)]
pub enum HealthCheckError {
    #[error("API request timeout - service may be unavailable")]
    Timeout,
    #[error("Cannot connect to DailyHot API service: {0}")]
    Connect(reqwest::Error),
    #[error("API request failed: {0}")]
    Request(reqwest::Error),
    #[error("Failed to parse API response: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Unexpected API response format: {0}")]
    UnexpectedFormat(Value),
}

impl From<reqwest::Error> for HealthCheckError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e)
        } else {
            Self::Request(e)
        }
    }
}

/// Shown to the operator when the plugin credentials are rejected.
#[derive(Debug, thiserror::Error)]
#[error("Failed to validate DailyHot service: Health check failed: {0}")]
pub struct CredentialValidationError(#[from] pub HealthCheckError);

/// Validates provider credentials by probing the configured upstream.
///
/// The API is public, so "credentials" only carry an optional base URL and
/// timeout. The last resolved values are kept on the provider.
pub struct DailyHotProvider {
    http_client: reqwest::Client,
    config: RwLock<UpstreamConfig>,
}

impl DailyHotProvider {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            config: RwLock::new(UpstreamConfig::default()),
        }
    }

    /// Configuration resolved by the most recent [`validate`](Self::validate).
    pub async fn config(&self) -> UpstreamConfig {
        self.config.read().await.clone()
    }

    #[tracing::instrument(name = "validate_credentials", skip_all)]
    pub async fn validate(&self, credentials: &Value) -> Result<(), CredentialValidationError> {
        let config = UpstreamConfig::from_credentials(credentials);
        *self.config.write().await = config.clone();

        tracing::debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "running health check"
        );

        if let Err(e) = health_check(&self.http_client, &config).await {
            tracing::warn!(base_url = %config.base_url, error = %e, "health check failed");
            return Err(e.into());
        }

        tracing::info!(base_url = %config.base_url, "credentials validated");
        Ok(())
    }
}

/// `GET {base_url}/all`, accepted when the body is `{"code": 200, ...}` and
/// carries either `routes` or `count`.
pub async fn health_check(
    http_client: &reqwest::Client,
    config: &UpstreamConfig,
) -> Result<(), HealthCheckError> {
    let body = http_client
        .get(config.endpoint(HEALTH_CHECK_PATH))
        .timeout(config.timeout)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let payload: Value = serde_json::from_str(&body)?;

    let has_listing = payload.get("routes").is_some() || payload.get("count").is_some();
    if is_success_code(&payload) && has_listing {
        Ok(())
    } else {
        Err(HealthCheckError::UnexpectedFormat(payload))
    }
}
