use std::time::Duration;

use serde_json::Value;

use crate::sources::Source;
use crate::upstream::{is_success_code, parse_integer, UpstreamConfig};

pub mod message;


pub use message::{HotDataMessage, SourceInfo};

/// Tool name as registered with the host.
pub const TOOL_NAME: &str = "daily-hot";

pub const DEFAULT_LIMIT: u32 = 30;

pub const LIMIT_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

const NO_DATA: &str = "No data returned from API";

/// Conditions the invocation does not map to a dedicated message. They end
/// up in the `Failed to fetch hot data` catch-all.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("parameter `{name}` must be {expected}")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
    },
    #[error("API response is not a JSON object")]
    NotAnObject,
    #[error("`data` in API response has no length: {0}")]
    DataWithoutLength(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HotDataRequest {
    source: Source,
    limit: u32,
    cache: bool,
}

/// Fetches a hot list from the upstream aggregation API.
pub struct DailyHotTool {
    http_client: reqwest::Client,
}

impl DailyHotTool {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Runs one invocation. Every outcome, including failures, is returned
    /// as a message.
    #[tracing::instrument(name = "invoke", skip_all, fields(tool = TOOL_NAME))]
    pub async fn invoke(&self, parameters: &Value, credentials: &Value) -> HotDataMessage {
        match self.try_invoke(parameters, credentials).await {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, "hot data invocation failed");
                HotDataMessage::fatal(e)
            }
        }
    }

    async fn try_invoke(&self, parameters: &Value, credentials: &Value) -> Result<HotDataMessage, ToolError> {
        let upstream = UpstreamConfig::from_credentials(credentials);

        let request = match parse_parameters(parameters)? {
            Ok(request) => request,
            Err(rejection) => return Ok(rejection),
        };

        self.fetch(request, &upstream).await
    }

    #[tracing::instrument(skip(self, upstream), fields(base_url = %upstream.base_url))]
    async fn fetch(&self, request: HotDataRequest, upstream: &UpstreamConfig) -> Result<HotDataMessage, ToolError> {
        let source = request.source;

        let mut query = vec![("limit", request.limit.to_string())];
        if !request.cache {
            query.push(("cache", "false".to_owned()));
        }

        let body = match self.get(&upstream.endpoint(source.slug()), &query, upstream.timeout).await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                tracing::warn!(%source, "upstream request timed out");
                return Ok(HotDataMessage::failure(source, "API request timeout"));
            }
            Err(e) => {
                tracing::warn!(%source, error = %e, "upstream request failed");
                return Ok(HotDataMessage::failure(source, format!("API request failed: {e}")));
            }
        };

        let Ok(mut payload) = serde_json::from_str::<Value>(&body) else {
            tracing::warn!(%source, "upstream returned a non-JSON body");
            return Ok(HotDataMessage::failure(source, "Failed to parse API response"));
        };

        if !payload.is_object() {
            return Err(ToolError::NotAnObject);
        }

        let success = is_success_code(&payload);
        let data = payload.get_mut("data").map(Value::take);
        match data {
            Some(data) if success && is_truthy(&data) => {
                let total = match &data {
                    Value::Array(items) => Some(items.len()),
                    Value::Object(fields) => Some(fields.len()),
                    Value::String(s) => Some(s.chars().count()),
                    _ => None,
                };
                let Some(total) = total else {
                    return Err(ToolError::DataWithoutLength(data));
                };
                tracing::info!(%source, total, "fetched hot list");
                Ok(HotDataMessage::success(source, data, total))
            }
            _ => {
                tracing::info!(%source, code = ?payload.get("code"), "upstream returned no data");
                Ok(HotDataMessage::failure(source, NO_DATA))
            }
        }
    }

    async fn get(&self, url: &str, query: &[(&str, String)], timeout: Duration) -> reqwest::Result<String> {
        self.http_client
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

/// Every source the tool accepts, for host-side pickers.
pub fn available_sources() -> Vec<SourceInfo> {
    Source::ALL.iter().copied().map(SourceInfo::from).collect()
}

/// The outer `Result` carries unhandled conditions, the inner one a
/// rejection message for a missing or unknown source.
fn parse_parameters(parameters: &Value) -> Result<Result<HotDataRequest, HotDataMessage>, ToolError> {
    let source = match parameters.get("source") {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.trim(),
        Some(_) => {
            return Err(ToolError::InvalidParameter {
                name: "source",
                expected: "a string",
            })
        }
    };

    if source.is_empty() {
        return Ok(Err(HotDataMessage::missing_source()));
    }

    let Some(source) = Source::from_slug(source) else {
        return Ok(Err(HotDataMessage::unknown_source(source)));
    };

    Ok(Ok(HotDataRequest {
        source,
        limit: parse_limit(parameters.get("limit")),
        cache: parse_cache(parameters.get("cache")),
    }))
}

fn parse_limit(value: Option<&Value>) -> u32 {
    value
        .and_then(parse_integer)
        .filter(|limit| LIMIT_RANGE.contains(limit))
        .map_or(DEFAULT_LIMIT, |limit| limit as u32)
}

/// Absent means true. A present value is read by truthiness, so `null` and
/// `""` turn caching off, as do the strings `false`/`0`/`no`/`off`.
fn parse_cache(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::String(s)) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "" | "false" | "0" | "no" | "off"
        ),
        Some(value) => is_truthy(value),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
