//! Connection settings for the upstream hot-list API.
//!
//! Both the provider and the tool resolve these from the host-supplied
//! credentials on every call. Malformed values never fail a call; they fall
//! back to the defaults below.

use std::time::Duration;

use serde_json::Value;

/// Public DailyHot API instance.
pub const DEFAULT_BASE_URL: &str = "https://api.hot.imsyy.top";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const TIMEOUT_RANGE_SECS: std::ops::RangeInclusive<i64> = 1..=120;

/// Credential key overriding the API base URL.
pub const BASE_URL_KEY: &str = "daily_hot_url";

/// Credential key overriding the request timeout, in seconds.
pub const TIMEOUT_KEY: &str = "timeout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl UpstreamConfig {
    pub fn from_credentials(credentials: &Value) -> Self {
        let Some(credentials) = credentials.as_object() else {
            return Self::default();
        };

        let base_url = credentials
            .get(BASE_URL_KEY)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_owned();

        let timeout_secs = credentials
            .get(TIMEOUT_KEY)
            .and_then(parse_integer)
            .filter(|secs| TIMEOUT_RANGE_SECS.contains(secs))
            .map_or(DEFAULT_TIMEOUT_SECS, |secs| secs as u64);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// `{base_url}/{path}` with any trailing slashes removed from the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Reads a loosely typed integer: JSON integers, floats truncated toward
/// zero, and strings holding a base-10 integer.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Upstream envelopes report success as `"code": 200`.
pub fn is_success_code(payload: &Value) -> bool {
    payload
        .get("code")
        .and_then(Value::as_f64)
        .is_some_and(|code| code == 200.0)
}
