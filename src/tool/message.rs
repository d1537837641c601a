use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::sources::Source;

/// The single JSON message emitted per tool invocation.
///
/// Failures are data, not errors: hosts tell them apart by the `error` field
/// and `success: false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HotDataMessage {
    Success(HotData),
    Failure(FetchFailure),
    InvalidSource(InvalidSource),
    Fatal(FatalError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotData {
    pub source: Source,
    pub source_name: &'static str,
    pub total: usize,
    pub data: Value,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchFailure {
    pub source: Source,
    pub error: Cow<'static, str>,
    pub success: bool,
}

/// Rejected `source` parameter, listing what the host may pick from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidSource {
    pub error: String,
    pub available_sources: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FatalError {
    pub error: String,
}

/// Entry of the source picker offered to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    pub key: &'static str,
    pub name: &'static str,
}

impl From<Source> for SourceInfo {
    fn from(source: Source) -> Self {
        Self {
            key: source.slug(),
            name: source.display_name(),
        }
    }
}

impl HotDataMessage {
    /// `total` is the element count of `data`: items of a list, keys of an
    /// object, characters of a string.
    pub fn success(source: Source, data: Value, total: usize) -> Self {
        Self::Success(HotData {
            source,
            source_name: source.display_name(),
            total,
            data,
            success: true,
        })
    }

    pub fn failure(source: Source, error: impl Into<Cow<'static, str>>) -> Self {
        Self::Failure(FetchFailure {
            source,
            error: error.into(),
            success: false,
        })
    }

    pub fn missing_source() -> Self {
        Self::InvalidSource(InvalidSource {
            error: "Missing required parameter: source".to_owned(),
            available_sources: Source::slugs(),
        })
    }

    pub fn unknown_source(source: &str) -> Self {
        Self::InvalidSource(InvalidSource {
            error: format!("Unknown source: {source}"),
            available_sources: Source::slugs(),
        })
    }

    pub fn fatal(error: impl std::fmt::Display) -> Self {
        Self::Fatal(FatalError {
            error: format!("Failed to fetch hot data: {error}"),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(f.error.as_ref()),
            Self::InvalidSource(i) => Some(i.error.as_str()),
            Self::Fatal(f) => Some(f.error.as_str()),
        }
    }
}
