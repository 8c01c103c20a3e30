// Input gate: request shape, whitespace normalization and length bounds.
//
// Nothing reaches the analyzer until it has passed `AnalysisInput::normalize`.
// Lengths are counted in characters, not bytes, so multi-byte text gets the
// same 10..=10000 window as ASCII.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest accepted content, in characters, after trimming.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Longest accepted content, in characters, after trimming.
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// What the caller says the content is. The scorer ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Url,
    Text,
    #[default]
    Auto,
}

impl ContentType {
    /// Resolve `Auto` against the content. A lone http(s) token is a URL,
    /// anything else is text. Explicit choices are returned unchanged.
    pub fn resolve(self, content: &str) -> ContentType {
        match self {
            ContentType::Auto => {
                let trimmed = content.trim();
                let looks_like_url = (trimmed.starts_with("http://")
                    || trimmed.starts_with("https://"))
                    && !trimmed.contains(char::is_whitespace);
                if looks_like_url {
                    ContentType::Url
                } else {
                    ContentType::Text
                }
            }
            explicit => explicit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::Text => "text",
            ContentType::Auto => "auto",
        }
    }
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// URL or text content to analyze
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
    /// Optional caller identifier, only ever logged
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("content is too short: {len} characters (minimum {min})")]
    TooShort { len: usize, min: usize },
    #[error("content is too long: {len} characters (maximum {max})")]
    TooLong { len: usize, max: usize },
}

impl AnalysisInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: ContentType::Auto,
            user_id: None,
        }
    }

    /// Trim the content and enforce the length window on the result.
    pub fn normalize(&self) -> Result<String, InputError> {
        normalize_content(&self.content)
    }
}

/// Trim `raw` and check it against the accepted length window.
pub fn normalize_content(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len < MIN_CONTENT_CHARS {
        return Err(InputError::TooShort {
            len,
            min: MIN_CONTENT_CHARS,
        });
    }
    if len > MAX_CONTENT_CHARS {
        return Err(InputError::TooLong {
            len,
            max: MAX_CONTENT_CHARS,
        });
    }

    Ok(trimmed.to_string())
}
