pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod summarize;
pub mod youtube;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use error::{Error, Result};

static QUERY_FORM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"v=([^&]*)").expect("valid regex"));
static SHORT_FORM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"youtu\.be/([^?]*)").expect("valid regex"));

/// Validated YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Extract the video ID from a `...?v=ID&...` or `youtu.be/ID?...` URL.
    ///
    /// The query form wins when both are present. An empty ID is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        let caps = QUERY_FORM
            .captures(input)
            .or_else(|| SHORT_FORM.captures(input))
            .ok_or_else(|| Error::InvalidUrl(input.to_string()))?;

        let id = &caps[1];
        if id.is_empty() {
            return Err(Error::InvalidUrl(input.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single captioned segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl Segment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: 0.0,
            duration: 0.0,
        }
    }
}

/// Join segment texts with single spaces, in order, trimmed
pub fn assemble(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
