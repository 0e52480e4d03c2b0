//! Configuration for the document viewer.

use crate::error::{Error, Result};
use crate::extract::DEFAULT_SEPARATOR;
use crate::search::{HighlightTransform, SearchOptions, DEFAULT_MARK_CLOSE, DEFAULT_MARK_OPEN};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default render-settle delay in milliseconds.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// Viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Delay after a page or session change before marks are re-tagged.
    pub settle_delay_ms: u64,

    /// Pattern compilation options.
    pub search: SearchOptions,

    /// Separator placed between the text fragments of a page.
    pub fragment_separator: String,

    /// Marker inserted before each highlighted occurrence.
    pub mark_open: String,

    /// Marker inserted after each highlighted occurrence.
    pub mark_close: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            search: SearchOptions::default(),
            fragment_separator: DEFAULT_SEPARATOR.to_string(),
            mark_open: DEFAULT_MARK_OPEN.to_string(),
            mark_close: DEFAULT_MARK_CLOSE.to_string(),
        }
    }

    /// Parse configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the render-settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the search options.
    pub fn with_search(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    /// Set the fragment separator.
    pub fn with_fragment_separator(mut self, separator: impl Into<String>) -> Self {
        self.fragment_separator = separator.into();
        self
    }

    /// Set the highlight markers.
    pub fn with_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.mark_open = open.into();
        self.mark_close = close.into();
        self
    }

    /// Render-settle delay as a [`Duration`].
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Highlight transform for `pattern` using these options and markers.
    pub fn highlight_transform(&self, pattern: &str) -> HighlightTransform {
        HighlightTransform::new(pattern, &self.search)
            .with_markers(self.mark_open.clone(), self.mark_close.clone())
    }
}
