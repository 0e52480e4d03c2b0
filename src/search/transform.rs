//! Per-fragment highlight transform handed to the renderer.
//!
//! Runs on the visible page only and wraps every occurrence of the pattern
//! with an open/close marker pair. It works fragment by fragment, so it does
//! not have to agree index-for-index with the match index, which scans the
//! joined page text.

use super::pattern::{self, SearchOptions};
use regex::Regex;
use std::borrow::Cow;

/// Default opening marker.
pub const DEFAULT_MARK_OPEN: &str = "<mark>";
/// Default closing marker.
pub const DEFAULT_MARK_CLOSE: &str = "</mark>";

/// Wraps pattern occurrences in display text.
#[derive(Debug, Clone)]
pub struct HighlightTransform {
    regex: Option<Regex>,
    open: String,
    close: String,
}

impl Default for HighlightTransform {
    fn default() -> Self {
        Self::inert()
    }
}

impl HighlightTransform {
    /// Build a transform for `pattern`.
    ///
    /// Blank or uncompilable patterns give an inert transform that returns
    /// fragments unchanged.
    pub fn new(pattern: &str, options: &SearchOptions) -> Self {
        let regex = pattern::compile(pattern, options).unwrap_or_else(|e| {
            log::debug!("Highlight disabled: {}", e);
            None
        });
        Self {
            regex,
            open: DEFAULT_MARK_OPEN.to_string(),
            close: DEFAULT_MARK_CLOSE.to_string(),
        }
    }

    /// A transform that never highlights.
    pub fn inert() -> Self {
        Self {
            regex: None,
            open: DEFAULT_MARK_OPEN.to_string(),
            close: DEFAULT_MARK_CLOSE.to_string(),
        }
    }

    /// Use custom markers.
    pub fn with_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    /// Whether this transform changes anything.
    pub fn is_active(&self) -> bool {
        self.regex.is_some()
    }

    /// Number of marks this transform would insert into `fragment`.
    pub fn count(&self, fragment: &str) -> usize {
        match &self.regex {
            Some(regex) => regex.find_iter(fragment).filter(|m| !m.is_empty()).count(),
            None => 0,
        }
    }

    /// Wrap every occurrence in `fragment` with the markers.
    pub fn apply<'a>(&self, fragment: &'a str) -> Cow<'a, str> {
        let Some(regex) = &self.regex else {
            return Cow::Borrowed(fragment);
        };

        let mut out = String::new();
        let mut last = 0;
        for mat in regex.find_iter(fragment).filter(|m| !m.is_empty()) {
            out.push_str(&fragment[last..mat.start()]);
            out.push_str(&self.open);
            out.push_str(mat.as_str());
            out.push_str(&self.close);
            last = mat.end();
        }

        if last == 0 && out.is_empty() {
            return Cow::Borrowed(fragment);
        }
        out.push_str(&fragment[last..]);
        Cow::Owned(out)
    }
}
