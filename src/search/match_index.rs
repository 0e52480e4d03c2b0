//! Match index construction.
//!
//! Pages are fetched strictly one after another, in page order, and scanned
//! left to right. A failed fetch aborts the whole build; nothing collected
//! before the failure is returned.

use super::pattern::{self, SearchOptions};
use crate::error::Result;
use regex::Regex;
use std::future::Future;

/// One occurrence of the search pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
    /// Page number (1-indexed) where the match was found
    pub page_index: usize,
    /// Character offset of the match start within the page's concatenated text
    pub offset: usize,
    /// Length of the match in characters
    pub len: usize,
}

impl Match {
    /// Character offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Builds the ordered list of matches for one pattern.
#[derive(Debug, Clone)]
pub struct MatchIndexBuilder {
    regex: Option<Regex>,
}

impl MatchIndexBuilder {
    /// Compile `pattern` with `options`.
    ///
    /// A blank pattern produces a builder that never matches.
    pub fn new(pattern: &str, options: &SearchOptions) -> Result<Self> {
        Ok(Self {
            regex: pattern::compile(pattern, options)?,
        })
    }

    /// Whether this builder can never produce a match.
    pub fn is_inert(&self) -> bool {
        self.regex.is_none()
    }

    /// Scan the concatenated text of one page.
    ///
    /// Matches never overlap; zero-length matches are skipped since there
    /// is nothing to highlight.
    pub fn scan_page(&self, page_index: usize, text: &str) -> Vec<Match> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut scanned_bytes = 0;
        let mut scanned_chars = 0;

        for mat in regex.find_iter(text) {
            if mat.is_empty() {
                continue;
            }
            scanned_chars += text[scanned_bytes..mat.start()].chars().count();
            scanned_bytes = mat.start();

            matches.push(Match {
                page_index,
                offset: scanned_chars,
                len: mat.as_str().chars().count(),
            });
        }

        matches
    }

    /// Build the index over pages `1..=page_count`.
    ///
    /// `fetch_page_text` is awaited once per page, in order. An inert builder
    /// returns immediately without calling it.
    pub async fn build<F, Fut>(&self, page_count: usize, mut fetch_page_text: F) -> Result<Vec<Match>>
    where
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        if self.is_inert() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();

        for page in 1..=page_count {
            let text = fetch_page_text(page).await.inspect_err(|e| {
                log::warn!("Search aborted on page {}: {}", page, e);
            })?;
            let page_results = self.scan_page(page, &text);
            log::debug!("Page {}: {} matches", page, page_results.len());
            results.extend(page_results);
        }

        Ok(results)
    }
}

/// Compile `pattern` and build its match index in one step.
pub async fn build_index<F, Fut>(
    page_count: usize,
    pattern: &str,
    options: &SearchOptions,
    fetch_page_text: F,
) -> Result<Vec<Match>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    MatchIndexBuilder::new(pattern, options)?
        .build(page_count, fetch_page_text)
        .await
}
