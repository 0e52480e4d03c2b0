//! Paged document sources.
//!
//! A [`DocumentSource`] knows how many pages it has and can produce, for a
//! 1-based page number, the ordered text fragments on that page. Fetching is
//! async since real sources decode pages lazily.
//!
//! [`TextDocument`] is the plain-text source shipped with the crate: pages
//! are separated by form feeds (`\x0C`) and every non-blank line is one
//! fragment.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::Path;

/// Page separator for plain-text documents.
pub const PAGE_BREAK: char = '\u{0C}';

/// A document that yields text fragments page by page.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text fragments of a page (1-indexed), in document order.
    async fn page_fragments(&self, page: usize) -> Result<Vec<String>>;
}

/// In-memory plain-text document.
///
/// # Example
///
/// ```no_run
/// use pdf_seek::document::{DocumentSource, TextDocument};
///
/// let doc = TextDocument::from_bytes(b"first page\x0Csecond page")?;
/// assert_eq!(doc.page_count(), 2);
/// # Ok::<(), pdf_seek::error::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    pages: Vec<Vec<String>>,
}

impl TextDocument {
    /// Build a document from already split pages.
    pub fn from_pages(pages: Vec<Vec<String>>) -> Self {
        Self { pages }
    }

    /// Decode UTF-8 bytes into pages of line fragments.
    ///
    /// Empty input is a document with zero pages. A trailing page break does
    /// not start a new page.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::DocumentLoad(format!("document is not valid UTF-8: {}", e)))?;

        if text.is_empty() {
            return Ok(Self::default());
        }

        let body = text.strip_suffix(PAGE_BREAK).unwrap_or(text);
        let pages: Vec<Vec<String>> = body
            .split(PAGE_BREAK)
            .map(|page| {
                page.lines()
                    .map(str::trim_end)
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .collect();

        log::info!("Loaded text document with {} pages", pages.len());
        Ok(Self { pages })
    }

    /// Read and decode a document from disk.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::DocumentLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(&bytes)
    }

    /// Fragments of a page without going through the async trait.
    pub fn page(&self, page: usize) -> Option<&[String]> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .map(Vec::as_slice)
    }
}

#[async_trait]
impl DocumentSource for TextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn page_fragments(&self, page: usize) -> Result<Vec<String>> {
        self.page(page)
            .map(<[String]>::to_vec)
            .ok_or(Error::PageOutOfRange {
                page,
                page_count: self.pages.len(),
            })
    }
}
