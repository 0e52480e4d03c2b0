//! Page text extraction.
//!
//! Joins the fragments of a page into the single string the match index
//! scans. Fragments are joined with a separator (a single space by default)
//! so that the end of one fragment never runs into the start of the next.

use crate::document::DocumentSource;
use crate::error::{Error, Result};

/// Default fragment separator.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Concatenate fragments with `separator` between each pair.
pub fn join_fragments<S: AsRef<str>>(fragments: &[S], separator: &str) -> String {
    let mut text = String::new();
    for (idx, fragment) in fragments.iter().enumerate() {
        if idx > 0 {
            text.push_str(separator);
        }
        text.push_str(fragment.as_ref());
    }
    text
}

/// Fetch one page from `source` and return its concatenated text.
///
/// Source errors other than an out-of-range page are reported as
/// [`Error::PageFetch`] for that page.
pub async fn page_text<D>(source: &D, page: usize, separator: &str) -> Result<String>
where
    D: DocumentSource + ?Sized,
{
    let fragments = source.page_fragments(page).await.map_err(|e| match e {
        Error::PageFetch { .. } | Error::PageOutOfRange { .. } => e,
        other => Error::PageFetch {
            page,
            reason: other.to_string(),
        },
    })?;
    Ok(join_fragments(&fragments, separator))
}
