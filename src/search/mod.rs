//! Text search across every page of a document.
//!
//! This module provides regex-based text search with character offsets for
//! each match. Supports:
//! - Multi-page search with page-then-offset ordering
//! - Case-insensitive search (the default)
//! - Regular expression patterns as typed, or literal text
//! - Match highlighting in rendered fragments
//!
//! ## Example
//!
//! ```ignore
//! use pdf_seek::document::TextDocument;
//! use pdf_seek::extract;
//! use pdf_seek::search::{build_index, SearchOptions};
//!
//! let doc = TextDocument::from_pages(vec![vec!["alpha beta".into()], vec!["gamma alpha".into()]]);
//! let matches = build_index(doc.page_count(), "alpha", &SearchOptions::default(), |page| {
//!     extract::page_text(&doc, page, " ")
//! })
//! .await?;
//!
//! for m in &matches {
//!     println!("page {} offset {}", m.page_index, m.offset);
//! }
//! ```

mod match_index;
mod pattern;
mod transform;

pub use match_index::{build_index, Match, MatchIndexBuilder};
pub use pattern::{compile, is_blank, SearchOptions};
pub use transform::{HighlightTransform, DEFAULT_MARK_CLOSE, DEFAULT_MARK_OPEN};
