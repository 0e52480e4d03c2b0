// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::type_complexity)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Seek
//!
//! Search-and-navigation engine for paged, text-bearing documents.
//!
//! ## Core Features
//!
//! - **Match Index**: case-insensitive pattern search over every page, with
//!   matches ordered by page and then by character offset
//! - **Navigation Cursor**: cyclic stepping through matches, with the page
//!   following the active match, plus clamped manual paging
//! - **Highlight Sync**: re-derives which rendered mark is the current match
//!   after every render, and scrolls it into view
//! - **Search Sessions**: a newer search always wins over a slower older one
//! - **Render Settling**: highlight sync is debounced after page or session
//!   changes
//!
//! ## Architecture
//! - **Pluggable Design**: trait seams for the document source
//!   ([`document::DocumentSource`]), the renderer ([`viewer::Renderer`]) and
//!   the viewport ([`highlight::Viewport`])
//! - **Async**: page text is fetched through awaitable calls, one page at a
//!   time, on tokio
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_seek::document::{DocumentSource, TextDocument};
//! use pdf_seek::navigation::{Direction, NavigationCursor};
//! use pdf_seek::search::{build_index, SearchOptions};
//! use pdf_seek::extract;
//!
//! # async fn run() -> pdf_seek::Result<()> {
//! let doc = TextDocument::open("manual.txt").await?;
//! let matches = build_index(doc.page_count(), "alpha", &SearchOptions::default(), |page| {
//!     extract::page_text(&doc, page, " ")
//! })
//! .await?;
//!
//! let mut cursor = NavigationCursor::new(doc.page_count());
//! cursor.seed(matches);
//! cursor.advance(Direction::Forward);
//! println!("{} ({})", cursor.results_label(), cursor.page_label());
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Document access and text extraction
pub mod document;
pub mod extract;

// Text search
pub mod search;

// Navigation and session state
pub mod navigation;
pub mod session;

// Highlighting and render settling
pub mod debounce;
pub mod highlight;

// Viewer orchestration
pub mod viewer;

// Re-exports
pub use config::ViewerConfig;
pub use document::{DocumentSource, TextDocument};
pub use error::{Error, Result};
pub use highlight::{HighlightSynchronizer, Mark, MarkClass, Viewport};
pub use navigation::{Direction, NavigationCursor};
pub use search::{build_index, HighlightTransform, Match, MatchIndexBuilder, SearchOptions};
pub use session::{SearchSession, SearchTicket};
pub use viewer::{ControlState, Renderer, Viewer};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
