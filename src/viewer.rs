//! Document viewer orchestration.
//!
//! [`Viewer`] ties a [`DocumentSource`], the search session and an external
//! [`Renderer`]/[`Viewport`] pair together. Every change of page or session
//! re-renders the displayed page if needed and schedules a highlight sync
//! after the configured settle delay; a newer change cancels the pending
//! sync.
//!
//! All state sits behind `parking_lot` mutexes that are never held across an
//! `.await`, so several searches may be in flight from one task. Results of a
//! search are only applied if no newer search has been applied first.
//!
//! ## Example
//!
//! ```ignore
//! use pdf_seek::viewer::Viewer;
//! use pdf_seek::config::ViewerConfig;
//!
//! let viewer = Viewer::new(ViewerConfig::default(), renderer, viewport);
//! viewer.open_path("manual.txt").await?;
//! viewer.search("alpha").await?;
//! viewer.next_result();
//! println!("{}", viewer.controls().results_label);
//! ```

use crate::config::ViewerConfig;
use crate::debounce::Debouncer;
use crate::document::{DocumentSource, TextDocument};
use crate::error::{Error, Result};
use crate::extract;
use crate::highlight::{HighlightSynchronizer, Mark, Viewport};
use crate::navigation::Direction;
use crate::search::{build_index, HighlightTransform, Match};
use crate::session::SearchSession;
use parking_lot::Mutex;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Paints pages and owns the marks it produced for the last painted page.
pub trait Renderer: Send {
    /// Visual mark type.
    type Mark: Mark + Send;

    /// Paint `page`, passing every text fragment through `transform`.
    ///
    /// Marks of the previously painted page are discarded.
    fn render_page(&mut self, page: usize, transform: &HighlightTransform);

    /// Marks currently on screen, in document order.
    fn marks_mut(&mut self) -> &mut [Self::Mark];
}

/// Enabled state and labels of the user-facing controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlState {
    /// `"i of N results"` or `"No results"`
    pub results_label: String,
    /// `"Page p of N"`
    pub page_label: String,
    /// Previous-result action enabled
    pub can_previous_result: bool,
    /// Next-result action enabled
    pub can_next_result: bool,
    /// Previous-page action enabled
    pub can_previous_page: bool,
    /// Next-page action enabled
    pub can_next_page: bool,
    /// Search input usable (a document is loaded)
    pub can_search: bool,
    /// Persistent user-visible error message
    pub error: Option<String>,
}

struct ViewerState {
    document: Option<Arc<dyn DocumentSource>>,
    session: SearchSession,
    query: String,
    error: Option<String>,
}

impl ViewerState {
    fn empty() -> Self {
        Self {
            document: None,
            session: SearchSession::new(0),
            query: String::new(),
            error: None,
        }
    }
}

struct Display<R, V> {
    renderer: R,
    viewport: V,
    /// Page and query of the last render
    rendered: Option<(usize, String)>,
}

/// Search-and-navigate controller for one document at a time.
///
/// Methods that change the page or session debounce the highlight sync on
/// the current tokio runtime. Called outside a runtime, they sync at once.
pub struct Viewer<R, V>
where
    R: Renderer + 'static,
    V: Viewport<R::Mark> + Send + 'static,
{
    config: ViewerConfig,
    state: Arc<Mutex<ViewerState>>,
    display: Arc<Mutex<Display<R, V>>>,
    debouncer: Mutex<Debouncer>,
}

impl<R, V> Viewer<R, V>
where
    R: Renderer + 'static,
    V: Viewport<R::Mark> + Send + 'static,
{
    /// Create a viewer with no document loaded.
    pub fn new(config: ViewerConfig, renderer: R, viewport: V) -> Self {
        let debouncer = Debouncer::new(config.settle_delay());
        Self {
            config,
            state: Arc::new(Mutex::new(ViewerState::empty())),
            display: Arc::new(Mutex::new(Display {
                renderer,
                viewport,
                rendered: None,
            })),
            debouncer: Mutex::new(debouncer),
        }
    }

    /// Viewer configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────
    // Document lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Show `source`, starting on page 1 with an empty session.
    pub fn open(&self, source: Arc<dyn DocumentSource>) {
        let page_count = source.page_count();
        log::info!("Opened document with {} pages", page_count);
        {
            let mut state = self.state.lock();
            state.document = Some(source);
            state.session.reset(page_count);
            state.error = None;
        }
        self.display.lock().rendered = None;
        self.refresh();
    }

    /// Decode a plain-text document from bytes and show it.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<()> {
        match TextDocument::from_bytes(bytes) {
            Ok(doc) => {
                self.open(Arc::new(doc));
                Ok(())
            },
            Err(e) => Err(self.fail_load(e)),
        }
    }

    /// Read a plain-text document from disk and show it.
    pub async fn open_path(&self, path: impl AsRef<Path>) -> Result<()> {
        match TextDocument::open(path).await {
            Ok(doc) => {
                self.open(Arc::new(doc));
                Ok(())
            },
            Err(e) => Err(self.fail_load(e)),
        }
    }

    /// Drop the document and reset everything.
    pub fn close(&self) {
        self.debouncer.lock().cancel();
        {
            let mut state = self.state.lock();
            state.document = None;
            state.session.reset(0);
            state.query.clear();
            state.error = None;
        }
        self.display.lock().rendered = None;
    }

    fn fail_load(&self, err: Error) -> Error {
        log::warn!("Document load failed: {}", err);
        self.close();
        self.state.lock().error = Some(err.to_string());
        err
    }

    // ─────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────

    /// Update the search input text.
    ///
    /// The displayed page is re-highlighted for the new text; the match list
    /// only changes on [`Viewer::submit_search`].
    pub fn set_query(&self, text: &str) {
        self.state.lock().query = text.to_string();
        self.refresh();
    }

    /// Current search input text.
    pub fn query(&self) -> String {
        self.state.lock().query.clone()
    }

    /// Search for the current input text.
    pub async fn submit_search(&self) -> Result<usize> {
        let query = self.query();
        self.run_search(&query).await
    }

    /// Set the input text to `pattern` and search for it.
    ///
    /// Returns the number of matches this search found, even when a newer
    /// search made it stale and its results were dropped.
    pub async fn search(&self, pattern: &str) -> Result<usize> {
        self.state.lock().query = pattern.to_string();
        self.run_search(pattern).await
    }

    async fn run_search(&self, pattern: &str) -> Result<usize> {
        let (ticket, document) = {
            let mut state = self.state.lock();
            (state.session.begin(pattern), state.document.clone())
        };

        let Some(document) = document else {
            self.state.lock().session.complete(ticket, Vec::new());
            return Ok(0);
        };

        let separator = self.config.fragment_separator.clone();
        let outcome = build_index(
            document.page_count(),
            pattern,
            &self.config.search,
            |page| {
                let document = Arc::clone(&document);
                let separator = separator.clone();
                async move { extract::page_text(document.as_ref(), page, &separator).await }
            },
        )
        .await;

        let result = {
            let mut state = self.state.lock();
            match outcome {
                Ok(matches) => {
                    let count = matches.len();
                    if state.session.complete(ticket, matches) {
                        log::info!("Search for '{}' found {} matches", pattern, count);
                        state.error = None;
                    }
                    Ok(count)
                },
                Err(Error::InvalidPattern(reason)) => {
                    log::warn!("Invalid pattern '{}': {}", pattern, reason);
                    state.session.complete(ticket, Vec::new());
                    Ok(0)
                },
                Err(e) => {
                    if state.session.fail(ticket) {
                        state.error = Some(e.to_string());
                    }
                    Err(e)
                },
            }
        };

        self.refresh();
        result
    }

    /// Drop the input text and all matches, keeping the page.
    pub fn clear_search(&self) {
        {
            let mut state = self.state.lock();
            state.query.clear();
            state.session.clear();
        }
        self.refresh();
    }

    /// Step to the next match, wrapping to the first.
    pub fn next_result(&self) -> Option<Match> {
        self.step(Direction::Forward)
    }

    /// Step to the previous match, wrapping to the last.
    pub fn previous_result(&self) -> Option<Match> {
        self.step(Direction::Backward)
    }

    fn step(&self, direction: Direction) -> Option<Match> {
        let target = self.state.lock().session.advance(direction).copied();
        if target.is_some() {
            self.refresh();
        }
        target
    }

    // ─────────────────────────────────────────────────────────────────────
    // Paging
    // ─────────────────────────────────────────────────────────────────────

    /// Show page `page`, clamped into the document.
    pub fn jump_to_page(&self, page: usize) -> usize {
        let page = self.state.lock().session.cursor_mut().jump_to_page(page);
        self.refresh();
        page
    }

    /// Show the next page, if any.
    pub fn next_page(&self) -> usize {
        let page = self.state.lock().session.cursor_mut().next_page();
        self.refresh();
        page
    }

    /// Show the previous page, if any.
    pub fn previous_page(&self) -> usize {
        let page = self.state.lock().session.cursor_mut().previous_page();
        self.refresh();
        page
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────────────────

    /// Labels and enabled state of the controls.
    pub fn controls(&self) -> ControlState {
        let state = self.state.lock();
        let cursor = state.session.cursor();
        ControlState {
            results_label: cursor.results_label(),
            page_label: cursor.page_label(),
            can_previous_result: cursor.has_matches(),
            can_next_result: cursor.has_matches(),
            can_previous_page: cursor.can_previous_page(),
            can_next_page: cursor.can_next_page(),
            can_search: state.document.is_some(),
            error: state.error.clone(),
        }
    }

    /// Inspect the search session.
    pub fn with_session<T>(&self, f: impl FnOnce(&SearchSession) -> T) -> T {
        f(&self.state.lock().session)
    }

    /// Inspect the renderer and viewport.
    pub fn with_display<T>(&self, f: impl FnOnce(&R, &V) -> T) -> T {
        let display = self.display.lock();
        f(&display.renderer, &display.viewport)
    }

    /// Displayed page number.
    pub fn current_page(&self) -> usize {
        self.state.lock().session.cursor().current_page()
    }

    /// Whether a highlight sync is scheduled but has not run.
    pub fn is_settling(&self) -> bool {
        self.debouncer.lock().is_pending()
    }

    /// Re-tag the marks right away, cancelling any pending sync.
    ///
    /// Returns the position of the current mark on the page.
    pub fn synchronize_now(&self) -> Option<usize> {
        self.debouncer.lock().cancel();
        synchronize(&self.state, &self.display)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    fn refresh(&self) {
        let (page, query) = {
            let state = self.state.lock();
            if state.session.cursor().page_count() == 0 {
                return;
            }
            (state.session.cursor().current_page(), state.query.clone())
        };

        {
            let mut display = self.display.lock();
            let key = (page, query);
            if display.rendered.as_ref() != Some(&key) {
                let transform = self.config.highlight_transform(&key.1);
                log::debug!("Rendering page {}", page);
                display.renderer.render_page(page, &transform);
                display.rendered = Some(key);
            }
        }

        let state = Arc::clone(&self.state);
        let display = Arc::clone(&self.display);
        self.debouncer.lock().schedule(move || {
            synchronize(&state, &display);
        });
    }
}

fn synchronize<R, V>(state: &Mutex<ViewerState>, display: &Mutex<Display<R, V>>) -> Option<usize>
where
    R: Renderer,
    V: Viewport<R::Mark>,
{
    let state = state.lock();
    let mut display = display.lock();
    let page = display.rendered.as_ref()?.0;
    let Display {
        renderer, viewport, ..
    } = &mut *display;
    HighlightSynchronizer::new().synchronize(
        renderer.marks_mut(),
        state.session.cursor(),
        page,
        viewport,
    )
}
