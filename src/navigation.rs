//! Page and match navigation.
//!
//! [`NavigationCursor`] owns the displayed page number and the index of the
//! active match. Stepping through matches wraps around at both ends and always
//! moves the page to the match; manual paging moves the page only.

use crate::search::Match;

/// Direction to step through matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Next match, wrapping from the last to the first
    Forward,
    /// Previous match, wrapping from the first to the last
    Backward,
}

/// Cursor over a match list and the page range of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCursor {
    matches: Vec<Match>,
    current_index: Option<usize>,
    current_page: usize,
    page_count: usize,
}

impl NavigationCursor {
    /// Cursor for a document with `page_count` pages, on page 1 with no matches.
    pub fn new(page_count: usize) -> Self {
        Self {
            matches: Vec::new(),
            current_index: None,
            current_page: 1,
            page_count,
        }
    }

    /// Replace the match list and move to its first match.
    ///
    /// With no matches the active index is cleared and the page is left alone.
    pub fn seed(&mut self, matches: Vec<Match>) {
        self.matches = matches;
        match self.matches.first() {
            Some(first) => {
                self.current_index = Some(0);
                self.current_page = first.page_index;
            },
            None => self.current_index = None,
        }
        log::debug!(
            "Seeded cursor with {} matches, page {}",
            self.matches.len(),
            self.current_page
        );
    }

    /// Drop all matches, keeping the current page.
    pub fn clear(&mut self) {
        self.matches.clear();
        self.current_index = None;
    }

    /// Step to the next or previous match, wrapping around.
    ///
    /// Returns the new active match, or `None` when there are no matches.
    pub fn advance(&mut self, direction: Direction) -> Option<&Match> {
        let len = self.matches.len();
        if len == 0 {
            return None;
        }

        let next = match (direction, self.current_index) {
            (Direction::Forward, Some(index)) => (index + 1) % len,
            (Direction::Backward, Some(index)) => (index + len - 1) % len,
            (Direction::Forward, None) => 0,
            (Direction::Backward, None) => len - 1,
        };

        self.current_index = Some(next);
        self.current_page = self.matches[next].page_index;
        log::debug!("Match {} of {} on page {}", next + 1, len, self.current_page);
        self.matches.get(next)
    }

    /// Move to page `page`, clamped into the document.
    ///
    /// The match list and active index are untouched.
    pub fn jump_to_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.last_page());
        self.current_page
    }

    /// Move one page back, stopping at the first page.
    pub fn previous_page(&mut self) -> usize {
        self.jump_to_page(self.current_page.saturating_sub(1))
    }

    /// Move one page forward, stopping at the last page.
    pub fn next_page(&mut self) -> usize {
        self.jump_to_page(self.current_page + 1)
    }

    /// Whether a previous page exists.
    pub fn can_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    pub fn can_next_page(&self) -> bool {
        self.current_page < self.page_count
    }

    /// Whether stepping through matches does anything.
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// All matches, in page-then-offset order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Index of the active match.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The active match.
    pub fn current_match(&self) -> Option<&Match> {
        self.current_index.and_then(|index| self.matches.get(index))
    }

    /// Displayed page (1-indexed).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Results counter text: `"2 of 5 results"` or `"No results"`.
    pub fn results_label(&self) -> String {
        match self.current_index {
            Some(index) if !self.matches.is_empty() => {
                format!("{} of {} results", index + 1, self.matches.len())
            },
            _ => "No results".to_string(),
        }
    }

    /// Page indicator text: `"Page 2 of 7"`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.page_count)
    }

    fn last_page(&self) -> usize {
        self.page_count.max(1)
    }
}
