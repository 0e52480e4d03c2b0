//! Search session.
//!
//! A session is the submitted pattern, its matches and the navigation cursor.
//! Every submission takes a [`SearchTicket`]; results are applied only when
//! their ticket is newer than the last one applied, so a slow search that
//! finishes after a newer one is dropped.

use crate::navigation::{Direction, NavigationCursor};
use crate::search::{is_blank, Match};

/// Handle for one submitted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pattern: String,
}

impl SearchTicket {
    /// Pattern this ticket was issued for.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Submission order of this ticket (1 for the first search).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Current pattern, match list and cursor.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pattern: String,
    cursor: NavigationCursor,
    issued: u64,
    applied: u64,
}

impl SearchSession {
    /// Empty session for a document with `page_count` pages.
    pub fn new(page_count: usize) -> Self {
        Self {
            pattern: String::new(),
            cursor: NavigationCursor::new(page_count),
            issued: 0,
            applied: 0,
        }
    }

    /// Register a new search for `pattern`.
    pub fn begin(&mut self, pattern: &str) -> SearchTicket {
        self.issued += 1;
        SearchTicket {
            generation: self.issued,
            pattern: pattern.to_string(),
        }
    }

    /// Replace the session with the results of `ticket`.
    ///
    /// Returns `false` and leaves the session alone when a newer search has
    /// already been applied.
    pub fn complete(&mut self, ticket: SearchTicket, matches: Vec<Match>) -> bool {
        if !self.accepts(&ticket) {
            log::warn!(
                "Discarding stale results for '{}' (search {}, applied {})",
                ticket.pattern,
                ticket.generation,
                self.applied
            );
            return false;
        }

        self.applied = ticket.generation;
        let matches = if is_blank(&ticket.pattern) {
            Vec::new()
        } else {
            matches
        };
        self.pattern = ticket.pattern;
        self.cursor.seed(matches);
        true
    }

    /// Revert to an empty session after `ticket` failed.
    ///
    /// Ignored when a newer search has already been applied.
    pub fn fail(&mut self, ticket: SearchTicket) -> bool {
        if !self.accepts(&ticket) {
            return false;
        }
        self.applied = ticket.generation;
        self.pattern = ticket.pattern;
        self.cursor.clear();
        true
    }

    /// Drop the pattern and all matches, keeping the page.
    ///
    /// Searches still in flight are invalidated.
    pub fn clear(&mut self) {
        self.applied = self.issued;
        self.pattern.clear();
        self.cursor.clear();
    }

    /// Start over on a document with `page_count` pages.
    ///
    /// The ticket counter survives, so searches issued against the previous
    /// document can no longer be applied.
    pub fn reset(&mut self, page_count: usize) {
        self.applied = self.issued;
        self.pattern.clear();
        self.cursor = NavigationCursor::new(page_count);
    }

    /// Step through matches.
    pub fn advance(&mut self, direction: Direction) -> Option<&Match> {
        self.cursor.advance(direction)
    }

    /// Submitted pattern of the applied search.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Navigation cursor.
    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    /// Mutable navigation cursor, for manual paging.
    pub fn cursor_mut(&mut self) -> &mut NavigationCursor {
        &mut self.cursor
    }

    /// All matches of the applied search.
    pub fn matches(&self) -> &[Match] {
        self.cursor.matches()
    }

    /// Whether a submitted search has not been applied or superseded yet.
    pub fn is_searching(&self) -> bool {
        self.applied < self.issued
    }

    fn accepts(&self, ticket: &SearchTicket) -> bool {
        ticket.generation > self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(page_index: usize, offset: usize) -> Match {
        Match {
            page_index,
            offset,
            len: 1,
        }
    }

    #[test]
    fn test_complete_seeds_cursor() {
        let mut session = SearchSession::new(3);
        let ticket = session.begin("a");
        assert!(session.is_searching());
        assert!(session.complete(ticket, vec![m(2, 0), m(3, 1)]));

        assert!(!session.is_searching());
        assert_eq!(session.pattern(), "a");
        assert_eq!(session.cursor().current_index(), Some(0));
        assert_eq!(session.cursor().current_page(), 2);
    }

    #[test]
    fn test_new_search_replaces_matches() {
        let mut session = SearchSession::new(3);
        let first = session.begin("a");
        session.complete(first, vec![m(1, 0), m(2, 0), m(3, 0)]);
        session.advance(Direction::Forward);

        let second = session.begin("b");
        session.complete(second, vec![m(3, 4)]);
        assert_eq!(session.matches(), &[m(3, 4)]);
        assert_eq!(session.cursor().current_index(), Some(0));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut session = SearchSession::new(3);
        let slow = session.begin("slow");
        let fast = session.begin("fast");

        assert!(session.complete(fast, vec![m(2, 0)]));
        assert!(!session.complete(slow, vec![m(1, 0), m(3, 0)]));

        assert_eq!(session.pattern(), "fast");
        assert_eq!(session.matches(), &[m(2, 0)]);
    }

    #[test]
    fn test_older_result_applied_before_newer() {
        let mut session = SearchSession::new(3);
        let older = session.begin("older");
        let newer = session.begin("newer");

        assert!(session.complete(older, vec![m(1, 0)]));
        assert!(session.is_searching());
        assert!(session.complete(newer, vec![m(3, 0)]));
        assert_eq!(session.pattern(), "newer");
    }

    #[test]
    fn test_blank_pattern_clears_matches() {
        let mut session = SearchSession::new(3);
        let ticket = session.begin("   ");
        session.complete(ticket, vec![m(1, 0)]);
        assert!(session.matches().is_empty());
        assert_eq!(session.cursor().current_index(), None);
    }

    #[test]
    fn test_fail_reverts_to_empty() {
        let mut session = SearchSession::new(3);
        let first = session.begin("a");
        session.complete(first, vec![m(2, 0)]);

        let second = session.begin("a");
        assert!(session.fail(second));
        assert!(session.matches().is_empty());
        assert_eq!(session.cursor().current_index(), None);
        assert_eq!(session.cursor().current_page(), 2);
    }

    #[test]
    fn test_clear_invalidates_in_flight_search() {
        let mut session = SearchSession::new(3);
        let ticket = session.begin("a");
        session.clear();
        assert!(!session.complete(ticket, vec![m(1, 0)]));
        assert!(session.matches().is_empty());
        assert_eq!(session.pattern(), "");
    }

    #[test]
    fn test_reset_invalidates_searches_from_previous_document() {
        let mut session = SearchSession::new(4);
        let pending = session.begin("alpha");
        let failing = session.begin("beta");
        session.reset(1);

        assert!(!session.is_searching());
        assert!(!session.complete(pending, vec![m(4, 0)]));
        assert!(!session.fail(failing));
        assert!(session.matches().is_empty());
        assert_eq!(session.cursor().current_page(), 1);
        assert_eq!(session.cursor().page_count(), 1);

        let fresh = session.begin("alpha");
        assert_eq!(fresh.generation(), 3);
        assert!(session.complete(fresh, vec![m(1, 0)]));
    }
}
