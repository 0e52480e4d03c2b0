//! Current-match highlighting on the displayed page.
//!
//! The renderer recreates its marks every time it paints a page, so the
//! classification of marks is never stored: [`HighlightSynchronizer`]
//! re-derives it from the match list and the cursor each time it runs, and
//! running it twice gives the same result as running it once.

use crate::navigation::NavigationCursor;
use crate::search::Match;

/// How a mark should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkClass {
    /// The active match
    Current,
    /// Any other match on the page
    Other,
}

/// A visual highlight produced by the renderer, one per occurrence on the
/// displayed page, in document order.
pub trait Mark {
    /// Apply a display class.
    fn set_class(&mut self, class: MarkClass);
}

/// Scrolls an element into the visible area.
pub trait Viewport<M> {
    /// Bring `mark` into view, centered.
    fn scroll_into_view(&mut self, mark: &M);
}

/// Position of the active match among the matches on `displayed_page`.
///
/// `None` when there is no active match or it lives on another page.
pub fn current_mark_position(
    matches: &[Match],
    current_index: Option<usize>,
    displayed_page: usize,
) -> Option<usize> {
    let current_index = current_index?;
    if matches.get(current_index)?.page_index != displayed_page {
        return None;
    }
    matches
        .iter()
        .enumerate()
        .filter(|(_, m)| m.page_index == displayed_page)
        .position(|(index, _)| index == current_index)
}

/// Class for each of `mark_count` marks on `displayed_page`.
pub fn classify(
    mark_count: usize,
    matches: &[Match],
    current_index: Option<usize>,
    displayed_page: usize,
) -> Vec<MarkClass> {
    let current = current_mark_position(matches, current_index, displayed_page);
    (0..mark_count)
        .map(|index| {
            if Some(index) == current {
                MarkClass::Current
            } else {
                MarkClass::Other
            }
        })
        .collect()
}

/// Tags the marks of the displayed page and scrolls to the current one.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighlightSynchronizer;

impl HighlightSynchronizer {
    /// Create a synchronizer.
    pub fn new() -> Self {
        Self
    }

    /// Classify `marks` for `displayed_page` from the cursor state.
    ///
    /// Returns the position of the current mark if one was tagged.
    pub fn synchronize<M, V>(
        &self,
        marks: &mut [M],
        cursor: &NavigationCursor,
        displayed_page: usize,
        viewport: &mut V,
    ) -> Option<usize>
    where
        M: Mark,
        V: Viewport<M> + ?Sized,
    {
        let classes = classify(
            marks.len(),
            cursor.matches(),
            cursor.current_index(),
            displayed_page,
        );

        let mut current = None;
        for (index, (mark, class)) in marks.iter_mut().zip(classes).enumerate() {
            mark.set_class(class);
            if class == MarkClass::Current {
                current = Some(index);
            }
        }

        if let Some(index) = current {
            viewport.scroll_into_view(&marks[index]);
        }
        log::debug!(
            "Synchronized {} marks on page {}, current {:?}",
            marks.len(),
            displayed_page,
            current
        );
        current
    }
}
