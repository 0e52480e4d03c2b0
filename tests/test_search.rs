//! Tests for the match index and the navigation cursor over it.

use pdf_seek::document::{DocumentSource, TextDocument};
use pdf_seek::error::Error;
use pdf_seek::extract;
use pdf_seek::navigation::{Direction, NavigationCursor};
use pdf_seek::search::{build_index, Match, SearchOptions};
use std::io::Write;

/// Helper function to create the three-page document used across scenarios.
fn three_page_document() -> TextDocument {
    TextDocument::from_pages(vec![
        vec!["alpha beta".to_string()],
        vec!["gamma alpha".to_string()],
        vec!["delta".to_string()],
    ])
}

async fn search(doc: &TextDocument, pattern: &str, options: &SearchOptions) -> Vec<Match> {
    build_index(doc.page_count(), pattern, options, |page| {
        extract::page_text(doc, page, " ")
    })
    .await
    .expect("Search failed")
}

mod match_index {
    use super::*;

    #[tokio::test]
    async fn test_alpha_scenario() {
        let doc = three_page_document();
        let matches = search(&doc, "alpha", &SearchOptions::default()).await;

        let positions: Vec<(usize, usize)> =
            matches.iter().map(|m| (m.page_index, m.offset)).collect();
        assert_eq!(positions, vec![(1, 0), (2, 6)]);
    }

    #[tokio::test]
    async fn test_absent_pattern() {
        let doc = three_page_document();
        let matches = search(&doc, "zzz", &SearchOptions::default()).await;
        assert!(matches.is_empty());

        let mut cursor = NavigationCursor::new(doc.page_count());
        cursor.seed(matches);
        assert_eq!(cursor.results_label(), "No results");
        assert!(!cursor.has_matches());
    }

    #[tokio::test]
    async fn test_fragments_joined_with_space() {
        let doc = TextDocument::from_pages(vec![vec!["al".to_string(), "pha".to_string()]]);
        assert!(search(&doc, "alpha", &SearchOptions::default()).await.is_empty());

        let matches = search(&doc, "al pha", &SearchOptions::default()).await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].offset, 0);
    }

    #[tokio::test]
    async fn test_regex_semantics_by_default() {
        let doc = TextDocument::from_pages(vec![vec!["a.b axb".to_string()]]);

        let regex = search(&doc, "a.b", &SearchOptions::default()).await;
        assert_eq!(regex.len(), 2);

        let literal = search(&doc, "a.b", &SearchOptions::new().with_literal(true)).await;
        assert_eq!(literal.len(), 1);
        assert_eq!(literal[0].offset, 0);
    }

    #[tokio::test]
    async fn test_case_sensitive_option() {
        let doc = TextDocument::from_pages(vec![vec!["Hello hello HELLO".to_string()]]);

        let insensitive = search(&doc, "hello", &SearchOptions::default()).await;
        assert_eq!(insensitive.len(), 3);

        let sensitive =
            search(&doc, "hello", &SearchOptions::new().with_case_insensitive(false)).await;
        assert_eq!(sensitive.len(), 1);
        assert_eq!(sensitive[0].offset, 6);
    }

    #[tokio::test]
    async fn test_whole_word_option() {
        let doc = TextDocument::from_pages(vec![vec!["cat category concat cat".to_string()]]);
        let matches = search(&doc, "cat", &SearchOptions::new().with_whole_word(true)).await;
        let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
        assert_eq!(offsets, vec![0, 20]);
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_reported() {
        let doc = three_page_document();
        let result = build_index(doc.page_count(), "(", &SearchOptions::default(), |page| {
            extract::page_text(&doc, page, " ")
        })
        .await;
        assert!(matches!(result, Err(Error::InvalidPattern(_))));
    }

    #[tokio::test]
    async fn test_search_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "Item 1, Item 2\x0CItem 3\nand some text\x0C").expect("Failed to write");

        let doc = TextDocument::open(file.path()).await.expect("Failed to open document");
        assert_eq!(doc.page_count(), 2);

        let matches = search(&doc, r"Item \d", &SearchOptions::default()).await;
        let positions: Vec<(usize, usize)> =
            matches.iter().map(|m| (m.page_index, m.offset)).collect();
        assert_eq!(positions, vec![(1, 0), (1, 8), (2, 0)]);
    }
}

mod navigation {
    use super::*;

    #[tokio::test]
    async fn test_seed_and_advance_scenario() {
        let doc = three_page_document();
        let mut cursor = NavigationCursor::new(doc.page_count());
        cursor.seed(search(&doc, "alpha", &SearchOptions::default()).await);

        assert_eq!(cursor.current_page(), 1);
        assert_eq!(cursor.current_index(), Some(0));

        cursor.advance(Direction::Forward);
        assert_eq!(cursor.current_index(), Some(1));
        assert_eq!(cursor.current_page(), 2);

        cursor.advance(Direction::Forward);
        assert_eq!(cursor.current_index(), Some(0));
        assert_eq!(cursor.current_page(), 1);
    }

    #[tokio::test]
    async fn test_manual_jump_then_advance() {
        let doc = three_page_document();
        let mut cursor = NavigationCursor::new(doc.page_count());
        cursor.seed(search(&doc, "alpha", &SearchOptions::default()).await);
        let matches_before = cursor.matches().to_vec();

        cursor.jump_to_page(3);
        assert_eq!(cursor.current_page(), 3);
        assert_eq!(cursor.current_index(), Some(0));
        assert_eq!(cursor.matches(), matches_before.as_slice());

        cursor.advance(Direction::Forward);
        assert_eq!(cursor.current_page(), 2);
        assert_eq!(cursor.current_index(), Some(1));
    }
}
