//! Search pattern compilation.
//!
//! The pattern a user types is compiled as a regular expression as-is unless
//! [`SearchOptions::literal`] is set, so `.` and `*` keep their regex meaning
//! by default.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Options for text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Case insensitive search
    pub case_insensitive: bool,
    /// Treat pattern as literal text (not regex)
    pub literal: bool,
    /// Match whole words only
    pub whole_word: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            literal: false,
            whole_word: false,
        }
    }
}

impl SearchOptions {
    /// Create new default search options (case-insensitive, pattern as typed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for an exact, case-sensitive literal search.
    pub fn exact() -> Self {
        Self {
            case_insensitive: false,
            literal: true,
            whole_word: false,
        }
    }

    /// Set case sensitivity.
    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Treat pattern as literal text (escape regex special characters).
    pub fn with_literal(mut self, value: bool) -> Self {
        self.literal = value;
        self
    }

    /// Match whole words only.
    pub fn with_whole_word(mut self, value: bool) -> Self {
        self.whole_word = value;
        self
    }
}

/// Whether a pattern is blank and must never match.
pub fn is_blank(pattern: &str) -> bool {
    pattern.trim().is_empty()
}

/// Build regex from pattern and options.
///
/// Returns `Ok(None)` for a blank pattern.
pub fn compile(pattern: &str, options: &SearchOptions) -> Result<Option<Regex>> {
    if is_blank(pattern) {
        return Ok(None);
    }

    let mut pattern_str = if options.literal {
        regex::escape(pattern)
    } else {
        pattern.to_string()
    };

    if options.whole_word {
        pattern_str = format!(r"\b(?:{})\b", pattern_str);
    }

    RegexBuilder::new(&pattern_str)
        .case_insensitive(options.case_insensitive)
        .build()
        .map(Some)
        .map_err(|e| Error::InvalidPattern(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(pattern: &str, options: &SearchOptions) -> Regex {
        compile(pattern, options).unwrap().unwrap()
    }

    #[test]
    fn test_search_options_default() {
        let opts = SearchOptions::default();
        assert!(opts.case_insensitive);
        assert!(!opts.literal);
        assert!(!opts.whole_word);
    }

    #[test]
    fn test_search_options_builder() {
        let opts = SearchOptions::new()
            .with_case_insensitive(false)
            .with_literal(true)
            .with_whole_word(true);

        assert!(!opts.case_insensitive);
        assert!(opts.literal);
        assert!(opts.whole_word);
    }

    #[test]
    fn test_blank_patterns() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
        assert!(compile("  ", &SearchOptions::default()).unwrap().is_none());
    }

    #[test]
    fn test_compile_case_insensitive_by_default() {
        let regex = compiled("hello", &SearchOptions::default());
        assert!(regex.is_match("hello world"));
        assert!(regex.is_match("HELLO world"));
        assert!(regex.is_match("HeLLo world"));
    }

    #[test]
    fn test_compile_exact() {
        let regex = compiled("a.b", &SearchOptions::exact());
        assert!(regex.is_match("a.b"));
        assert!(!regex.is_match("axb"));
        assert!(!regex.is_match("A.B"));
    }

    #[test]
    fn test_compile_keeps_regex_metacharacters() {
        let regex = compiled("a.b", &SearchOptions::default());
        assert!(regex.is_match("axb"));
    }

    #[test]
    fn test_compile_whole_word() {
        let regex = compiled("cat|dog", &SearchOptions::new().with_whole_word(true));
        assert!(regex.is_match("the cat sat"));
        assert!(regex.is_match("hot dog"));
        assert!(!regex.is_match("category"));
        assert!(!regex.is_match("dogma"));
    }

    #[test]
    fn test_compile_invalid_pattern() {
        let err = compile("(unclosed", &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }

    #[test]
    fn test_options_deserialize_partial() {
        let opts: SearchOptions = serde_json::from_str(r#"{"literal": true}"#).unwrap();
        assert!(opts.literal);
        assert!(opts.case_insensitive);
    }
}
