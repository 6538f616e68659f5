use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ENGLISH_STOP_WORDS;

/// Terms are runs of two or more word characters
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"))
}

/// Analyzer
/// Turns raw text into the term sequence fed to the vectorizers.
/// - lowercases the text
/// - extracts terms of two or more word characters
/// - optionally drops stop words
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analyzer {
    stop_words: HashSet<String>,
}

impl Analyzer {
    /// Analyzer without stop words
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer dropping the built-in English stop words
    pub fn english() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS)
    }

    pub fn with_stop_words<T: AsRef<str>>(words: &[T]) -> Self {
        Self {
            stop_words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Split `text` into terms
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        token_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|term| !self.stop_words.contains(*term))
            .map(str::to_string)
            .collect()
    }
}
