use serde::Serialize;

use crate::classifier::clean::clean_resume;
use crate::config::{MAX_RATING, RESUME_KEYWORDS};

/// How a rating was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBreakdown {
    pub word_count: usize,
    pub keyword_hits: usize,
    pub rating: u8,
}

/// Heuristic rating of already cleaned text
pub fn rate_cleaned(cleaned: &str) -> RatingBreakdown {
    let word_count = cleaned.split_whitespace().count();
    // substring match: "projects" counts for "project"
    let keyword_hits = RESUME_KEYWORDS
        .iter()
        .filter(|kw| cleaned.contains(*kw))
        .count();

    let length_score: u8 = if word_count > 100 {
        2
    } else if word_count > 50 {
        1
    } else {
        0
    };
    let keyword_score: u8 = if keyword_hits >= 5 {
        3
    } else if keyword_hits >= 3 {
        2
    } else if keyword_hits >= 1 {
        1
    } else {
        0
    };

    RatingBreakdown {
        word_count,
        keyword_hits,
        rating: (length_score + keyword_score).min(MAX_RATING),
    }
}

/// Clean `text` and rate it from 0 to 5
pub fn rate_resume(text: &str) -> RatingBreakdown {
    rate_cleaned(&clean_resume(text))
}
