use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency struct
/// Manages the frequency of term occurrences in one document.
/// Terms keep their first-seen order.
///
/// # Examples
/// ```
/// use smart_lms::vectorizer::term::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// assert_eq!(term_freq.term_count("term1"), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
}

impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self
    }

    /// Occurrence count of a term, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Iterate over `(term, count)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Distinct terms
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(String::as_str).collect()
    }
}

impl<T: AsRef<str>> FromIterator<T> for TermFrequency {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = TermFrequency::new();
        for term in iter {
            freq.add_term(term.as_ref());
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_order() {
        let freq: TermFrequency = ["python", "sql", "python"].into_iter().collect();
        assert_eq!(freq.term_count("python"), 2);
        assert_eq!(freq.term_count("java"), 0);
        assert_eq!(freq.term_set_ref_str(), vec!["python", "sql"]);
    }
}
