use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// keep document count and per-term document frequency
/// It is the base data for IDF calculation.
/// Built once during fitting and only read afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// documents containing each term
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            *self.term_counts.entry(term.as_ref().into()).or_insert(0) += 1;
        }
    }

    /// Add a document from its term frequency
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.add_set(&freq.term_set_ref_str());
    }

    /// Get the number of documents in the corpus
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// All terms, alphabetically sorted
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.term_counts.keys().map(|t| &**t).collect();
        terms.sort_unstable();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_frequency_counts_each_document_once() {
        let mut corpus = Corpus::new();
        let a: TermFrequency = ["python", "python", "sql"].into_iter().collect();
        let b: TermFrequency = ["python", "java"].into_iter().collect();
        corpus.add_doc(&a);
        corpus.add_doc(&b);
        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_term_count("python"), 2);
        assert_eq!(corpus.get_term_count("sql"), 1);
        assert_eq!(corpus.sorted_terms(), vec!["java", "python", "sql"]);
    }
}
