use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::math::vector::SparseVec;
use crate::vectorizer::{analyzer::Analyzer, corpus::Corpus, term::TermFrequency};

/// Bag-of-words vectorizer
/// Learns a vocabulary from a document collection and maps text to term-count vectors.
/// Vocabulary dimensions are assigned in alphabetical term order.
/// Terms unseen at fit time are dropped by `transform`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountVectorizer {
    analyzer: Analyzer,
    /// term -> dimension
    #[serde(with = "indexmap::map::serde_seq")]
    vocabulary: IndexMap<Box<str>, usize>,
}

impl CountVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            vocabulary: IndexMap::new(),
        }
    }

    /// Learn the vocabulary of `documents`, returning the corpus statistics of the fit
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Corpus {
        let mut corpus = Corpus::new();
        for doc in documents {
            let freq = self.term_frequency(doc.as_ref());
            corpus.add_doc(&freq);
        }
        self.vocabulary = corpus
            .sorted_terms()
            .into_iter()
            .enumerate()
            .map(|(dim, term)| (Box::<str>::from(term), dim))
            .collect();
        debug!(
            documents = documents.len(),
            vocabulary = self.vocabulary.len(),
            "fitted count vectorizer"
        );
        corpus
    }

    /// Fit then transform the same documents
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVec<u32>> {
        self.fit(documents);
        documents.iter().map(|doc| self.transform(doc.as_ref())).collect()
    }

    /// Term counts of `text` in the fitted vocabulary
    pub fn transform(&self, text: &str) -> SparseVec<u32> {
        let freq = self.term_frequency(text);
        self.transform_freq(&freq)
    }

    pub fn transform_freq(&self, freq: &TermFrequency) -> SparseVec<u32> {
        let pairs = freq.iter().filter_map(|(term, count)| {
            self.vocabulary
                .get(term)
                .map(|&dim| (dim, u32::try_from(count).unwrap_or(u32::MAX)))
        });
        SparseVec::from_pairs(self.vocabulary.len(), pairs)
    }

    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        self.analyzer.analyze(text).into_iter().collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Dimension of a term, if it is in the vocabulary
    pub fn dimension(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Terms ordered by dimension
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.keys().map(|t| &**t)
    }
}
