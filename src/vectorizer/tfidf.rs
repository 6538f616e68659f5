use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::math::vector::SparseVec;
use crate::vectorizer::{analyzer::Analyzer, corpus::Corpus, count::CountVectorizer};

/// TF-IDF calculation engine
/// Plug different weighting strategies into `TFIDFVectorizer<E>`.
pub trait TFIDFEngine {
    /// Generate the IDF vector
    /// # Arguments
    /// * `corpus` - fitted corpus
    /// * `terms` - vocabulary terms ordered by dimension
    fn idf_vec<'a>(corpus: &Corpus, terms: impl Iterator<Item = &'a str>) -> Vec<f64>;

    /// Weight a term-count vector with the IDF vector
    fn tf_idf_vec(counts: &SparseVec<u32>, idf: &[f64]) -> SparseVec<f64>;
}

/// Default TF-IDF engine
/// - tf: raw term count
/// - idf: smoothed `ln((1 + n) / (1 + df)) + 1`
/// - rows are L2 normalized
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    fn idf_vec<'a>(corpus: &Corpus, terms: impl Iterator<Item = &'a str>) -> Vec<f64> {
        let doc_num = corpus.get_doc_num() as f64;
        terms
            .map(|term| {
                let doc_freq = corpus.get_term_count(term) as f64;
                ((1.0 + doc_num) / (1.0 + doc_freq)).ln() + 1.0
            })
            .collect()
    }

    fn tf_idf_vec(counts: &SparseVec<u32>, idf: &[f64]) -> SparseVec<f64> {
        counts
            .map(|dim, count| count as f64 * idf.get(dim).copied().unwrap_or(0.0))
            .l2_normalized()
    }
}

/// TF-IDF Vectorizer
/// Fits a vocabulary and IDF weights once; `transform` never refits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TFIDFVectorizer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    count: CountVectorizer,
    /// IDF weight per vocabulary dimension
    idf_vec: Vec<f64>,
    #[serde(skip)]
    _marker: std::marker::PhantomData<E>,
}

impl<E> TFIDFVectorizer<E>
where
    E: TFIDFEngine,
{
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            count: CountVectorizer::with_analyzer(analyzer),
            idf_vec: Vec::new(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Learn vocabulary and IDF from `documents`
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let corpus = self.count.fit(documents);
        self.idf_vec = E::idf_vec(&corpus, self.count.terms());
        debug!(
            documents = corpus.get_doc_num(),
            vocabulary = self.idf_vec.len(),
            "fitted tf-idf vectorizer"
        );
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVec<f64>> {
        self.fit(documents);
        documents.iter().map(|doc| self.transform(doc.as_ref())).collect()
    }

    /// Embed `text` in the fitted space
    pub fn transform(&self, text: &str) -> SparseVec<f64> {
        E::tf_idf_vec(&self.count.transform(text), &self.idf_vec)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.count.vocabulary_size()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.count.dimension(term).map(|dim| self.idf_vec[dim])
    }
}
