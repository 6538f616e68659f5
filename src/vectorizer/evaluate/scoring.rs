use std::fmt::Debug;

use num::Num;
use rayon::prelude::*;

use crate::utils::math::vector::SparseVec;

/// Structure to store ranking results
pub struct Hits<K> {
    /// (Document key, Score)
    pub list: Vec<(K, f64)>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(vec: Vec<(K, f64)>) -> Self {
        Hits { list: vec }
    }

    /// Sort results by descending score.
    /// The sort is stable, so equal scores keep their insertion order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    /// Keep only the first `n` entries
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for (key, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", key, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

/// Cosine similarity of `query` against every document; keys are document positions.
/// Scores come back in document order.
pub fn cosine_scores<N>(query: &SparseVec<N>, documents: &[SparseVec<N>]) -> Hits<usize>
where
    N: Num + Copy + Into<f64> + Send + Sync,
{
    let list = documents
        .par_iter()
        .enumerate()
        .map(|(idx, doc)| (idx, query.cosine_similarity(doc)))
        .collect();
    Hits::new(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_document_order() {
        let mut hits = Hits::new(vec![(0, 0.5), (1, 0.9), (2, 0.5), (3, 0.0)]);
        hits.sort_by_score_desc();
        let keys: Vec<usize> = hits.list.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 0, 2, 3]);
    }

    #[test]
    fn nan_scores_are_dropped() {
        let mut hits = Hits::new(vec![(0, f64::NAN), (1, 0.1)]);
        hits.sort_by_score_desc();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn cosine_scores_preserve_order() {
        let docs = vec![
            SparseVec::<u32>::from_pairs(2, vec![(0, 1)]),
            SparseVec::from_pairs(2, vec![(1, 1)]),
        ];
        let query = SparseVec::from_pairs(2, vec![(1, 3)]);
        let hits = cosine_scores(&query, &docs);
        assert_eq!(hits.list, vec![(0, 0.0), (1, 1.0)]);
    }
}
