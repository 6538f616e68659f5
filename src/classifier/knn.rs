use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};
use crate::utils::math::vector::SparseVec;

/// k-nearest-neighbour classifier over sparse TF-IDF vectors.
/// Uniform majority vote, Euclidean distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KNeighborsClassifier {
    k: usize,
    samples: Vec<SparseVec<f64>>,
    labels: Vec<usize>,
    n_classes: usize,
}

impl KNeighborsClassifier {
    /// Store the training set.
    /// Fails when there are fewer samples than neighbours to consult.
    pub fn fit(k: usize, samples: Vec<SparseVec<f64>>, labels: Vec<usize>) -> Result<Self> {
        debug_assert_eq!(samples.len(), labels.len());
        if k == 0 || samples.len() < k {
            return Err(RecommendError::ModelFit {
                samples: samples.len(),
                k,
            });
        }
        let n_classes = labels.iter().max().map_or(0, |m| m + 1);
        Ok(Self {
            k,
            samples,
            labels,
            n_classes,
        })
    }

    /// Training positions of the k nearest samples, closest first.
    /// Equal distances keep training order.
    pub fn kneighbors(&self, query: &SparseVec<f64>) -> Vec<usize> {
        let mut distances: Vec<(usize, f64)> = self
            .samples
            .par_iter()
            .enumerate()
            .map(|(idx, sample)| (idx, query.euclidean_distance(sample)))
            .collect();
        distances.sort_by(|a, b| a.1.total_cmp(&b.1));
        distances.into_iter().take(self.k).map(|(idx, _)| idx).collect()
    }

    /// Majority label among the k nearest samples; ties go to the smallest id
    pub fn predict(&self, query: &SparseVec<f64>) -> usize {
        let mut votes = vec![0usize; self.n_classes];
        for idx in self.kneighbors(query) {
            votes[self.labels[idx]] += 1;
        }
        votes
            .iter()
            .enumerate()
            .fold((0, 0), |best, (label, &count)| {
                if count > best.1 {
                    (label, count)
                } else {
                    best
                }
            })
            .0
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> SparseVec<f64> {
        SparseVec::from_pairs(2, vec![(0, x), (1, y)])
    }

    #[test]
    fn fit_needs_at_least_k_samples() {
        let err = KNeighborsClassifier::fit(5, vec![point(1.0, 0.0); 4], vec![0; 4]).unwrap_err();
        assert!(matches!(err, RecommendError::ModelFit { samples: 4, k: 5 }));
    }

    #[test]
    fn majority_of_nearest_wins() {
        let samples = vec![
            point(0.0, 1.0),
            point(0.1, 0.9),
            point(0.2, 0.9),
            point(1.0, 0.0),
            point(0.9, 0.1),
        ];
        let knn = KNeighborsClassifier::fit(3, samples, vec![0, 0, 0, 1, 1]).unwrap();
        assert_eq!(knn.predict(&point(0.0, 0.8)), 0);
        assert_eq!(knn.kneighbors(&point(1.0, 0.0))[0], 3);
    }

    #[test]
    fn vote_ties_go_to_smallest_label() {
        let samples = vec![point(1.0, 0.0), point(0.0, 1.0)];
        let knn = KNeighborsClassifier::fit(2, samples, vec![1, 0]).unwrap();
        assert_eq!(knn.predict(&point(1.0, 0.0)), 0);
    }
}
