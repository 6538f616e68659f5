pub mod math;

use std::fmt::Debug;

use num::Num;
use serde::{Deserialize, Serialize};

/// SparseVec is a sparse vector where zero elements are not stored.
/// It holds `inds` and `vals`:
/// - `inds` holds the dimension of each stored element
/// - `vals` holds the value of each stored element
///
/// Elements are guaranteed to be sorted by ascending dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVec<N>
where
    N: Num + Copy,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> SparseVec<N>
where
    N: Num + Copy,
{
    /// Create an empty vector of dimension `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        SparseVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, cap: usize) -> Self {
        SparseVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len,
        }
    }

    /// Build from unordered `(dimension, value)` pairs.
    /// Zero values are skipped, duplicate dimensions are summed.
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = pairs.into_iter().collect();
        pairs.sort_unstable_by_key(|(ind, _)| *ind);

        let mut vec = SparseVec::with_capacity(len, pairs.len());
        for (ind, val) in pairs {
            debug_assert!(ind < len, "dimension {ind} out of range {len}");
            match vec.inds.last() {
                Some(&last) if last == ind => {
                    if let Some(acc) = vec.vals.last_mut() {
                        *acc = *acc + val;
                    }
                }
                _ => vec.raw_push(ind, val),
            }
        }
        if vec.vals.iter().any(|v| v.is_zero()) {
            vec.drop_zeros();
        }
        vec
    }

    /// Push an element at a dimension greater than every stored one.
    /// Does not touch `len`.
    #[inline]
    fn raw_push(&mut self, index: usize, value: N) {
        debug_assert!(self.inds.last().map_or(true, |&last| last < index));
        self.inds.push(index);
        self.vals.push(value);
    }

    fn drop_zeros(&mut self) {
        let mut keep = 0;
        for i in 0..self.vals.len() {
            if !self.vals[i].is_zero() {
                self.inds[keep] = self.inds[i];
                self.vals[keep] = self.vals[i];
                keep += 1;
            }
        }
        self.inds.truncate(keep);
        self.vals.truncate(keep);
    }

    /// Dimension of the vector
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Value at `index`, zero if not stored
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// Iterate over stored `(dimension, value)` pairs in ascending order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    /// Apply `f` to every stored value, producing a vector of another numeric type
    pub fn map<R, F>(&self, mut f: F) -> SparseVec<R>
    where
        R: Num + Copy,
        F: FnMut(usize, N) -> R,
    {
        SparseVec::from_pairs(self.len, self.raw_iter().map(|(i, v)| (i, f(i, v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_sorts_merges_and_drops_zeros() {
        let v: SparseVec<u32> = SparseVec::from_pairs(6, vec![(4, 1), (1, 2), (4, 2), (3, 0)]);
        assert_eq!(v.len(), 6);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.raw_iter().collect::<Vec<_>>(), vec![(1, 2), (4, 3)]);
        assert_eq!(v.get(3), 0);
        assert_eq!(v.get(4), 3);
    }

    #[test]
    fn map_changes_value_type() {
        let v: SparseVec<u32> = SparseVec::from_pairs(3, vec![(0, 2), (2, 4)]);
        let f: SparseVec<f64> = v.map(|_, c| c as f64 / 2.0);
        assert_eq!(f.raw_iter().collect::<Vec<_>>(), vec![(0, 1.0), (2, 2.0)]);
    }
}
