use std::cmp::Ordering;

use num::Num;

use super::SparseVec;

impl<N> SparseVec<N>
where
    N: Num + Copy + Into<f64>,
{
    /// Dot product
    /// d(a, b) = Σ(a_i * b_i)
    ///
    /// Walks both index lists in one merge pass.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = 0_f64;
        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    result += va.into() * vb.into();
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        result
    }

    /// Squared L2 norm
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.raw_iter()
            .map(|(_, v)| {
                let v: f64 = v.into();
                v * v
            })
            .sum()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// A zero vector on either side yields 0.0, never NaN.
    #[inline]
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            self.dot(other) / (norm_a * norm_b)
        }
    }

    /// Euclidean distance
    /// d(a, b) = sqrt(Σ((a_i - b_i)^2))
    #[inline]
    pub fn euclidean_distance(&self, other: &Self) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute euclidean distance."
        );

        let mut sum = 0_f64;
        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        loop {
            match (a_next, b_next) {
                (Some((ia, va)), Some((ib, vb))) => match ia.cmp(&ib) {
                    Ordering::Equal => {
                        let diff = va.into() - vb.into();
                        sum += diff * diff;
                        a_next = a_it.next();
                        b_next = b_it.next();
                    }
                    Ordering::Less => {
                        let v: f64 = va.into();
                        sum += v * v;
                        a_next = a_it.next();
                    }
                    Ordering::Greater => {
                        let v: f64 = vb.into();
                        sum += v * v;
                        b_next = b_it.next();
                    }
                },
                (Some((_, va)), None) => {
                    let v: f64 = va.into();
                    sum += v * v;
                    a_next = a_it.next();
                }
                (None, Some((_, vb))) => {
                    let v: f64 = vb.into();
                    sum += v * v;
                    b_next = b_it.next();
                }
                (None, None) => break,
            }
        }
        sum.sqrt()
    }

    /// Scale to unit L2 norm. Zero vectors are returned unchanged.
    pub fn l2_normalized(&self) -> SparseVec<f64> {
        let norm = self.norm();
        if norm == 0.0 {
            return self.map(|_, v| v.into());
        }
        self.map(|_, v| v.into() / norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(len: usize, pairs: &[(usize, u32)]) -> SparseVec<u32> {
        SparseVec::from_pairs(len, pairs.iter().copied())
    }

    #[test]
    fn dot_only_counts_shared_dimensions() {
        let a = counts(5, &[(0, 1), (2, 3), (4, 1)]);
        let b = counts(5, &[(1, 7), (2, 2), (4, 5)]);
        assert_eq!(a.dot(&b), 11.0);
    }

    #[test]
    fn cosine_of_parallel_vectors_is_one() {
        let a = counts(3, &[(0, 1), (2, 2)]);
        let b = counts(3, &[(0, 2), (2, 4)]);
        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_with_zero_vector_is_zero() {
        let a = counts(3, &[(0, 1)]);
        let zero = SparseVec::<u32>::new(3);
        assert_eq!(a.cosine_similarity(&zero), 0.0);
        assert_eq!(zero.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn euclidean_includes_unshared_dimensions() {
        let a = counts(4, &[(0, 3), (1, 1)]);
        let b = counts(4, &[(1, 1), (3, 4)]);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn l2_normalized_has_unit_norm() {
        let a = counts(4, &[(0, 3), (3, 4)]);
        let n = a.l2_normalized();
        assert!((n.norm() - 1.0).abs() < 1e-12);
        assert!((n.get(0) - 0.6).abs() < 1e-12);
    }
}
