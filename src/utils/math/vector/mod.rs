use std::cmp::Ordering;
use std::fmt::Debug;

use num::Float;

/// ZeroSpVec is a sparse vector that treats zero elements as absent
/// It holds indices and values
/// indices keep the position of each non-zero element,
/// values keep the element itself
///
/// Elements are guaranteed to be sorted by ascending index
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Float,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// Create an all-zero vector of dimension `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    /// Build from (index, value) pairs
    /// pairs may come in any order; zero values are skipped and
    /// repeated indices are summed
    pub fn from_pairs(len: usize, pairs: impl IntoIterator<Item = (usize, N)>) -> Self {
        let mut pairs: Vec<(usize, N)> = pairs
            .into_iter()
            .filter(|(idx, val)| *idx < len && !val.is_zero())
            .collect();
        pairs.sort_by_key(|(idx, _)| *idx);

        let mut vec = ZeroSpVec {
            inds: Vec::with_capacity(pairs.len()),
            vals: Vec::with_capacity(pairs.len()),
            len,
        };
        for (idx, val) in pairs {
            match vec.inds.last().copied() {
                Some(last) if last == idx => {
                    if let Some(v) = vec.vals.last_mut() {
                        *v = *v + val;
                    }
                }
                _ => {
                    vec.inds.push(idx);
                    vec.vals.push(val);
                }
            }
        }
        vec
    }

    /// dimension of the vector (including zero elements)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.vals.iter().all(|v| v.is_zero())
    }

    /// Get element at `index` (zero if absent)
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// iterate non-zero elements in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    /// dense copy
    pub fn to_dense(&self) -> Vec<N> {
        let mut dense = vec![N::zero(); self.len];
        for (idx, val) in self.raw_iter() {
            dense[idx] = val;
        }
        dense
    }

    /// Σ(a_i^2)
    #[inline]
    pub fn norm_sq(&self) -> N {
        self.vals.iter().fold(N::zero(), |acc, &v| acc + v * v)
    }

    /// ||a||
    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq().sqrt()
    }

    /// Scale in place so that ||a|| == 1
    /// the zero vector stays zero
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm.is_zero() || !norm.is_finite() {
            return;
        }
        for v in self.vals.iter_mut() {
            *v = *v / norm;
        }
    }

    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    pub fn dot(&self, other: &Self) -> N {
        debug_assert_eq!(self.len, other.len, "Vectors must be of the same length to compute dot product.");
        let mut result = N::zero();
        let (mut i, mut j) = (0, 0);
        while i < self.inds.len() && j < other.inds.len() {
            match self.inds[i].cmp(&other.inds[j]) {
                Ordering::Equal => {
                    result = result + self.vals[i] * other.vals[j];
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// returns 0 when either vector has zero norm
    ///
    /// The denominator is sqrt(Σa_i^2 * Σb_i^2) so that a vector compared
    /// with itself scores exactly 1.
    pub fn cosine_similarity(&self, other: &Self) -> N {
        let norm_a = self.norm_sq();
        let norm_b = other.norm_sq();
        if norm_a.is_zero() || norm_b.is_zero() {
            return N::zero();
        }
        self.dot(other) / (norm_a * norm_b).sqrt()
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Float + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .field("entries", &self.raw_iter().collect::<Vec<_>>())
                .finish()
        } else {
            f.debug_list().entries(self.to_dense()).finish()
        }
    }
}
