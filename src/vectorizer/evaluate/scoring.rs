use num::Float;
use rayon::prelude::*;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{tfidf::TFIDFEngine, FaqIndex},
};

/// The closest FAQ entry for a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// position of the entry in the FAQ set
    pub index: usize,
    /// cosine similarity in [0, 1]
    pub score: f64,
}

impl<N, E> FaqIndex<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Cosine similarity of the query against every question, in corpus order
    pub fn similarities(&self, query: &str) -> Vec<f64> {
        let query = self.project(query);
        self.similarities_to(&query)
    }

    /// Cosine similarity of an already projected vector against every question
    /// A zero vector scores 0 everywhere. NaN never leaves this function.
    pub fn similarities_to(&self, query: &ZeroSpVec<N>) -> Vec<f64> {
        if query.is_zero() {
            return vec![0.0; self.len()];
        }
        self.rows()
            .par_iter()
            .map(|row| {
                let score = row.cosine_similarity(query).to_f64().unwrap_or(0.0);
                if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) }
            })
            .collect()
    }

    /// Closest question for the query
    /// Ties go to the lowest index; a query sharing no term with any
    /// question yields index 0 with score 0.
    pub fn best_match(&self, query: &str) -> BestMatch {
        first_max(&self.similarities(query))
    }
}

/// First-maximum scan over scores
pub fn first_max(scores: &[f64]) -> BestMatch {
    let mut best = BestMatch { index: 0, score: 0.0 };
    for (index, &score) in scores.iter().enumerate() {
        if index == 0 || score > best.score {
            best = BestMatch { index, score };
        }
    }
    best
}
