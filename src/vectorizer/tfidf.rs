use indexmap::IndexSet;
use num::{Float, NumCast};

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, term::TermFrequency}};

/// TF-IDF calculation engine
///
/// An engine decides the IDF weight of every vocabulary term and how a term
/// frequency is turned into a weighted vector. Plug another engine into
/// `FaqIndex<N, E>` to change the weighting scheme.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Build the IDF vector
    /// # Arguments
    /// * `corpus` - corpus of FAQ questions
    /// # Returns
    /// * `Vec<N>` - one weight per vocabulary index
    fn idf_vec(corpus: &Corpus) -> Vec<N>;

    /// Build the weighted, L2-normalized vector of one document or query
    /// weight = raw term count × idf, terms outside `vocab` are dropped.
    /// A document with no known term yields the zero vector.
    /// # Arguments
    /// * `freq` - term frequency of the text
    /// * `vocab` - frozen vocabulary
    /// * `idf` - IDF vector from `idf_vec`
    fn tf_vec(freq: &TermFrequency, vocab: &IndexSet<Box<str>>, idf: &[N]) -> ZeroSpVec<N> {
        let pairs = freq.iter().filter_map(|(term, count)| {
            let idx = vocab.get_index_of(term)?;
            let weight = idf.get(idx).copied()?;
            Some((idx, cast::<N>(count as f64) * weight))
        });
        let mut vec = ZeroSpVec::from_pairs(vocab.len(), pairs);
        vec.l2_normalize();
        vec
    }
}

#[inline]
fn cast<N: Float>(v: f64) -> N {
    <N as NumCast>::from(v).unwrap_or_else(N::zero)
}

/// Default TF-IDF engine
/// smoothed IDF: idf = ln((1 + N) / (1 + df)) + 1
/// Works as if one extra document contained every term once, so no
/// weight is ever zero or infinite.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothIdfEngine;

impl<N> TFIDFEngine<N> for SmoothIdfEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus) -> Vec<N> {
        let doc_num = corpus.get_doc_num() as f64;
        corpus
            .iter()
            .map(|(_, doc_freq)| cast(((1.0 + doc_num) / (1.0 + doc_freq as f64)).ln() + 1.0))
            .collect()
    }
}

/// Unsmoothed TF-IDF engine
/// idf = ln(N / df) + 1
/// Terms present in every question still get weight 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainIdfEngine;

impl<N> TFIDFEngine<N> for PlainIdfEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus) -> Vec<N> {
        let doc_num = corpus.get_doc_num() as f64;
        corpus
            .iter()
            .map(|(_, doc_freq)| cast((doc_num / (doc_freq as f64).max(1.0)).ln() + 1.0))
            .collect()
    }
}
