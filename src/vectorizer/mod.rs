pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;

use std::collections::HashMap;

use indexmap::IndexSet;
use num::Float;
use tracing::{debug, warn};

use crate::{
    error::{FaqError, Result},
    faq::FaqEntry,
    utils::{math::vector::ZeroSpVec, normalizer::normalize},
    vectorizer::{corpus::Corpus, term::TermFrequency, tfidf::{SmoothIdfEngine, TFIDFEngine}},
};

/// Frozen TF-IDF index over a FAQ question set
///
/// Holds:
/// - the FAQ entries in their original order
/// - the vocabulary (term -> dimension index)
/// - the IDF vector
/// - one L2-normalized weighted vector per question (row `i` is entry `i`)
///
/// `FaqIndex<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine (default `SmoothIdfEngine`)
///
/// Nothing is mutated after `build`, so a shared reference can serve
/// queries from any number of threads.
#[derive(Debug, Clone)]
pub struct FaqIndex<N = f64, E = SmoothIdfEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    entries: Vec<FaqEntry>,
    vocab: IndexSet<Box<str>>,
    idf: Vec<N>,
    rows: Vec<ZeroSpVec<N>>,
    _marker: std::marker::PhantomData<E>,
}

impl<N, E> FaqIndex<N, E>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// Build the index from an ordered FAQ set
    ///
    /// # Errors
    /// `FaqError::EmptyCorpus` when `entries` yields nothing.
    pub fn build<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<FaqEntry>,
    {
        let entries: Vec<FaqEntry> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(FaqError::EmptyCorpus);
        }
        warn_on_suspicious_questions(&entries);

        let docs: Vec<TermFrequency> = entries
            .iter()
            .map(|entry| TermFrequency::from_text(&entry.question))
            .collect();
        let corpus = Corpus::from_documents(docs.iter());
        let vocab = corpus.vocabulary();
        let idf = E::idf_vec(&corpus);
        let rows = docs
            .iter()
            .map(|doc| E::tf_vec(doc, &vocab, &idf))
            .collect();

        debug!(entries = entries.len(), vocab_size = vocab.len(), "built FAQ index");
        Ok(Self {
            entries,
            vocab,
            idf,
            rows,
            _marker: std::marker::PhantomData,
        })
    }

    /// Project raw text into the frozen vector space
    /// Unknown terms are dropped; the result is L2-normalized, or zero if
    /// no term is in the vocabulary.
    pub fn project(&self, text: &str) -> ZeroSpVec<N> {
        E::tf_vec(&TermFrequency::from_text(text), &self.vocab, &self.idf)
    }

    /// number of FAQ entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// false for any built index
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Vocabulary terms in index order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocab.iter().map(|term| &**term)
    }

    /// Check if the normalized token exists in the vocabulary
    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.vocab.contains(token)
    }

    #[inline]
    pub fn idf(&self) -> &[N] {
        &self.idf
    }

    #[inline]
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    #[inline]
    pub fn entry(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    /// Question vector of entry `index`
    #[inline]
    pub fn row(&self, index: usize) -> Option<&ZeroSpVec<N>> {
        self.rows.get(index)
    }

    pub(crate) fn rows(&self) -> &[ZeroSpVec<N>] {
        &self.rows
    }
}

/// Duplicate questions leave every copy after the first unreachable,
/// questions without any token can never match. Both are operator data bugs.
fn warn_on_suspicious_questions(entries: &[FaqEntry]) {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let normalized = normalize(&entry.question);
        let key = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
        if key.is_empty() {
            warn!(index, question = %entry.question, "FAQ question has no searchable terms");
            continue;
        }
        if let Some(&first) = seen.get(&key) {
            warn!(index, first, question = %entry.question, "duplicate FAQ question; only the first answer is reachable");
        } else {
            seen.insert(key, index);
        }
    }
}

/// Build the default index (`f64` weights, smoothed IDF)
pub fn build_index<I>(entries: I) -> Result<FaqIndex>
where
    I: IntoIterator,
    I::Item: Into<FaqEntry>,
{
    FaqIndex::build(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{faq::college_faq, vectorizer::tfidf::PlainIdfEngine};

    #[test]
    fn empty_corpus_is_rejected() {
        let err = build_index(Vec::<FaqEntry>::new()).unwrap_err();
        assert!(matches!(err, FaqError::EmptyCorpus));
    }

    #[test]
    fn rows_line_up_with_entries() {
        let index = build_index(college_faq()).unwrap();
        assert_eq!(index.len(), 6);
        assert!(!index.is_empty());
        for i in 0..index.len() {
            let row = index.row(i).unwrap();
            assert_eq!(row.len(), index.vocab_size());
            assert!((row.norm() - 1.0).abs() < 1e-12);
        }
        assert!(index.row(6).is_none());
        assert_eq!(index.entry(2).unwrap().question, "Is hostel facility available?");
    }

    #[test]
    fn vocabulary_is_built_from_normalized_questions() {
        let index = build_index(college_faq()).unwrap();
        assert!(index.contains_token("hostel"));
        assert!(index.contains_token("available"));
        assert!(!index.contains_token("available?"));
        assert!(!index.contains_token("Hostel"));
        assert_eq!(index.idf().len(), index.vocab_size());
        assert_eq!(index.vocabulary().count(), index.vocab_size());
    }

    #[test]
    fn projection_of_a_question_equals_its_row() {
        let index = build_index(college_faq()).unwrap();
        for (i, entry) in index.entries().iter().enumerate() {
            assert_eq!(&index.project(&entry.question), index.row(i).unwrap());
        }
    }

    #[test]
    fn unknown_query_projects_to_zero() {
        let index = build_index(college_faq()).unwrap();
        assert!(index.project("xyz qqq").is_zero());
        assert!(index.project("").is_zero());
    }

    #[test]
    fn build_is_deterministic() {
        let a = build_index(college_faq()).unwrap();
        let b = build_index(college_faq()).unwrap();
        assert_eq!(a.idf(), b.idf());
        assert_eq!(a.vocabulary().collect::<Vec<_>>(), b.vocabulary().collect::<Vec<_>>());
    }

    #[test]
    fn alternative_engine_and_precision() {
        let index: FaqIndex<f32, PlainIdfEngine> = FaqIndex::build(college_faq()).unwrap();
        assert_eq!(index.len(), 6);
        assert!(index.project("hostel").nnz() == 1);
    }

    #[test]
    fn accepts_tuples() {
        let index = build_index([("Is parking free?", "Yes.")]).unwrap();
        assert_eq!(index.entry(0).unwrap().answer, "Yes.");
    }
}
