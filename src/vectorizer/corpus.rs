use indexmap::{IndexMap, IndexSet};

use crate::vectorizer::term::TermFrequency;

/// Document statistics of the FAQ question set
/// It does not keep question text; it only manages:
/// - the number of documents (questions)
/// - the number of documents each term appears in
///
/// The key order of `term_counts` is the vocabulary order:
/// terms get their index when first seen and keep it.
/// Built once from the FAQ questions and never updated from queries.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// term -> document frequency
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Build from a list of per-document term frequencies
    pub fn from_documents<'a>(docs: impl IntoIterator<Item = &'a TermFrequency>) -> Self {
        let mut corpus = Self::new();
        for doc in docs {
            corpus.add_doc(doc);
        }
        corpus
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_doc(&mut self, doc: &TermFrequency) {
        self.doc_num += 1;
        for term in doc.term_set_iter() {
            self.term_counts
                .entry(term.into())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term (0 if unknown)
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Vocabulary index of a term
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.term_counts.get_index_of(term)
    }

    /// Iterate over (term, document frequency) in vocabulary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, &count)| (&**term, count))
    }

    /// Freeze the vocabulary into an ordered set
    pub fn vocabulary(&self) -> IndexSet<Box<str>> {
        self.term_counts.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> TermFrequency {
        TermFrequency::from_text(text)
    }

    #[test]
    fn document_frequency_counts_each_document_once() {
        let docs = [doc("is hostel hostel available"), doc("is scholarship available")];
        let corpus = Corpus::from_documents(docs.iter());
        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_term_count("hostel"), 1);
        assert_eq!(corpus.get_term_count("available"), 2);
        assert_eq!(corpus.get_term_count("missing"), 0);
        assert_eq!(corpus.vocab_size(), 4);
    }

    #[test]
    fn vocabulary_indices_follow_first_appearance() {
        let docs = [doc("b a"), doc("c a d")];
        let corpus = Corpus::from_documents(docs.iter());
        let vocab: Vec<&str> = corpus.iter().map(|(t, _)| t).collect();
        assert_eq!(vocab, vec!["b", "a", "c", "d"]);
        assert_eq!(corpus.term_index("c"), Some(2));
        assert_eq!(corpus.term_index("z"), None);
        assert_eq!(corpus.vocabulary().get_index_of("d"), Some(3));
    }
}
