use indexmap::IndexMap;

use crate::utils::normalizer::normalized_tokens;

/// TermFrequency struct
/// Counts how many times each term appears in one piece of text
/// (a FAQ question or a user query).
/// Terms keep their order of first appearance.
///
/// # Examples
/// ```
/// use faq_matcher::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("hostel");
/// term_freq.add_term("fees");
/// term_freq.add_term("hostel");
///
/// assert_eq!(term_freq.term_count("hostel"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Normalize raw text and count its tokens
    pub fn from_text(text: &str) -> Self {
        let tokens = normalized_tokens(text);
        let mut tf = TermFrequency::new();
        tf.add_terms(&tokens);
        tf
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(terms);
        tf
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Iterate over terms and their counts in first-appearance order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Total number of terms (with repetition)
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Occurrence count of `term`, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Iterate over distinct terms
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(String::as_str)
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}
