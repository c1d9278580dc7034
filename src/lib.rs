//! This crate answers free-text questions from a fixed FAQ set using TF-IDF
//! vectors and cosine similarity.

pub mod config;
pub mod error;
pub mod faq;
pub mod matcher;
pub mod utils;
pub mod vectorizer;

/// FAQ Index
/// The frozen vector space built from the FAQ questions.
///
/// Internally, it holds:
/// - The FAQ entries in their original order
/// - The vocabulary of normalized question terms
/// - The IDF vector
/// - One L2-normalized TF-IDF vector per question
///
/// `FaqIndex<N, E>` has the following generic parameters:
/// - `N`: weight type (f32, f64)
/// - `E`: TF-IDF calculation engine (e.g., SmoothIdfEngine)
///
/// Built once and never mutated; share it by reference between threads.
pub use vectorizer::{build_index, FaqIndex};

/// Query Matcher
/// Wraps a `FaqIndex` with a similarity threshold and a fallback message.
/// `answer` returns the stored answer of the closest question, or the
/// fallback when the best similarity is below the threshold.
///
/// The free function `answer` does the same with the default fallback.
pub use matcher::{answer, Decision, MatchConfig, Matcher, DEFAULT_FALLBACK, DEFAULT_THRESHOLD};

/// FAQ entries
/// `FaqEntry` is a question/answer pair; `college_faq` is the built-in set.
pub use faq::{college_faq, FaqEntry};

/// Configuration
/// TOML loader for an operator-supplied FAQ set.
pub use config::FaqConfig;

/// Errors
/// Only startup can fail: empty FAQ set, unreadable or malformed config,
/// out-of-range threshold.
pub use error::{FaqError, Result};

/// TF IDF Calculation Engine Trait
/// Plug a different weighting strategy into `FaqIndex<N, E>`.
/// - `SmoothIdfEngine`: idf = ln((1 + N) / (1 + df)) + 1 (default)
/// - `PlainIdfEngine`: idf = ln(N / df) + 1
pub use vectorizer::tfidf::{PlainIdfEngine, SmoothIdfEngine, TFIDFEngine};

/// Term frequency of one normalized text
pub use vectorizer::term::TermFrequency;

/// Best match of a query: entry index and cosine similarity
pub use vectorizer::evaluate::scoring::BestMatch;
