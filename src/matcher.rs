use num::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{FaqError, Result},
    faq::FaqEntry,
    vectorizer::{
        evaluate::scoring::BestMatch,
        tfidf::{SmoothIdfEngine, TFIDFEngine},
        FaqIndex,
    },
};

/// Similarity below which a query is considered not understood
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Returned when no FAQ entry is similar enough
pub const DEFAULT_FALLBACK: &str = "Sorry, I didn't understand that.";

/// Threshold decision parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub threshold: f64,
    pub fallback: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl MatchConfig {
    /// Default fallback with the given threshold
    ///
    /// # Errors
    /// `FaqError::InvalidThreshold` unless `threshold` is within [0, 1].
    pub fn new(threshold: f64) -> Result<Self> {
        let config = Self {
            threshold,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_finite() && (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(FaqError::InvalidThreshold(self.threshold))
        }
    }
}

/// Outcome of matching one query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// entry `index` scored at least the threshold
    Answered { index: usize, score: f64 },
    /// best score stayed below the threshold
    Fallback { best_score: f64 },
}

impl Decision {
    /// Threshold rule: strictly below the threshold falls back
    pub fn from_best(best: BestMatch, threshold: f64) -> Self {
        if best.score < threshold {
            Decision::Fallback { best_score: best.score }
        } else {
            Decision::Answered { index: best.index, score: best.score }
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Decision::Answered { .. })
    }

    pub fn score(&self) -> f64 {
        match *self {
            Decision::Answered { score, .. } => score,
            Decision::Fallback { best_score } => best_score,
        }
    }
}

/// Answers free-text questions from a frozen FAQ index
///
/// # Examples
/// ```
/// use faq_matcher::{college_faq, MatchConfig, Matcher};
///
/// let matcher: Matcher = Matcher::from_entries(college_faq(), MatchConfig::default()).unwrap();
/// assert_eq!(
///     matcher.answer("is a hostel available?"),
///     "Yes, hostel facilities are available for both boys and girls."
/// );
/// assert_eq!(matcher.answer("qqq"), "Sorry, I didn't understand that.");
/// ```
#[derive(Debug, Clone)]
pub struct Matcher<N = f64, E = SmoothIdfEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    index: FaqIndex<N, E>,
    config: MatchConfig,
}

impl<N, E> Matcher<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// # Errors
    /// `FaqError::InvalidThreshold` if the config does not validate.
    pub fn new(index: FaqIndex<N, E>, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { index, config })
    }

    /// Build the index and the matcher in one step
    ///
    /// # Errors
    /// `FaqError::EmptyCorpus` or `FaqError::InvalidThreshold`.
    pub fn from_entries<I>(entries: I, config: MatchConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<FaqEntry>,
    {
        config.validate()?;
        let index = FaqIndex::build(entries)?;
        Ok(Self { index, config })
    }

    /// Match a query and apply the threshold, without picking the text
    pub fn decide(&self, query: &str) -> Decision {
        let decision = Decision::from_best(self.index.best_match(query), self.config.threshold);
        debug!(query, ?decision, "matched query");
        decision
    }

    /// Stored answer of the closest entry, or the fallback message
    pub fn answer(&self, query: &str) -> &str {
        self.answer_for(self.decide(query))
    }

    /// Text that goes with a decision
    pub fn answer_for(&self, decision: Decision) -> &str {
        match decision {
            Decision::Answered { index, .. } => self
                .index
                .entry(index)
                .map(|entry| entry.answer.as_str())
                .unwrap_or(self.config.fallback.as_str()),
            Decision::Fallback { .. } => &self.config.fallback,
        }
    }

    pub fn index(&self) -> &FaqIndex<N, E> {
        &self.index
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

/// Answer one query against an index with the default fallback message
///
/// Never fails: an empty or unknown query scores 0 and falls back for any
/// positive threshold.
pub fn answer<N, E>(query: &str, index: &FaqIndex<N, E>, threshold: f64) -> String
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    match Decision::from_best(index.best_match(query), threshold) {
        Decision::Answered { index: i, .. } => index
            .entry(i)
            .map(|entry| entry.answer.clone())
            .unwrap_or_else(|| DEFAULT_FALLBACK.to_string()),
        Decision::Fallback { .. } => DEFAULT_FALLBACK.to_string(),
    }
}
