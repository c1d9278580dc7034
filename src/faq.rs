use serde::{Deserialize, Serialize};

/// A stored question and the answer returned when a query matches it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl<Q, A> From<(Q, A)> for FaqEntry
where
    Q: Into<String>,
    A: Into<String>,
{
    fn from((question, answer): (Q, A)) -> Self {
        Self::new(question, answer)
    }
}

const COLLEGE_FAQ: &[(&str, &str)] = &[
    (
        "What courses are offered in the college?",
        "Our college offers Engineering, Arts, Science, and Management courses.",
    ),
    (
        "How can I apply for admission?",
        "You can apply online through the college official website or visit the admission office.",
    ),
    (
        "Is hostel facility available?",
        "Yes, hostel facilities are available for both boys and girls.",
    ),
    (
        "Does the college provide placement support?",
        "Yes, our college has an active placement cell that supports students.",
    ),
    (
        "What are the college working hours?",
        "The college works from 9:00 AM to 4:30 PM, Monday to Friday.",
    ),
    (
        "Is scholarship available?",
        "Yes, scholarships are available for merit and economically weaker students.",
    ),
];

/// The built-in six-entry college FAQ set, used when no FAQ file is given
pub fn college_faq() -> Vec<FaqEntry> {
    COLLEGE_FAQ.iter().copied().map(FaqEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn college_set_has_six_distinct_questions() {
        let faq = college_faq();
        assert_eq!(faq.len(), 6);
        let mut questions: Vec<&str> = faq.iter().map(|e| e.question.as_str()).collect();
        questions.sort_unstable();
        questions.dedup();
        assert_eq!(questions.len(), 6);
    }

    #[test]
    fn entry_from_tuple() {
        let entry = FaqEntry::from(("q?", String::from("a.")));
        assert_eq!(entry, FaqEntry::new("q?", "a."));
    }
}
