//! Property-based tests using proptest.

use faq_matcher::{answer, build_index, college_faq, FaqEntry, FaqIndex, DEFAULT_FALLBACK};
use proptest::prelude::*;

/// Random lowercase words, with some college vocabulary mixed in.
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z]{1,8}").unwrap(),
        prop::sample::select(vec!["hostel", "college", "is", "available", "apply", "admission", "hours", "the"])
            .prop_map(str::to_string),
    ]
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..8).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<FaqEntry>> {
    prop::collection::vec(
        prop::collection::vec(word_strategy(), 1..6).prop_map(|words| words.join(" ")),
        1..8,
    )
    .prop_map(|questions| {
        questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| FaqEntry::new(q, format!("answer {i}")))
            .collect()
    })
}

fn college_index() -> FaqIndex {
    build_index(college_faq()).unwrap()
}

proptest! {
    #[test]
    fn answer_is_deterministic(query in query_strategy(), threshold in 0.0f64..=1.0) {
        let index = college_index();
        prop_assert_eq!(answer(&query, &index, threshold), answer(&query, &index, threshold));
    }

    #[test]
    fn shouting_does_not_change_the_answer(query in query_strategy(), threshold in 0.0f64..=1.0) {
        let index = college_index();
        let shouted = format!("{}?!", query.to_uppercase());
        prop_assert_eq!(answer(&query, &index, threshold), answer(&shouted, &index, threshold));
    }

    #[test]
    fn higher_threshold_never_revives_an_answer(query in query_strategy(), low in 0.0f64..=1.0, high in 0.0f64..=1.0) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let index = college_index();
        if answer(&query, &index, low) == DEFAULT_FALLBACK {
            prop_assert_eq!(answer(&query, &index, high), DEFAULT_FALLBACK);
        }
    }

    #[test]
    fn scores_stay_in_unit_interval(entries in corpus_strategy(), query in query_strategy()) {
        let index = build_index(entries).unwrap();
        let scores = index.similarities(&query);
        prop_assert_eq!(scores.len(), index.len());
        for s in scores {
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn question_matches_its_first_copy(entries in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let index = build_index(entries.clone()).unwrap();
        let i = pick.index(entries.len());
        let best = index.best_match(&entries[i].question);
        // the winner is the question itself or an earlier one scoring just as high
        prop_assert!(best.index <= i);
        prop_assert_eq!(best.score, 1.0);
    }
}
