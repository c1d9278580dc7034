use faq_matcher::{answer, build_index, college_faq, FaqEntry, MatchConfig, Matcher};

fn main() {
    // build index from the built-in FAQ set
    let index = build_index(college_faq()).expect("built-in FAQ set is not empty");
    println!("indexed {} questions, {} terms", index.len(), index.vocab_size());

    for query in ["How do I apply for admission?", "hostel", "xyz completely unrelated gibberish qqq"] {
        let best = index.best_match(query);
        println!("{query:?} -> #{} ({:.3}): {}", best.index, best.score, answer(query, &index, 0.2));
    }

    // operator-supplied entries with a custom fallback
    let entries = vec![
        FaqEntry::new("Where is the library?", "Second floor of the main block."),
        FaqEntry::new("Is parking free?", "Yes, for students."),
    ];
    let config = MatchConfig::new(0.3)
        .expect("threshold in range")
        .with_fallback("Could you rephrase that?");
    let matcher: Matcher = Matcher::from_entries(entries, config).expect("non-empty FAQ set");
    println!("{}", matcher.answer("library location"));
    println!("{}", matcher.answer("cafeteria"));
}
