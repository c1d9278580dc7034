use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faq_matcher::{answer, build_index, college_faq, FaqEntry};

fn synthetic_faq(n: usize) -> Vec<FaqEntry> {
    (0..n)
        .map(|i| {
            FaqEntry::new(
                format!("How do I request service number {i} for topic{} in area{}?", i % 17, i % 5),
                format!("Answer {i}"),
            )
        })
        .collect()
}

fn build_and_answer_benchmark(c: &mut Criterion) {
    let college = college_faq();
    c.bench_function("build_index_college", |b| {
        b.iter(|| build_index(black_box(college.clone())))
    });

    let index = build_index(college).expect("non-empty");
    c.bench_function("answer_college", |b| {
        b.iter(|| answer(black_box("how do I apply for admission"), &index, 0.2))
    });

    let large = build_index(synthetic_faq(200)).expect("non-empty");
    c.bench_function("answer_200_entries", |b| {
        b.iter(|| answer(black_box("request service number 42 topic8"), &large, 0.2))
    });
}

criterion_group!(benches, build_and_answer_benchmark);
criterion_main!(benches);
