//! Throughput benchmarks for tokenization and segmentation
//!
//! Run with: cargo bench --bench pipeline_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ssftok_core::{Input, SsfProcessor, Tokenizer};
use std::hint::black_box;

/// Generate a document of roughly `size` bytes
fn generate_text(base: &str, size: usize) -> String {
    let repeat_count = size / base.len() + 1;
    let mut text = base.repeat(repeat_count);
    let cut = (0..=size.min(text.len()))
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    text.truncate(cut);
    text
}

fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");
    let tokenizer = Tokenizer::new().unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text("राम ने कहा, \"don't worry\" 3.14 बार। ", size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("tokenize", size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)).len());
        });
    }

    group.finish();
}

fn bench_languages(c: &mut Criterion) {
    let mut group = c.benchmark_group("languages");

    let samples = [
        ("hi", "राम गया। श्याम आया।\n\"\n"),
        ("ur", "وہ آیا۔ کیا وہ گیا؟\n"),
        ("en", "Hello world. It's fine!\n)\n"),
    ];

    for (code, base) in samples {
        let processor = SsfProcessor::for_language(code).unwrap();
        let text = generate_text(base, 102_400);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("process", code), &text, |b, text| {
            b.iter(|| {
                processor
                    .process(Input::from_text(black_box(text.as_str())))
                    .unwrap()
                    .to_ssf()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenizer, bench_languages);
criterion_main!(benches);
