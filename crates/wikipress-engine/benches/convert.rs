use criterion::{Criterion, criterion_group, criterion_main};
use wikipress_engine::{LinkResolver, convert, storage_to_markdown};

fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, `code` and [[Home]].\n\n- Bullet point\n1. Numbered\n\n| A | B |\n|---|---|\n| 1 | [x](https://x.test) |\n\n```rust\nfn example() {\n    println!(\"<hello>\");\n}\n```\n\n";
    base.repeat(size)
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    let links = LinkResolver::new("BENCH").with_link("Home", "1", "Home Page");

    group.bench_function("without_links", |b| {
        b.iter(|| convert(std::hint::black_box(&content), None));
    });
    group.bench_function("with_links", |b| {
        b.iter(|| convert(std::hint::black_box(&content), Some(&links)));
    });

    let storage = convert(&content, Some(&links));
    group.bench_function("storage_to_markdown", |b| {
        b.iter(|| storage_to_markdown(std::hint::black_box(&storage)));
    });

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
