//! Benchmarks for digest rendering performance.
//!
//! Run with: cargo bench
//!
//! Summaries are generated flat (no line breaks) so every Q-section goes
//! through the reformatter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use paper_radar::{Paper, RenderOptions, ScoredPaper};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FRAGMENTS: &[&str] = &[
    "The model retrieves relevant passages",
    "**核心方法**：稀疏注意力",
    "- **Encoder**: shared weights",
    "- plain list item",
    "1. pretrain on web text",
    "$$L = \\sum_i x_i$$",
    "| Metric | Value |",
    "基于Transformer的长上下文推理",
    "&amp;quot;quoted&amp;quot; text",
    "### Notes",
];

/// Builds one flat summary with six Q-sections.
fn create_flat_summary(rng: &mut StdRng, fragments_per_section: usize) -> String {
    let mut summary = String::new();
    for q in 1..=6 {
        summary.push_str(&format!("Q{}: ", q));
        for _ in 0..fragments_per_section {
            summary.push_str(FRAGMENTS[rng.gen_range(0..FRAGMENTS.len())]);
            summary.push(' ');
        }
    }
    summary
}

fn create_papers(count: usize) -> Vec<ScoredPaper> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|i| {
            let paper = Paper::new(format!("2402.{:05}", i), format!("Benchmark paper {}", i))
                .with_url(format!("https://arxiv.org/abs/2402.{:05}", i))
                .with_summary(create_flat_summary(&mut rng, 12));
            ScoredPaper::new(paper, rng.gen_range(1..50)).with_topic("bench")
        })
        .collect()
}

/// Benchmark the flat-content reformatter on a single section.
fn bench_reformat(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let summary = create_flat_summary(&mut rng, 40);

    c.bench_function("reformat_flat_content", |b| {
        b.iter(|| paper_radar::reformat_flat_content(black_box(&summary)));
    });
}

/// Benchmark Markdown digest rendering.
fn bench_markdown_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_rendering");
    let date = paper_radar::parse_date("2026-02-26").unwrap();

    for paper_count in [1, 10, 50].iter() {
        let papers = create_papers(*paper_count);
        group.throughput(Throughput::Elements(*paper_count as u64));

        for (label, options) in [
            ("parallel", RenderOptions::default()),
            ("sequential", RenderOptions::default().sequential()),
        ] {
            group.bench_with_input(BenchmarkId::new(label, paper_count), &papers, |b, papers| {
                b.iter(|| paper_radar::render_markdown(date, black_box(papers), &options));
            });
        }
    }

    group.finish();
}

/// Benchmark HTML digest rendering.
fn bench_html_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_rendering");
    let date = paper_radar::parse_date("2026-02-26").unwrap();

    for paper_count in [1, 10, 50].iter() {
        let papers = create_papers(*paper_count);
        group.throughput(Throughput::Elements(*paper_count as u64));
        group.bench_with_input(
            BenchmarkId::new("papers", paper_count),
            &papers,
            |b, papers| {
                let options = RenderOptions::default();
                b.iter(|| paper_radar::render_html(date, black_box(papers), &options));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_reformat,
    bench_markdown_rendering,
    bench_html_rendering,
);
criterion_main!(benches);
