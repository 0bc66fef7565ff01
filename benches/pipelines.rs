use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_record_processing::processing::{filter_project, tag_by_predicate, trim_lines};

fn records(n: usize) -> Vec<(String, i64)> {
    (0..n).map(|i| (format!("k{i}"), (i as i64 * 37) % 500)).collect()
}

fn bench_pipelines(c: &mut Criterion) {
    let rs = records(10_000);
    let lines: Vec<String> = (0..10_000).map(|i| format!("  line {i}  ")).collect();

    c.bench_function("filter_project_10k", |b| {
        b.iter(|| filter_project(black_box(&rs), |v| *v >= 100))
    });

    c.bench_function("tag_by_predicate_10k", |b| {
        b.iter(|| tag_by_predicate(black_box(&lines), |l| l.contains('7')))
    });

    c.bench_function("trim_lines_10k", |b| {
        b.iter(|| {
            trim_lines(black_box(&lines).iter().cloned().map(Ok::<_, ()>))
                .collect::<Result<Vec<_>, _>>()
        })
    });
}

criterion_group!(benches, bench_pipelines);
criterion_main!(benches);
