use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::{parse, SparseMatrix};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> SparseMatrix {
    let entries: Vec<_> = (0..nnz)
        .map(|_| {
            (
                rng.gen_range(0..rows),
                rng.gen_range(0..cols),
                rng.gen_range(-1000..=1000),
            )
        })
        .collect();
    SparseMatrix::from_entries(rows, cols, entries).unwrap()
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("arithmetic");

    for &nnz in &[1_000usize, 10_000, 50_000] {
        let a = random_matrix(&mut rng, 2_000, 2_000, nnz);
        let b = random_matrix(&mut rng, 2_000, 2_000, nnz);

        group.bench_with_input(BenchmarkId::new("add", nnz), &nnz, |bench, _| {
            bench.iter(|| black_box(a.add(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("multiply", nnz), &nnz, |bench, _| {
            bench.iter(|| black_box(a.multiply(&b).unwrap()))
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let text = random_matrix(&mut rng, 10_000, 10_000, 100_000).to_text();

    c.bench_function("parse_100k", |bench| {
        bench.iter(|| black_box(parse(black_box(&text)).unwrap()))
    });
}

criterion_group!(benches, bench_arithmetic, bench_text);
criterion_main!(benches);
