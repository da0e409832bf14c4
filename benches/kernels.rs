// benches/kernels.rs
// Per-kernel timings at MINI and SMALL.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polybench::dataset::DatasetSize;
use polybench::kernels::STANDARD_SUITE;

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("polybench");
    group.sample_size(10);

    for size in [DatasetSize::Mini, DatasetSize::Small] {
        for (name, kernel) in STANDARD_SUITE.iter() {
            group.bench_with_input(BenchmarkId::new(*name, size), &size, |b, &size| {
                b.iter(|| kernel(size))
            });
        }
    }

    group.finish();
}

criterion_group!(kernel_benches, bench_kernels);
criterion_main!(kernel_benches);
