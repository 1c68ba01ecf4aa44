use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortviz::{Algorithm, ArrayModel, CancelToken};

const MAX_VALUE: u32 = 500;

fn random_array(size: usize) -> ArrayModel {
    let mut array = ArrayModel::default();
    array.randomize_with(&mut StdRng::seed_from_u64(size as u64), size, MAX_VALUE);
    array
}

/// Engine overhead with a callback that only counts steps.
fn benchmark_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_run");
    let cancel = CancelToken::new();

    for size in [10, 80, 150] {
        let input = random_array(size);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &input, |b, input| {
                b.iter(|| {
                    let mut array = input.clone();
                    let mut steps = 0usize;
                    algorithm.run(&mut array, &cancel, |_| steps += 1);
                    black_box(steps)
                });
            });
        }
    }

    group.finish();
}

/// Cost of the snapshot copy the controller makes on every step.
fn benchmark_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_per_step");
    let cancel = CancelToken::new();
    let input = random_array(150);

    for algorithm in [Algorithm::Merge, Algorithm::Quick, Algorithm::Heap] {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut array = input.clone();
                let mut last = Vec::new();
                algorithm.run(&mut array, &cancel, |step| last = step.values.to_vec());
                black_box(last)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_algorithms, benchmark_snapshots);
criterion_main!(benches);
