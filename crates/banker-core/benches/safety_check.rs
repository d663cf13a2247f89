use banker_core::{SafetyChecker, ScanOrder, SystemState};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// A chain where process `i` can only finish once `i + 1` has released its
/// holdings, so the forward sweep needs one round per process.
fn reverse_chain(n: usize) -> SystemState {
    let max = (0..n).map(|i| vec![(n - i + 1) as u64; 3]).collect();
    let allocated = (0..n).map(|_| vec![1; 3]).collect();
    SystemState::new(3, max, allocated, vec![1, 1, 1]).unwrap()
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("safety_check");
    for n in [10usize, 100, 1000] {
        let state = reverse_chain(n);
        for order in [ScanOrder::Continue, ScanOrder::Restart] {
            let checker = SafetyChecker::new(order);
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), n),
                &state,
                |b, s| b.iter(|| checker.check(black_box(s))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_check);
criterion_main!(benches);
