use std::hint::black_box;
use std::time::Duration;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ttlbuffer::buffer::{Buffer, BufferCore};
use ttlbuffer::clock::ManualClock;

const CAPACITY: usize = 1024;
const HOUR: Duration = Duration::from_secs(3600);

fn keys(n: usize, offset: usize) -> Vec<String> {
    (offset..offset + n).map(|i| format!("key_{i}")).collect()
}

fn filled_core(timeout: Duration) -> (BufferCore<String, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut core = BufferCore::with_clock(CAPACITY, timeout, clock.clone());
    for key in keys(CAPACITY, 0) {
        let _ = core.put(key);
    }
    (core, clock)
}

fn bench_put_get(c: &mut Criterion) {
    let fresh = keys(CAPACITY, 10_000);
    let warm = keys(CAPACITY, 0);
    c.bench_function("buffer_put_get", |b| {
        b.iter_batched(
            || filled_core(HOUR).0,
            |mut core| {
                for (new, old) in fresh.iter().zip(&warm) {
                    let _ = core.put(black_box(new.clone()));
                    let _ = black_box(core.get(black_box(old)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_eviction_churn(c: &mut Criterion) {
    let churn = keys(4 * CAPACITY, 10_000);
    c.bench_function("buffer_eviction_churn", |b| {
        b.iter_batched(
            || filled_core(HOUR).0,
            |mut core| {
                for key in &churn {
                    let _ = core.put(black_box(key.clone()));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_touch(c: &mut Criterion) {
    let warm = keys(CAPACITY, 0);
    c.bench_function("buffer_touch", |b| {
        b.iter_batched(
            || filled_core(HOUR).0,
            |mut core| {
                for key in &warm {
                    black_box(core.touch(black_box(key)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_full_sweep(c: &mut Criterion) {
    c.bench_function("buffer_full_sweep", |b| {
        b.iter_batched(
            || {
                let (core, clock) = filled_core(Duration::from_secs(1));
                clock.advance(Duration::from_secs(2));
                core
            },
            |mut core| black_box(core.purge_expired()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_shared_random_reads(c: &mut Criterion) {
    let buffer: Buffer<String> = Buffer::new(CAPACITY, HOUR);
    let warm = keys(CAPACITY, 0);
    for key in &warm {
        let _ = buffer.put(key.clone());
    }
    let mut rng = SmallRng::seed_from_u64(42);
    c.bench_function("buffer_shared_random_get", |b| {
        b.iter(|| {
            let key = &warm[rng.random_range(0..warm.len())];
            black_box(buffer.get(black_box(key)).ok())
        })
    });
}

criterion_group!(
    benches,
    bench_put_get,
    bench_eviction_churn,
    bench_touch,
    bench_full_sweep,
    bench_shared_random_reads
);
criterion_main!(benches);
