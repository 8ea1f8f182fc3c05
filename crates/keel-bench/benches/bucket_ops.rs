//! Criterion micro-benchmarks for bucket-array insert/remove churn.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keel_bench::{churn_ops, ChurnOp};
use keel_pool::{BucketArray, BucketLocator, FreeList};

const OPS: usize = 4096;
const SEED: u64 = 0xB0CE7;

/// Benchmark: sequential inserts across many buckets.
fn bench_bucket_insert(c: &mut Criterion) {
    c.bench_function("bucket_insert_4096", |b| {
        b.iter(|| {
            let mut buckets: BucketArray<u64> = BucketArray::new(64);
            for i in 0..OPS as u64 {
                black_box(buckets.insert(i).unwrap());
            }
        });
    });
}

/// Benchmark: mixed churn at ~60% inserts, locators resolved each op.
fn bench_bucket_churn(c: &mut Criterion) {
    let ops = churn_ops(OPS, 600, SEED);
    c.bench_function("bucket_churn_60_40", |b| {
        b.iter(|| {
            let mut buckets: BucketArray<u64> = BucketArray::new(64);
            let mut live: Vec<(BucketLocator, u64)> = Vec::new();
            for &op in &ops {
                match op {
                    ChurnOp::Insert(value) => {
                        live.push((buckets.insert(value).unwrap(), value));
                    }
                    ChurnOp::Remove(pick) => {
                        if !live.is_empty() {
                            let (locator, _) = live.swap_remove(pick % live.len());
                            black_box(buckets.remove(locator));
                        }
                    }
                }
            }
            black_box(buckets.len());
        });
    });
}

/// Benchmark: locator lookups on a populated bucket array.
fn bench_bucket_lookup(c: &mut Criterion) {
    let mut buckets: BucketArray<u64> = BucketArray::new(64);
    let locators: Vec<BucketLocator> = (0..OPS as u64)
        .map(|i| buckets.insert(i).unwrap())
        .collect();
    c.bench_function("bucket_lookup_4096", |b| {
        b.iter(|| {
            for &locator in &locators {
                black_box(buckets[locator]);
            }
        });
    });
}

/// Benchmark: free-list allocate/release cycle at full occupancy swing.
fn bench_free_list_cycle(c: &mut Criterion) {
    let mut pool = FreeList::new(64, 256);
    c.bench_function("free_list_fill_drain_256", |b| {
        b.iter(|| {
            let slots: Vec<_> = (0..256).map(|_| pool.allocate(64).unwrap()).collect();
            for slot in slots {
                pool.release(slot);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_bucket_insert,
    bench_bucket_churn,
    bench_bucket_lookup,
    bench_free_list_cycle
);
criterion_main!(benches);
