//! Push/pop throughput benchmarks
//!
//! Compares the built-in ordering rules against a closure comparator and
//! against `std::collections::BinaryHeap` as a baseline.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//! ```

use comparator_heap::binary_heap::BinaryHeapPriorityQueue;
use comparator_heap::compare::{NaturalOrder, OrderingRule, Signed};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Deterministic xorshift values so every run sees the same input
fn workload(n: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1_000_000) as i64
        })
        .collect()
}

fn push_then_drain<C>(values: &[i64], cmp: C) -> i64
where
    C: comparator_heap::Comparator<i64>,
{
    let mut queue = BinaryHeapPriorityQueue::with_capacity_and_comparator(values.len(), cmp);
    for &v in values {
        queue.push(v);
    }
    let mut checksum = 0i64;
    while let Some(v) = queue.dequeue() {
        checksum = checksum.wrapping_add(v);
    }
    checksum
}

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &size in &[1_000usize, 10_000, 100_000] {
        let values = workload(size, 0x9e37_79b9_7f4a_7c15);

        group.bench_with_input(BenchmarkId::new("natural_order", size), &values, |b, vs| {
            b.iter(|| black_box(push_then_drain(vs, NaturalOrder)))
        });
        group.bench_with_input(BenchmarkId::new("ordering_rule", size), &values, |b, vs| {
            b.iter(|| black_box(push_then_drain(vs, OrderingRule::Descending)))
        });
        group.bench_with_input(BenchmarkId::new("signed_closure", size), &values, |b, vs| {
            b.iter(|| black_box(push_then_drain(vs, Signed(|x: &i64, y: &i64| x - y))))
        });
        group.bench_with_input(BenchmarkId::new("std_binary_heap", size), &values, |b, vs| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(vs.len());
                for &v in vs.iter() {
                    heap.push(Reverse(v));
                }
                let mut checksum = 0i64;
                while let Some(Reverse(v)) = heap.pop() {
                    checksum = checksum.wrapping_add(v);
                }
                black_box(checksum)
            })
        });
    }

    group.finish();
}

fn benchmark_bulk_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_build");

    for &size in &[10_000usize, 100_000] {
        let values = workload(size, 0x2545_f491_4f6c_dd1d);

        group.bench_with_input(BenchmarkId::new("from_vec", size), &values, |b, vs| {
            b.iter(|| {
                let queue: BinaryHeapPriorityQueue<i64> = vs.clone().into();
                black_box(queue.peek().copied())
            })
        });
        group.bench_with_input(BenchmarkId::new("extend", size), &values, |b, vs| {
            b.iter(|| {
                let mut queue = BinaryHeapPriorityQueue::new();
                queue.extend(vs.iter().copied());
                black_box(queue.peek().copied())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_push_pop, benchmark_bulk_build);

criterion_main!(benches);
