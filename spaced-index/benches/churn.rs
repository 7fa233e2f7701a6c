use std::hint::black_box;

use criterion::{criterion_group, BatchSize, Criterion};
use rand::seq::SliceRandom;
use spaced_index::{handle::Handle, index::SpacedIndex};

const N: usize = 4096;

// two payload columns tracked by one index
struct System {
    index: SpacedIndex,
    names: Vec<&'static str>,
    values: Vec<usize>,
}

impl System {
    fn new(capacity: usize) -> Self {
        Self {
            index: SpacedIndex::with_capacity(capacity),
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    fn filled(handles: &mut Vec<Handle>) -> Self {
        let mut system = Self::new(N);
        handles.clear();
        handles.extend((0..N).map(|i| system.add("Benchmarking", i)));
        system
    }

    fn add(&mut self, name: &'static str, value: usize) -> Handle {
        self.names.push(name);
        self.values.push(value);
        self.index.add()
    }

    fn remove(&mut self, handle: Handle) {
        let slot = self.index.remove(handle);
        self.names.swap_remove(slot);
        self.values.swap_remove(slot);
    }

    fn clear(&mut self) {
        self.names.clear();
        self.values.clear();
        self.index.clear();
    }
}

fn add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add-4096");
    group.throughput(criterion::Throughput::Elements(N as u64));

    for capacity in [N, 0] {
        group.bench_function(format!("reused-cap-{capacity}"), |b| {
            let mut system = System::new(capacity);
            b.iter(|| {
                system.clear();
                for i in 0..N {
                    black_box(system.add("Benchmarking", i));
                }
            })
        });
    }

    for capacity in [1024, 0] {
        group.bench_function(format!("fresh-cap-{capacity}"), |b| {
            b.iter_batched(
                || System::new(capacity),
                |mut system| {
                    for i in 0..N {
                        black_box(system.add("Benchmarking", i));
                    }
                    system
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove-4096");
    group.throughput(criterion::Throughput::Elements(N as u64));

    group.bench_function("in-order", |b| {
        b.iter_batched(
            || {
                let mut handles = Vec::new();
                (System::filled(&mut handles), handles)
            },
            |(mut system, handles)| {
                for handle in handles {
                    system.remove(handle);
                }
                system
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("random", |b| {
        let mut rng = rand::rng();
        b.iter_batched(
            || {
                let mut handles = Vec::new();
                let system = System::filled(&mut handles);
                handles.shuffle(&mut rng);
                (system, handles)
            },
            |(mut system, handles)| {
                for handle in handles {
                    system.remove(handle);
                }
                system
            },
            BatchSize::SmallInput,
        )
    });
}

fn iterate(c: &mut Criterion) {
    let mut handles = Vec::new();
    let system = System::filled(&mut handles);

    c.benchmark_group("iterate-4096")
        .throughput(criterion::Throughput::Elements(N as u64))
        .bench_function("sum", |b| {
            b.iter(|| black_box(system.values.iter().sum::<usize>()))
        })
        .bench_function("sum-by-handle", |b| {
            b.iter(|| {
                black_box(
                    handles
                        .iter()
                        .map(|&h| system.values[system.index.slot(h)])
                        .sum::<usize>(),
                )
            })
        });
}

criterion_group! {
    bench_churn, add, remove, iterate
}

criterion::criterion_main! { bench_churn }
