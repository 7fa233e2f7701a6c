use std::hint::black_box;

use criterion::{criterion_group, Criterion};
use rand::Rng;
use spaced_index::{handle::Handle, indexed_vec::IndexedVec};

#[derive(Debug, Clone, Copy)]
enum Action {
    Insert(char),
    // position of the handle in the list of handles created so far
    Remove(usize),
    Access(usize),
    Iterate,
}

#[derive(Debug, Clone, Copy)]
enum ActionType {
    Insert,
    Remove,
    Access,
    Iterate,
}

#[derive(Clone, Copy)]
struct WorkloadConfig {
    inserts: usize,
    removals: usize,
    accesses: usize,
    iterations: usize,
}

fn make_workload(rng: &mut impl Rng, config: WorkloadConfig) -> Vec<Action> {
    assert!(config.removals <= config.inserts);

    let mut pool = Vec::new();
    pool.extend(std::iter::repeat_n(ActionType::Insert, config.inserts));
    pool.extend(std::iter::repeat_n(ActionType::Remove, config.removals));
    pool.extend(std::iter::repeat_n(ActionType::Access, config.accesses));
    pool.extend(std::iter::repeat_n(ActionType::Iterate, config.iterations));

    let mut workload = Vec::new();
    let mut inserts_left = config.inserts;
    let mut created = 0;
    let mut may_access = Vec::new();

    while !pool.is_empty() {
        let i = rng.random_range(0..pool.len());

        match pool[i] {
            ActionType::Insert => {
                let c = rng.random();
                inserts_left -= 1;
                may_access.push(created);
                created += 1;
                workload.push(Action::Insert(c));
            }
            ActionType::Remove | ActionType::Access if may_access.is_empty() => {
                // nothing will ever be accessible again, so drop this action
                if inserts_left == 0 {
                    pool.swap_remove(i);
                }
                continue;
            }
            ActionType::Remove => {
                let x = rng.random_range(0..may_access.len());
                workload.push(Action::Remove(may_access.swap_remove(x)));
            }
            ActionType::Access => {
                let x = rng.random_range(0..may_access.len());
                workload.push(Action::Access(may_access[x]));
            }
            ActionType::Iterate => workload.push(Action::Iterate),
        }

        pool.swap_remove(i);
    }

    let actions = config.inserts + config.removals + config.accesses + config.iterations;
    assert!(workload.len() <= actions);

    workload
}

fn run_workloads(c: &mut Criterion) {
    let mut bench_workload = move |name: &str, config: WorkloadConfig| {
        let workload = make_workload(&mut rand::rng(), config);

        c.benchmark_group(name)
            .throughput(criterion::Throughput::Elements(workload.len() as u64))
            .bench_function("indexed-vec", |b| {
                b.iter(|| run_workload_indexed_vec(&workload));
            })
            .bench_function("slab", |b| {
                b.iter(|| run_workload_slab(&workload));
            })
            .bench_function("dense-slotmap", |b| {
                b.iter(|| run_workload_slotmap(&workload));
            });
    };

    bench_workload(
        "insert-removal",
        WorkloadConfig {
            inserts: 1024,
            removals: 1024,
            accesses: 0,
            iterations: 0,
        },
    );

    bench_workload(
        "insert-heavy",
        WorkloadConfig {
            inserts: 1024,
            removals: 64,
            accesses: 64,
            iterations: 0,
        },
    );

    bench_workload(
        "read-heavy",
        WorkloadConfig {
            inserts: 1024,
            removals: 512,
            accesses: 1024,
            iterations: 0,
        },
    );

    bench_workload(
        "iterate-heavy",
        WorkloadConfig {
            inserts: 1024,
            removals: 512,
            accesses: 0,
            iterations: 64,
        },
    );
}

fn run_workload_indexed_vec(workload: &[Action]) {
    let mut vec = IndexedVec::new();
    let mut handles: Vec<Handle> = Vec::new();
    for &action in workload {
        match action {
            Action::Insert(c) => handles.push(vec.insert(c)),
            Action::Remove(key) => {
                vec.remove(handles[key]);
            }
            Action::Access(key) => {
                black_box(vec[handles[key]]);
            }
            Action::Iterate => {
                black_box(vec.values().iter().map(|&c| c as u32).sum::<u32>());
            }
        }
    }
}

fn run_workload_slab(workload: &[Action]) {
    let mut slab = slab::Slab::new();
    let mut handles = Vec::new();
    for &action in workload {
        match action {
            Action::Insert(c) => handles.push(slab.insert(c)),
            Action::Remove(key) => {
                slab.remove(handles[key]);
            }
            Action::Access(key) => {
                black_box(slab[handles[key]]);
            }
            Action::Iterate => {
                black_box(slab.iter().map(|(_, &c)| c as u32).sum::<u32>());
            }
        }
    }
}

fn run_workload_slotmap(workload: &[Action]) {
    let mut map = slotmap::DenseSlotMap::new();
    let mut handles = Vec::new();
    for &action in workload {
        match action {
            Action::Insert(c) => handles.push(map.insert(c)),
            Action::Remove(key) => {
                map.remove(handles[key]);
            }
            Action::Access(key) => {
                black_box(map[handles[key]]);
            }
            Action::Iterate => {
                black_box(map.values().map(|&c| c as u32).sum::<u32>());
            }
        }
    }
}

criterion_group! {
    bench_workloads, run_workloads
}

criterion::criterion_main! { bench_workloads }
