//! IAI-Callgrind benchmark for OrderedSet construction.
//!
//! Measures instruction counts for absorbing vs strict construction.
//! Data sizes: 8 (inline storage), 64/512 (heap storage).

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use simple_set::{DuplicateValueError, OrderedSet};
use std::hint::black_box;

fn setup_distinct_vec_8() -> Vec<i32> {
    (0..8).collect()
}

fn setup_distinct_vec_64() -> Vec<i32> {
    (0..64).collect()
}

fn setup_distinct_vec_512() -> Vec<i32> {
    (0..512).collect()
}

// from_values benchmarks
#[library_benchmark]
#[bench::with_setup(setup_distinct_vec_8())]
fn from_values_8(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_values(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_distinct_vec_64())]
fn from_values_64(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_values(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_distinct_vec_512())]
fn from_values_512(elements: Vec<i32>) -> OrderedSet<i32> {
    black_box(OrderedSet::from_values(black_box(elements)))
}

// try_from_unique benchmarks
#[library_benchmark]
#[bench::with_setup(setup_distinct_vec_8())]
fn try_from_unique_8(elements: Vec<i32>) -> Result<OrderedSet<i32>, DuplicateValueError> {
    black_box(OrderedSet::try_from_unique(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_distinct_vec_64())]
fn try_from_unique_64(elements: Vec<i32>) -> Result<OrderedSet<i32>, DuplicateValueError> {
    black_box(OrderedSet::try_from_unique(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_distinct_vec_512())]
fn try_from_unique_512(elements: Vec<i32>) -> Result<OrderedSet<i32>, DuplicateValueError> {
    black_box(OrderedSet::try_from_unique(black_box(elements)))
}

library_benchmark_group!(
    name = ordered_set_construction_group;
    benchmarks =
        from_values_8, from_values_64, from_values_512,
        try_from_unique_8, try_from_unique_64, try_from_unique_512
);

main!(library_benchmark_groups = ordered_set_construction_group);
