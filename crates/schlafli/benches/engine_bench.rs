//! Criterion microbenches for the engine hot paths.
//!
//! - symbol parse + validate over the discovery box,
//! - closed-form f-vectors for high-dimensional families,
//! - geometric incidence recovery for the 600-cell,
//! - lattice construction for mid-size solids,
//! - the default discovery sweep.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use schlafli::discover::{discover, DiscoveryConfig};
use schlafli::family::Exceptional4d;
use schlafli::geometry::{build_solid, exceptional_4d, hypercube};
use schlafli::lattice::build_lattice;
use schlafli::prelude::f_vector;
use schlafli::symbol::SchlafliSymbol;
use schlafli::validate::is_regular_polytope;

fn bench_symbols(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol");
    group.bench_function("parse_validate", |b| {
        b.iter(|| {
            let sym = SchlafliSymbol::parse("{3,3,5}").unwrap();
            is_regular_polytope(&sym)
        })
    });
    group.finish();
}

fn bench_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("counts");
    for d in [8usize, 12, 16] {
        let mut components = vec![3u32; d - 1];
        components[0] = 4;
        let sym = SchlafliSymbol::new(components).unwrap();
        group.bench_function(BenchmarkId::new("hypercube_f_vector", d), |b| {
            b.iter(|| f_vector(&sym).unwrap())
        });
    }
    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    group.sample_size(10);
    group.bench_function("six_hundred_cell", |b| {
        b.iter(|| exceptional_4d(Exceptional4d::SixHundredCell).unwrap())
    });
    group.bench_function("hypercube_8", |b| b.iter(|| hypercube(8).unwrap()));
    group.finish();
}

fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice");
    group.sample_size(20);
    let tesseract = build_solid(&SchlafliSymbol::parse("{4,3,3}").unwrap()).unwrap();
    group.bench_function("tesseract", |b| {
        b.iter(|| build_lattice(&tesseract).unwrap())
    });
    let simplex6 = build_solid(&SchlafliSymbol::parse("{3,3,3,3,3}").unwrap()).unwrap();
    group.bench_function("simplex_6d", |b| b.iter(|| build_lattice(&simplex6).unwrap()));
    group.finish();
}

fn bench_discover(c: &mut Criterion) {
    let mut group = c.benchmark_group("discover");
    group.bench_function("default_box", |b| {
        b.iter(|| discover(&DiscoveryConfig::default()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_symbols,
    bench_counts,
    bench_geometry,
    bench_lattice,
    bench_discover
);
criterion_main!(benches);
