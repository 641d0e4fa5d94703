//! Benchmarks for Gröbner basis computation.
//!
//! Tests performance of:
//! - the sequential Buchberger engine across a few classic systems
//! - the reducer (`rem`) against a settled basis
//! - the sequential vs. parallel backend on a pair-heavy system

use arith::Rational;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grobner::{groebner_basis, rem, Backend, GrobnerOptions, Monomial};
use monomial::GRevLex;
use poly::{Polynomial, Term};

fn poly(terms: Vec<(Vec<u32>, i64)>, num_vars: usize) -> Polynomial<Rational, GRevLex> {
    Polynomial::from_terms(
        terms
            .into_iter()
            .map(|(e, c)| Term::new(Monomial::new(e), Rational::new(c, 1)))
            .collect(),
        num_vars,
        GRevLex,
    )
}

fn cyclic_like_system(n: usize) -> Vec<Polynomial<Rational, GRevLex>> {
    // x_i * x_{i+1} for every adjacent pair — a scalable source of
    // product-criterion-triggering pairs, not the literal cyclic-n ideal.
    (0..n - 1)
        .map(|i| {
            let mut e = vec![0u32; n];
            e[i] = 1;
            e[i + 1] = 1;
            poly(vec![(e, 1)], n)
        })
        .collect()
}

pub fn bench_buchberger_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("buchberger_sequential");
    for &n in &[3usize, 4, 5, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let inputs = cyclic_like_system(n);
            b.iter(|| {
                let _basis = groebner_basis(black_box(inputs.clone()), n, GRevLex, &GrobnerOptions::default()).unwrap();
            });
        });
    }
    group.finish();
}

pub fn bench_buchberger_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("buchberger_parallel");
    for &n in &[4usize, 5, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let inputs = cyclic_like_system(n);
            let options = GrobnerOptions { backend: Backend::Parallel, threads: 4, ..GrobnerOptions::default() };
            b.iter(|| {
                let _basis = groebner_basis(black_box(inputs.clone()), n, GRevLex, &options).unwrap();
            });
        });
    }
    group.finish();
}

pub fn bench_rem_against_settled_basis(c: &mut Criterion) {
    c.bench_function("rem_against_5var_basis", |b| {
        let inputs = cyclic_like_system(5);
        let basis = groebner_basis(inputs, 5, GRevLex, &GrobnerOptions::default()).unwrap();
        let f = poly(vec![(vec![3, 2, 1, 0, 0], 1), (vec![0, 0, 0, 1, 1], -1)], 5);

        b.iter(|| {
            let _r = rem(black_box(&f), black_box(&basis), 5, &GRevLex);
        });
    });
}

criterion_group!(engine, bench_buchberger_sequential, bench_buchberger_parallel);
criterion_group!(reduction, bench_rem_against_settled_basis);
criterion_main!(engine, reduction);
