//! Encoding-layer throughput.
//!
//! Measures the per-write cost the verification driver pays:
//! 1. advancing a scalar through many generations
//! 2. building a wide tuple through the variant factory
//! 3. rendering the declaration prelude of a populated session

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use symvar::{EncodingContext, SymbolicVariable, Ty};

fn wide_tuple(n: usize) -> Ty {
    let components = (0..n)
        .map(|i| match i % 4 {
            0 => Some(Ty::uint(256)),
            1 => Some(Ty::Bool),
            2 => Some(Ty::Address),
            _ => None,
        })
        .collect();
    Ty::Tuple(components)
}

fn bench_advance(c: &mut Criterion) {
    c.bench_function("advance_1000", |b| {
        b.iter(|| {
            let mut ctx = EncodingContext::default();
            let mut x = SymbolicVariable::integer(Ty::uint(256), Ty::uint(256), "x", &mut ctx)
                .unwrap();
            for _ in 0..1000 {
                black_box(x.advance(&mut ctx).unwrap());
            }
        })
    });
}

fn bench_tuple(c: &mut Criterion) {
    let ty_16 = wide_tuple(16);
    let ty_128 = wide_tuple(128);

    let mut group = c.benchmark_group("tuple_build");
    group.bench_function("16_components", |b| {
        b.iter(|| {
            let mut ctx = EncodingContext::default();
            SymbolicVariable::tuple(black_box(ty_16.clone()), "t", &mut ctx).unwrap()
        })
    });
    group.bench_function("128_components", |b| {
        b.iter(|| {
            let mut ctx = EncodingContext::default();
            SymbolicVariable::tuple(black_box(ty_128.clone()), "t", &mut ctx).unwrap()
        })
    });
    group.finish();
}

fn bench_smtlib(c: &mut Criterion) {
    let mut ctx = EncodingContext::default();
    let t = SymbolicVariable::tuple(wide_tuple(64), "t", &mut ctx).unwrap();
    for component in t.components().unwrap().iter().flatten() {
        component.current_value(&mut ctx, None).unwrap();
    }
    c.bench_function("to_smtlib_48_symbols", |b| b.iter(|| black_box(ctx.to_smtlib())));
}

criterion_group!(benches, bench_advance, bench_tuple, bench_smtlib);
criterion_main!(benches);
