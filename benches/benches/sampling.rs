// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for expression evaluation and per-column curve sampling.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use plotline_curve::{BreakPolicy, CurveSampler};
use plotline_expr::Expression;
use plotline_view::{ViewTransform, Viewport};

const SOURCES: &[(&str, &str)] = &[
    ("poly", "x^3 - 2x^2 + x - 1"),
    ("trig", "sin(x) * cos(2x) + tan(x / 3)"),
    ("nested", "sqrt(abs(sin(x))) / (1 + exp(-x^2))"),
];

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/eval");
    for &(name, source) in SOURCES {
        let Ok(expr) = Expression::parse(source) else {
            panic!("benchmark expression `{source}` must parse");
        };
        group.bench_function(name, |b| {
            b.iter(|| expr.eval(black_box(1.25)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("expr/parse");
    for &(name, source) in SOURCES {
        group.bench_function(name, |b| {
            b.iter(|| Expression::parse(black_box(source)));
        });
    }
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let view = ViewTransform::new();
    let Ok(expr) = Expression::parse("sin(x) * cos(2x) + tan(x / 3)") else {
        panic!("benchmark expression must parse");
    };

    let mut group = c.benchmark_group("curve/sample");
    for width in [800_u32, 1920, 3840] {
        let viewport = Viewport::new(width, width * 9 / 16);

        group.bench_function(BenchmarkId::new("closure", width), |b| {
            let sampler = CurveSampler::default();
            let f = |x: f64| x * x - 3.0 * x + 1.0;
            b.iter(|| sampler.sample(&f, black_box(&view), &viewport));
        });

        group.bench_function(BenchmarkId::new("expression", width), |b| {
            let sampler = CurveSampler::default();
            let f = |x: f64| expr.eval(x);
            b.iter(|| sampler.sample(&f, black_box(&view), &viewport));
        });

        group.bench_function(BenchmarkId::new("expression_max_jump", width), |b| {
            let sampler = CurveSampler::new(BreakPolicy::MaxJump { pixels: 400.0 });
            let f = |x: f64| expr.eval(x);
            b.iter(|| sampler.sample(&f, black_box(&view), &viewport));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_eval, bench_sample);
criterion_main!(benches);
