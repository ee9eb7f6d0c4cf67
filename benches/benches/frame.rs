// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for grid planning and full frame rendering.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use plotline::PlotSession;
use plotline_axis::GridPlanner;
use plotline_render::RecordingSurface;
use plotline_view::{ViewTransform, Viewport};

fn bench_grid(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let planner = GridPlanner::default();

    let mut group = c.benchmark_group("axis/plan");
    for scale in [0.01_f64, 40.0, 12_345.0] {
        let mut view = ViewTransform::new();
        view.set_scale(scale);
        view.pan(kurbo::Vec2::new(333.0, -210.0));
        group.bench_function(BenchmarkId::from_parameter(scale), |b| {
            b.iter(|| planner.plan(black_box(&view), &viewport));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut session = PlotSession::default();
    session.resize(1920, 1080);
    session.set_expression("sin(x) / x + 0.1x");
    session.zoom_at(Point::new(700.0, 400.0), 1.7);

    let mut group = c.benchmark_group("session");
    group.bench_function("frame", |b| {
        b.iter(|| black_box(&session).frame());
    });
    group.bench_function("render_recording", |b| {
        let mut surface = RecordingSurface::new();
        b.iter(|| {
            surface.clear_events();
            session.render(&mut surface);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_grid, bench_render);
criterion_main!(benches);
