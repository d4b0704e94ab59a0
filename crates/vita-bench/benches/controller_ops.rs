//! Criterion micro-benchmarks for controller commands.
//!
//! Measures the locked path a presentation layer pays per command,
//! including notification hand-off to the dispatcher.

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use vita_core::Notification;
use vita_engine::{Controller, MaxGenerations, SimConfig};

fn controller() -> Controller {
    let config = SimConfig {
        width: 28,
        height: 28,
        max_generations: MaxGenerations::Unbounded,
        tick_interval: Duration::from_millis(1),
    };
    let observer = Arc::new(|n: &Notification| {
        black_box(n.generation);
    });
    let ctl = Controller::new(config, observer).unwrap();
    ctl.randomize(42, 0.35).unwrap();
    ctl
}

/// Benchmark: single_step including snapshot and notification.
fn bench_single_step(c: &mut Criterion) {
    let ctl = controller();

    c.bench_function("single_step_28x28", |b| {
        b.iter(|| black_box(ctl.single_step().unwrap()));
    });
}

/// Benchmark: toggle_cell round trip through the world lock.
fn bench_toggle_cell(c: &mut Criterion) {
    let ctl = controller();

    c.bench_function("toggle_cell", |b| {
        b.iter(|| black_box(ctl.toggle_cell(black_box(13), black_box(13)).unwrap()));
    });
}

criterion_group!(benches, bench_single_step, bench_toggle_cell);
criterion_main!(benches);
