//! Performance benchmarks for waveform rendering

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wavetile::{PixelMode, find_grid, render};

fn bench_render_modes(c: &mut Criterion) {
    // Synthetic audio: 30 seconds of a 440 Hz sine at 44.1kHz
    let samples: Vec<f32> = (0..44100 * 30)
        .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin() * 0.5)
        .collect();

    for &mode in PixelMode::all() {
        c.bench_function(&format!("render_30s_{}", mode.name()), |b| {
            b.iter(|| {
                let _ = render(black_box(&samples), black_box(mode));
            });
        });
    }
}

fn bench_find_grid(c: &mut Criterion) {
    // A prime count is the worst case: the scan walks all the way down to 1.
    c.bench_function("find_grid_prime", |b| {
        b.iter(|| find_grid(black_box(15_485_863)));
    });

    c.bench_function("find_grid_composite", |b| {
        b.iter(|| find_grid(black_box(44100 * 30)));
    });
}

criterion_group!(benches, bench_render_modes, bench_find_grid);
criterion_main!(benches);
