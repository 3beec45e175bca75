//! Benchmarks for per-block DVF application.
//!
//! Run:
//! - cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nearfield::core::util::white_noise;
use nearfield::{apply_dvf, interp_shelf_params, FilterState};

const FS: f32 = 48_000.0;
const BLOCK_LENS: [usize; 3] = [64, 256, 1024];

fn bench_apply_dvf(c: &mut Criterion) {
    let mut group = c.benchmark_group("dvf_block_noise");
    group.sample_size(50);

    for &block_len in &BLOCK_LENS {
        let input = white_noise(block_len, 1);
        let mut output = vec![0.0; block_len];
        let mut state = FilterState::default();

        let id = BenchmarkId::new("case", format!("b{block_len}"));
        group.bench_with_input(id, &input, |b, input| {
            b.iter(|| {
                apply_dvf(
                    black_box(72.5),
                    black_box(1.8),
                    input,
                    FS,
                    &mut state,
                    &mut output,
                );
                black_box(output[0]);
            })
        });
    }
    group.finish();
}

fn bench_param_update(c: &mut Criterion) {
    c.bench_function("interp_shelf_params", |b| {
        b.iter(|| interp_shelf_params(black_box(72.5), black_box(1.8)))
    });
}

criterion_group!(benches, bench_apply_dvf, bench_param_update);
criterion_main!(benches);
