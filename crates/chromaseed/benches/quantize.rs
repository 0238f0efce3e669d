use std::hint::black_box;

use chromaseed::quantize::{QuantizeOptions, Quantizer, QuantizerCelebi, QuantizerWu};
use chromaseed::score::{score, source_colors, ScoreOptions};
use chromaseed::{Argb, DynamicScheme, Variant};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Create a 128 by 128 image of blotches with some noise.
fn canvas() -> Vec<Argb> {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);
    let blotches: Vec<[u8; 3]> = (0..12).map(|_| rng.random()).collect();

    (0..128 * 128)
        .map(|index| {
            let [r, g, b] = blotches[(index / 128 / 32 * 4 + index % 128 / 32) % blotches.len()];
            let jitter = |c: u8, rng: &mut StdRng| c.saturating_add(rng.random_range(0..8));
            Argb::from_rgb(jitter(r, &mut rng), jitter(g, &mut rng), jitter(b, &mut rng))
        })
        .collect()
}

pub fn run_benchmarks(c: &mut Criterion) {
    let pixels = canvas();

    let mut group = c.benchmark_group("quantize");
    group.sample_size(20);

    group.bench_function("wu", |b| {
        b.iter_batched(
            || QuantizerWu,
            |mut quantizer| quantizer.quantize(black_box(&pixels), 128),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("celebi", |b| {
        b.iter_batched(
            QuantizerCelebi::new,
            |mut quantizer| quantizer.quantize(black_box(&pixels), 128),
            BatchSize::SmallInput,
        )
    });

    let result = QuantizerCelebi::new().quantize(&pixels, 128);
    group.bench_function("score", |b| {
        b.iter(|| score(black_box(&result), &ScoreOptions::default()))
    });

    group.bench_function("source-colors", |b| {
        b.iter(|| {
            source_colors(
                black_box(&pixels),
                &QuantizeOptions::for_source_colors(),
                &ScoreOptions::default(),
            )
        })
    });

    group.finish();

    let mut group = c.benchmark_group("scheme");
    for variant in [Variant::TonalSpot, Variant::Content, Variant::Expressive] {
        group.bench_function(variant.name(), |b| {
            b.iter(|| DynamicScheme::new(black_box(Argb::new(0xff67_50a4)), variant, true, 0.5))
        });
    }
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
