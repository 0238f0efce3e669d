use chromaseed::contrast::{darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones};
use chromaseed::conversion::lstar_from_argb;
use chromaseed::quantize::{QuantizeOptions, Quantizer, QuantizerCelebi};
use chromaseed::score::{score, source_colors, ScoreOptions, DEFAULT_FALLBACK};
use chromaseed::{Argb, Hct, TonalPalette};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_c010)
}

#[test]
fn white_image_falls_back() {
    let pixels = vec![Argb::WHITE; 128 * 128];
    let colors = source_colors(
        &pixels,
        &QuantizeOptions::for_source_colors(),
        &ScoreOptions::default(),
    );
    assert_eq!(colors, vec![DEFAULT_FALLBACK]);
}

#[test]
fn uniform_image_is_never_empty() {
    let mut rng = rng();
    for _ in 0..20 {
        let color = Argb::from_rgb(rng.random(), rng.random(), rng.random());
        let result = QuantizerCelebi::new().quantize(&vec![color; 400], 128);
        assert_eq!(result.len(), 1);
        assert_eq!(result.color_to_count.get(&color), Some(&400));
        assert!(!score(&result, &ScoreOptions::default()).is_empty());
    }
}

#[test]
fn quantization_is_deterministic_and_bounded() {
    let mut rng = rng();
    let pixels: Vec<Argb> = (0..64 * 64)
        .map(|_| Argb::from_rgb(rng.random(), rng.random(), rng.random()))
        .collect();

    for max_colors in [1, 4, 32, 128] {
        let first = QuantizerCelebi::new().quantize(&pixels, max_colors);
        let second = QuantizerCelebi::new().quantize(&pixels, max_colors);
        assert_eq!(first, second);
        assert!(first.len() <= max_colors);
    }

    let first = source_colors(
        &pixels,
        &QuantizeOptions::for_source_colors(),
        &ScoreOptions::default(),
    );
    let second = source_colors(
        &pixels,
        &QuantizeOptions::for_source_colors(),
        &ScoreOptions::default(),
    );
    assert_eq!(first, second);
    assert!((1..=4).contains(&first.len()));
}

#[test]
fn ranked_colors_are_distinct_hues() {
    let mut pixels = Vec::new();
    for (color, count) in [
        (0xff42_85f4_u32, 4000),
        (0xffe8_1e25, 3000),
        (0xff0f_9d58, 2000),
        (0xfff4_b400, 1000),
        (0xff80_8080, 6000),
    ] {
        pixels.extend(std::iter::repeat(Argb::new(color)).take(count));
    }

    let colors = source_colors(
        &pixels,
        &QuantizeOptions::for_source_colors(),
        &ScoreOptions::default(),
    );
    assert_eq!(colors.len(), 4);
    assert!(!colors.contains(&Argb::new(0xff80_8080)));
    for (index, color) in colors.iter().enumerate() {
        for other in &colors[index + 1..] {
            let (h1, h2) = (Hct::from_argb(*color).hue(), Hct::from_argb(*other).hue());
            let distance = 180.0 - ((h1 - h2).abs() - 180.0).abs();
            assert!(distance >= 15.0);
        }
    }
}

#[test]
fn contrast_properties() {
    let mut rng = rng();
    assert_eq!(ratio_of_tones(0.0, 100.0), 21.0);

    for _ in 0..1000 {
        let a = rng.random_range(0.0..=100.0);
        let b = rng.random_range(0.0..=100.0);
        assert_eq!(ratio_of_tones(a, b), ratio_of_tones(b, a));
        assert!(ratio_of_tones(a, b) >= 1.0);
        assert!(ratio_of_tones(a, b) <= ratio_of_tones(0.0, 100.0));
        assert!((ratio_of_tones(a, a) - 1.0).abs() < 1e-12);

        let ratio = rng.random_range(1.0..=21.0);
        if let Some(tone) = lighter(a, ratio) {
            assert!(tone >= a);
            assert!(ratio_of_tones(a, tone) >= ratio - 0.04);
        }
        if let Some(tone) = darker(a, ratio) {
            assert!(tone <= a);
            assert!(ratio_of_tones(a, tone) >= ratio - 0.04);
        }
        assert!((0.0..=100.0).contains(&lighter_unsafe(a, ratio)));
        assert!((0.0..=100.0).contains(&darker_unsafe(a, ratio)));
    }
}

#[test]
fn gamut_mapping_keeps_hue_and_tone() {
    let mut rng = rng();
    for _ in 0..200 {
        let hue = rng.random_range(0.0..360.0);
        let chroma = rng.random_range(0.0..150.0);
        let tone = rng.random_range(1.0..99.0);

        let hct = Hct::new(hue, chroma, tone);
        assert!((hct.tone() - tone).abs() < 1.0);
        assert!(hct.chroma() <= chroma + 2.5);
        assert_eq!(Hct::new(hue, chroma, 0.0).to_argb(), Argb::BLACK);
        assert_eq!(Hct::new(hue, chroma, 100.0).to_argb(), Argb::WHITE);
    }
}

#[test]
fn palettes_span_black_to_white() {
    let mut rng = rng();
    for _ in 0..50 {
        let source = Argb::from_rgb(rng.random(), rng.random(), rng.random());
        let palette = TonalPalette::from_argb(source);
        assert_eq!(palette.tone(0), Argb::BLACK);
        assert_eq!(palette.tone(100), Argb::WHITE);

        let mut previous = -1.0;
        for (tone, color) in palette.cached() {
            let lstar = lstar_from_argb(color);
            assert!(lstar >= previous, "tone {} is darker than its predecessor", tone);
            previous = lstar;
        }
    }
}
