//! Color model checks through the public API.
//!
//! Run: cargo test --test color_model_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use approx::assert_abs_diff_eq;

use chromaset::convert::{hsv_to_rgb, rgb8_to_hsv, rgb_to_hsv_array, hsv_to_rgb_into};
use chromaset::prelude::*;

// ============================================================================
// RGB <-> HSV
// ============================================================================

#[test]
fn every_rgb_value_survives_hsv_round_trip() {
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                let rgb = [r, g, b];
                assert_eq!(hsv_to_rgb(rgb8_to_hsv(rgb)), rgb, "{rgb:?}");
            }
        }
    }
}

#[test]
fn array_buffers_round_trip() {
    let pixels: Vec<[u8; 3]> = (0..=255u8).map(|i| [i, i.wrapping_mul(7), 255 - i]).collect();
    let hsv = rgb_to_hsv_array(&pixels);
    let mut back = vec![[0u8; 3]; pixels.len()];
    hsv_to_rgb_into(&hsv, &mut back).unwrap();
    assert_eq!(back, pixels);
}

#[test]
fn hex_hsv_and_rgb_views_agree() {
    let mut color = Color::from_hex("#3366cc").unwrap();
    assert_eq!(color.hex(), "3366CC");
    assert_eq!(color.to_string(), "#3366CC");
    assert_abs_diff_eq!(color.h(), 220.0, epsilon = 1e-9);

    color.set_v(0.4).unwrap();
    assert_eq!(Color::from_hex(&color.hex()).unwrap().rgb(), color.rgb());
}

#[test]
fn hue_wraps_from_both_sides() {
    for (input, expected) in [(-30.0, 330.0), (360.0, 0.0), (725.0, 5.0), (-720.0, 0.0)] {
        let color = Color::from_hsv([input, 1.0, 1.0], OverflowPolicy::Cutoff).unwrap();
        assert_abs_diff_eq!(color.h(), expected, epsilon = 1e-9);
    }
}

#[test]
fn overflow_policies_match_reference_examples() {
    let cases = [
        (OverflowPolicy::Cutoff, [1.0, 0.0]),
        (OverflowPolicy::Repeat, [0.5, 0.7]),
        (OverflowPolicy::Return, [0.5, 0.3]),
    ];
    for (policy, [s, v]) in cases {
        let color = Color::from_hsv([0.0, 1.5, -0.3], policy).unwrap();
        assert_abs_diff_eq!(color.s(), s, epsilon = 1e-9);
        assert_abs_diff_eq!(color.v(), v, epsilon = 1e-9);
    }
}

#[test]
fn malformed_inputs_are_rejected() {
    assert!(matches!(Color::from_hex("12345"), Err(Error::InvalidColor(_))));
    assert!(matches!(Color::from_hex("##123456"), Err(Error::InvalidColor(_))));
    assert!(matches!(
        Color::from_hsv([f64::INFINITY, 0.5, 0.5], OverflowPolicy::Return),
        Err(Error::InvalidColor(_))
    ));
}

// ============================================================================
// Lab / CMYK
// ============================================================================

#[test]
fn srgb_primaries_in_lab() {
    let red = Color::from_rgb(255, 0, 0).to_lab(WhiteRef::D65);
    assert_abs_diff_eq!(red[0], 53.24, epsilon = 0.05);
    assert_abs_diff_eq!(red[1], 80.09, epsilon = 0.05);
    assert_abs_diff_eq!(red[2], 67.20, epsilon = 0.05);

    let blue = Color::from_rgb(0, 0, 255).to_lab(WhiteRef::D65);
    assert_abs_diff_eq!(blue[0], 32.30, epsilon = 0.05);
    assert_abs_diff_eq!(blue[2], -107.86, epsilon = 0.05);
}

#[test]
fn lab_and_cmyk_round_trip_through_color() {
    let original = Color::from_hex("8040C0").unwrap();
    let white = WhiteRef::new(Illuminant::D50, Observer::Deg10);
    assert_eq!(Color::from_lab(original.to_lab(white), white).rgb(), original.rgb());
    assert_eq!(Color::from_cmyk(original.to_cmyk()).rgb(), original.rgb());
}

// ============================================================================
// Sign
// ============================================================================

#[test]
fn sign_names_cover_the_table() {
    let cases = [
        ([0.0, 0.0, 0.0], "Deep Black"),
        ([0.0, 0.0, 1.0], "Snow White"),
        ([120.0, 0.05, 0.5], "Grey Green"),
        ([0.0, 0.9, 0.2], "Heavy Red"),
        ([240.0, 0.8, 0.3], "Dark Blue"),
        ([60.0, 0.3, 0.3], "Dull Yellow"),
        ([180.0, 0.2, 0.9], "Pale Cyan"),
        ([300.0, 0.5, 0.8], "Light Magenta"),
        ([0.0, 0.9, 0.7], "Bright Red"),
        ([120.0, 1.0, 1.0], "Vivid Green"),
    ];
    for (hsv, name) in cases {
        let color = Color::from_hsv(hsv, OverflowPolicy::Cutoff).unwrap();
        assert_eq!(color.sign().name(), name, "{hsv:?}");
    }
}
