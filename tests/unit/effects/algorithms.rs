use super::*;
use crate::render::frame::{PixelBuffer, PixelLayout};

fn quadrants() -> Frame {
    Frame::from_fn(8, 8, |x, y| match (x < 4, y < 4) {
        (true, true) => [255, 0, 0],
        (false, true) => [0, 255, 0],
        (true, false) => [0, 0, 255],
        (false, false) => [255, 255, 255],
    })
    .unwrap()
}

fn canvas() -> Canvas {
    let points = [WarpPoint::new(0, 0), WarpPoint::new(7, 7), WarpPoint::new(3, 4)];
    Canvas::prepare(&quadrants(), 8, 8, &points).unwrap()
}

#[test]
fn phase_zero_reproduces_the_source() {
    let c = canvas();
    let src = quadrants();
    assert_eq!(c.render(Algorithm::CorgiLegacy, 0.5, 0.0).unwrap(), src);
    assert_eq!(c.render(Algorithm::CorgiHsv, 0.5, 0.0).unwrap(), src);
    assert_eq!(c.render(Algorithm::BlendS, 0.5, 0.0).unwrap(), src);
    // Gain is exactly 1 at the target brightness.
    assert_eq!(
        c.render(Algorithm::BrightnessCompensate, 0.5, 0.0).unwrap(),
        src
    );
}

#[test]
fn blend_s_is_grayscale_mid_loop() {
    let c = canvas();
    let mid = c.render(Algorithm::BlendS, 0.5, 0.5).unwrap();
    assert_eq!(mid, c.gray.to_rgb());
}

#[test]
fn corgi_hsv_rotates_hue_with_the_phase() {
    let src = Frame::filled(4, 4, PixelLayout::Rgb8, &[255, 0, 0]).unwrap();
    let c = Canvas::prepare(&src, 4, 4, &[]).unwrap();
    let third = c.render(Algorithm::CorgiHsv, 0.5, 1.0 / 3.0).unwrap();
    assert_eq!(third.rgb(2, 2), [0, 255, 0]);
}

#[test]
fn brightness_compensate_scales_dark_sources() {
    let src = Frame::filled(2, 2, PixelLayout::Rgb8, &[40, 60, 80]).unwrap();
    let c = Canvas::prepare(&src, 2, 2, &[]).unwrap();
    let out = c.render(Algorithm::BrightnessCompensate, 0.25, 0.3).unwrap();
    assert_eq!(out.rgb(0, 0), [80, 120, 160]);

    let bright = c.render(Algorithm::BrightnessCompensate, 1.0, 0.3).unwrap();
    assert_eq!(bright.rgb(1, 1), [20, 30, 40]);
}

#[test]
fn gain_is_clamped() {
    assert_eq!(brightness_gain(0.5), 1.0);
    assert_eq!(brightness_gain(0.25), 2.0);
    assert_eq!(brightness_gain(0.01), 2.0);
    assert_eq!(brightness_gain(0.0), 2.0);
    assert_eq!(brightness_gain(1.0), 0.5);
}

#[test]
fn canvas_is_scaled_to_output_size() {
    let c = Canvas::prepare(&quadrants(), 16, 4, &[]).unwrap();
    assert!(c.color.has_size(16, 4));
    assert!(c.gray.has_size(16, 4));
    assert_eq!(c.gray.layout, PixelLayout::Gray8);
    assert_eq!(c.hsv.hue.len(), 64);
}

#[test]
fn phase_wraps_per_loop() {
    assert_eq!(loop_phase(0, 10), 0.0);
    assert_eq!(loop_phase(5, 10), 0.5);
    assert_eq!(loop_phase(10, 10), 0.0);
    assert_eq!(loop_phase(13, 10), 0.3);
    assert_eq!(loop_phase(3, 0), 0.0);
    assert_eq!(blend_mix(0.0), 0.0);
    assert!((blend_mix(0.5) - 1.0).abs() < 1e-6);
}
