use super::*;
use crate::render::frame::PixelLayout;

fn gradient(w: u32, h: u32) -> Frame {
    Frame::from_fn(w, h, |x, y| [(x * 7) as u8, (y * 5) as u8, 3]).unwrap()
}

#[test]
fn phase_zero_is_identity() {
    let src = gradient(32, 24);
    let field = WarpField::new(32, 24, &[WarpPoint::new(5, 5), WarpPoint::new(20, 10)]);
    assert_eq!(field.apply(&src, 0.0).unwrap(), src);
}

#[test]
fn empty_point_list_is_identity_at_any_phase() {
    let src = gradient(16, 16);
    let field = WarpField::new(16, 16, &[]);
    assert_eq!(field.apply(&src, 0.25).unwrap(), src);
}

#[test]
fn field_points_towards_the_anchor() {
    let field = WarpField::new(40, 40, &[WarpPoint::new(20, 20)]);
    let [dx, dy] = field.offset(10, 20);
    assert!(dx > 0.0);
    assert_eq!(dy, 0.0);
    assert_eq!(field.offset(20, 20), [0.0, 0.0]);
}

#[test]
fn quarter_phase_moves_pixels() {
    let src = gradient(40, 40);
    let field = WarpField::new(40, 40, &[WarpPoint::new(20, 20)]);
    let warped = field.apply(&src, 0.25).unwrap();
    assert_ne!(warped, src);
    // The anchor itself has no displacement.
    assert_eq!(warped.pixel(20, 20), src.pixel(20, 20));
}

#[test]
fn amplitude_follows_a_sine() {
    assert_eq!(WarpField::amplitude(0.0), 0.0);
    assert!((WarpField::amplitude(0.25) - WARP_STRENGTH).abs() < 1e-6);
    assert!((WarpField::amplitude(0.75) + WARP_STRENGTH).abs() < 1e-6);
}

#[test]
fn size_mismatch_is_rejected() {
    let field = WarpField::new(8, 8, &[]);
    let other = Frame::filled(4, 4, PixelLayout::Rgb8, &[0, 0, 0]).unwrap();
    assert!(field.apply(&other, 0.1).is_err());
}
