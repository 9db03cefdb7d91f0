use super::*;

#[test]
fn new_checks_buffer_length() {
    assert!(Frame::new(2, 2, PixelLayout::Rgb8, vec![0; 12]).is_ok());
    assert!(Frame::new(2, 2, PixelLayout::Rgb8, vec![0; 11]).is_err());
    assert!(Frame::new(2, 2, PixelLayout::Gray8, vec![0; 4]).is_ok());
    assert!(Frame::new(0, 2, PixelLayout::Gray8, vec![]).is_err());
}

#[test]
fn check_catches_frames_built_around_new() {
    let empty = Frame::from(image::RgbImage::new(0, 0));
    assert!(matches!(empty.check(), Err(RtxError::Validation(_))));

    let short = Frame {
        width: 4,
        height: 4,
        layout: PixelLayout::Rgb8,
        data: vec![0; 5],
    };
    let err = short.check().unwrap_err().to_string();
    assert!(err.contains("got 5 bytes, expected 48"), "{err}");

    assert!(Frame::filled(2, 2, PixelLayout::Gray8, &[7]).unwrap().check().is_ok());
}

#[test]
fn pixel_accessors_are_row_major() {
    let f = Frame::from_fn(3, 2, |x, y| [x as u8, y as u8, 7]).unwrap();
    assert_eq!(f.pixel(2, 1), &[2, 1, 7]);
    assert_eq!(f.rgb(1, 0), [1, 0, 7]);
    assert_eq!(f.pixel_count(), 6);

    let mut f = f;
    f.pixel_mut(0, 1).copy_from_slice(&[9, 9, 9]);
    assert_eq!(f.data[9..12], [9, 9, 9]);
}

#[test]
fn gray_expands_to_rgb() {
    let g = Frame::new(2, 1, PixelLayout::Gray8, vec![10, 200]).unwrap();
    assert_eq!(g.rgb(1, 0), [200, 200, 200]);
    let rgb = g.to_rgb();
    assert_eq!(rgb.layout, PixelLayout::Rgb8);
    assert_eq!(rgb.data, vec![10, 10, 10, 200, 200, 200]);
}

#[test]
fn filled_validates_pixel_width() {
    let f = Frame::filled(2, 2, PixelLayout::Rgb8, &[1, 2, 3]).unwrap();
    assert_eq!(f.data, [1, 2, 3].repeat(4));
    assert!(Frame::filled(2, 2, PixelLayout::Gray8, &[1, 2, 3]).is_err());
}

#[test]
fn image_conversions_round_trip() {
    let f = Frame::from_fn(4, 3, |x, y| [x as u8 * 10, y as u8 * 20, 5]).unwrap();
    let dynamic = f.to_dynamic().unwrap();
    let back = Frame::from(dynamic.to_rgb8());
    assert_eq!(back, f);
}

#[test]
#[should_panic(expected = "outside")]
fn out_of_bounds_pixel_panics() {
    let f = Frame::filled(2, 2, PixelLayout::Gray8, &[0]).unwrap();
    let _ = f.pixel(2, 0);
}
