use super::*;
use crate::foundation::error::RtxError;
use crate::render::frame::{PixelBuffer, PixelLayout};

fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_fn(3, 2, |x, y| {
        image::Rgba([x as u8 * 50, y as u8 * 90, 7, 128])
    });
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn decodes_png_to_rgb_dropping_alpha() {
    let frame = decode_image(&png_bytes()).unwrap();
    assert_eq!(frame.layout, PixelLayout::Rgb8);
    assert!(frame.has_size(3, 2));
    assert_eq!(frame.rgb(2, 1), [100, 90, 7]);
}

#[test]
fn garbage_bytes_are_an_error() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, RtxError::Other(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = load_source_image(Path::new("target/definitely/missing.png")).unwrap_err();
    assert!(format!("{err:#}").contains("missing.png"));
}
