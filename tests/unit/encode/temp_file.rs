use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("temp_file_sink");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn base_path_gets_the_temp_suffix() {
    let sink = TempFileSink::for_base_path("out/loop");
    assert_eq!(sink.path(), Path::new("out/loop.temp.png"));
    let wide: Vec<u16> = "out/loop.temp.png".encode_utf16().collect();
    assert_eq!(sink.wide_path(), wide);
}

#[test]
fn every_frame_overwrites_the_file() {
    let path = scratch("overwrite.temp.png");
    let _ = std::fs::remove_file(&path);
    let mut sink = TempFileSink::new(&path);
    sink.begin(SinkConfig {
        width: 3,
        height: 2,
        fps: 30,
    })
    .unwrap();

    let red = Frame::filled(3, 2, PixelLayout::Rgb8, &[255, 0, 0]).unwrap();
    sink.push_frame(0, &red).unwrap();
    let gray = Frame::filled(3, 2, PixelLayout::Gray8, &[90]).unwrap();
    sink.push_frame(1, &gray).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.frames_written(), 2);
    let on_disk = image::open(&path).unwrap();
    assert_eq!(on_disk.width(), 3);
    assert_eq!(on_disk.to_luma8().into_raw(), vec![90; 6]);
}

#[test]
fn size_mismatch_is_rejected() {
    let mut sink = TempFileSink::new(scratch("mismatch.temp.png"));
    sink.begin(SinkConfig {
        width: 4,
        height: 4,
        fps: 1,
    })
    .unwrap();
    let small = Frame::filled(2, 2, PixelLayout::Gray8, &[0]).unwrap();
    assert!(matches!(
        sink.push_frame(0, &small).unwrap_err(),
        RtxError::Validation(_)
    ));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = TempFileSink::new(scratch("unstarted.temp.png"));
    let f = Frame::filled(1, 1, PixelLayout::Gray8, &[0]).unwrap();
    assert!(sink.push_frame(0, &f).is_err());
}
