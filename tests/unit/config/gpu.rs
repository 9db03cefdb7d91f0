use super::*;

fn with_dims(w: i32, h: i32) -> GpuConfig {
    let mut cfg = GpuConfig::new();
    assert!(cfg.set_output_dims(Dims::new(w, h)));
    cfg.reset_warp_locations();
    cfg
}

#[test]
fn new_carries_default_corners() {
    let cfg = GpuConfig::new();
    assert_eq!(cfg.warp_locations, corner_anchors(Dims::new(480, 480)));
    assert_eq!(cfg.warp_locations_as_str(), "0,0;479,0;479,479;0,479");
}

#[test]
fn bad_text_leaves_list_untouched() {
    let mut cfg = with_dims(100, 100);
    let before = cfg.warp_locations.clone();
    assert!(!cfg.set_warp_locations_str("1,2;oops"));
    assert_eq!(cfg.warp_locations, before);

    assert!(cfg.set_warp_locations_str("5,5;6,6"));
    assert_eq!(
        cfg.warp_locations,
        vec![WarpPoint::new(5, 5), WarpPoint::new(6, 6)]
    );
}

#[test]
fn text_round_trip_through_config() {
    let mut cfg = with_dims(100, 100);
    let pts = vec![
        WarpPoint::new(10, 20),
        WarpPoint::new(0, 0),
        WarpPoint::new(99, 99),
        WarpPoint::new(50, 1),
    ];
    cfg.set_warp_locations(pts.clone());
    let text = cfg.warp_locations_as_str();

    let mut other = with_dims(100, 100);
    assert!(other.set_warp_locations_str(&text));
    assert_eq!(other.warp_locations, pts);
}

#[test]
fn negative_point_is_dropped_and_anchors_restored() {
    let mut cfg = with_dims(100, 100);
    cfg.set_warp_locations(vec![WarpPoint::new(-1, 5), WarpPoint::new(10, 10)]);

    assert!(cfg.validate_warp_locations());
    assert!(!cfg.warp_locations.contains(&WarpPoint::new(-1, 5)));
    assert_eq!(
        cfg.warp_locations,
        vec![
            WarpPoint::new(10, 10),
            WarpPoint::new(0, 0),
            WarpPoint::new(99, 0),
            WarpPoint::new(99, 99),
            WarpPoint::new(0, 99),
        ]
    );
}

#[test]
fn validation_is_idempotent() {
    let mut cfg = with_dims(100, 100);
    cfg.set_warp_locations(vec![
        WarpPoint::new(100, 0),
        WarpPoint::new(0, 0),
        WarpPoint::new(3, 200),
    ]);
    assert!(cfg.validate_warp_locations());
    let after_first = cfg.warp_locations.clone();
    assert!(!cfg.validate_warp_locations());
    assert_eq!(cfg.warp_locations, after_first);
}

#[test]
fn enough_valid_points_are_left_alone() {
    let mut cfg = with_dims(100, 100);
    let pts = vec![
        WarpPoint::new(1, 1),
        WarpPoint::new(2, 2),
        WarpPoint::new(3, 3),
        WarpPoint::new(4, 4),
    ];
    cfg.set_warp_locations(pts.clone());
    assert!(!cfg.validate_warp_locations());
    assert_eq!(cfg.warp_locations, pts);
}

#[test]
fn shrinking_dims_invalidates_points() {
    let mut cfg = GpuConfig::new();
    assert!(!cfg.set_output_dims(Dims::new(-5, 100)));
    assert_eq!(cfg.output.dims, Dims::new(480, 480));

    assert!(cfg.set_output_dims(Dims::new(200, 100)));
    // Old corners (479, *) are now out of bounds.
    assert!(cfg.validate_warp_locations());
    assert!(
        cfg.warp_locations
            .iter()
            .all(|p| cfg.output.dims.contains(p.x, p.y))
    );
    assert!(cfg.warp_locations.contains(&WarpPoint::new(199, 99)));
}

#[test]
fn json_round_trip_and_defaults() {
    let mut cfg = with_dims(64, 32);
    cfg.input_path = "in.png".to_string();
    cfg.output.path = "out/loop".to_string();
    let text = cfg.to_json_string().unwrap();
    assert_eq!(GpuConfig::from_json_str(&text).unwrap(), cfg);

    let partial = GpuConfig::from_json_str(r#"{ "input_path": "a.png" }"#).unwrap();
    assert_eq!(partial.input_path, "a.png");
    assert_eq!(partial.output, OutputConfig::default());
    assert_eq!(partial.warp_locations, corner_anchors(Dims::new(480, 480)));

    assert!(matches!(
        GpuConfig::from_json_str("{ nope").unwrap_err(),
        RtxError::Serde(_)
    ));
}
