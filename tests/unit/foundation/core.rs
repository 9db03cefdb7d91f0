use super::*;

#[test]
fn dims_contains_is_half_open() {
    let d = Dims::new(100, 50);
    assert!(d.contains(0, 0));
    assert!(d.contains(99, 49));
    assert!(!d.contains(100, 0));
    assert!(!d.contains(0, 50));
    assert!(!d.contains(-1, 10));
}

#[test]
fn dims_to_u32_rejects_non_positive() {
    assert_eq!(Dims::new(4, 2).to_u32(), Some((4, 2)));
    assert_eq!(Dims::new(0, 2).to_u32(), None);
    assert_eq!(Dims::new(4, -2).to_u32(), None);
}

#[test]
fn progress_completion() {
    assert!(!Progress { rendered: 2, total: 3 }.is_complete());
    assert!(Progress { rendered: 3, total: 3 }.is_complete());
}
