use arcade::game::geometry::Rect;
use glam::Vec2;

#[test]
fn test_overlapping_frames_intersect() {
    let a = Rect::from_center(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
    let b = Rect::from_center(Vec2::new(25.0, 15.0), Vec2::new(20.0, 20.0));

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_identical_frames_intersect() {
    let a = Rect::from_center(Vec2::new(300.0, 200.0), Vec2::new(32.0, 32.0));

    assert!(a.intersects(&a));
}

#[test]
fn test_contained_frame_intersects() {
    let outer = Rect::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
    let inner = Rect::new(Vec2::new(40.0, 40.0), Vec2::new(45.0, 45.0));

    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn test_touching_edges_do_not_intersect() {
    let left = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let right = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
    let above = Rect::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 20.0));

    assert!(!left.intersects(&right));
    assert!(!left.intersects(&above));
}

#[test]
fn test_disjoint_on_one_axis_do_not_intersect() {
    let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let b = Rect::new(Vec2::new(5.0, 50.0), Vec2::new(15.0, 60.0));

    assert!(!a.intersects(&b));
}

#[test]
fn test_rect_new_normalises_corners() {
    let rect = Rect::new(Vec2::new(10.0, 2.0), Vec2::new(4.0, 8.0));

    assert_eq!(rect.min, Vec2::new(4.0, 2.0));
    assert_eq!(rect.max, Vec2::new(10.0, 8.0));
    assert_eq!(rect.width(), 6.0);
    assert_eq!(rect.height(), 6.0);
}
