use super::*;

#[test]
fn origin_from_size_centers_and_sanitizes() {
    let o = Origin::from_size(400.0, 300.0);
    assert_eq!(o.center_x, 200.0);
    assert_eq!(o.center_y, 150.0);

    let o = Origin::from_size(f64::NAN, f64::INFINITY);
    assert_eq!(o, Origin::from_size(0.0, 0.0));
}

#[test]
fn origin_contains_includes_edges() {
    let o = Origin::from_size(100.0, 50.0);
    assert!(o.contains(Point::new(0.0, 0.0)));
    assert!(o.contains(Point::new(100.0, 50.0)));
    assert!(!o.contains(Point::new(100.1, 10.0)));
    assert!(!o.contains(Point::new(10.0, -0.1)));
}

#[test]
fn size_usable_rejects_degenerate() {
    assert!(Size::new(10.0, 20.0).is_usable());
    assert!(!Size::new(0.0, 20.0).is_usable());
    assert!(!Size::new(10.0, -1.0).is_usable());
    assert!(!Size::new(f64::NAN, 1.0).is_usable());
}

#[test]
fn direction_sign_and_serde() {
    assert_eq!(Direction::Cw.sign(), 1.0);
    assert_eq!(Direction::Ccw.sign(), -1.0);
    let d: Direction = serde_json::from_str("\"ccw\"").unwrap();
    assert_eq!(d, Direction::Ccw);
}
