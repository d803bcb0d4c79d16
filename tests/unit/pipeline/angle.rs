use super::*;
use crate::{
    config::model::{Align, LayerConfig},
    foundation::core::Origin,
    pipeline::{bus::FrameCtx, image::map_image, position::position, produce::produce},
};

fn approx_pt(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn run(cfg: &LayerConfig, natural: Size) -> AnchoredAngle {
    // 100x100 viewport, full-vmin scale => rendered height 100.
    let ctx = FrameCtx::new(0.0, Origin::from_size(100.0, 100.0), Some(natural));
    let bus = produce(Bus::default(), cfg, 0);
    let bus = map_image(bus, &ctx);
    let bus = position(bus, &ctx);
    anchored_angle(bus).angle.unwrap()
}

fn with_angle(a: AngleConfig) -> LayerConfig {
    let mut cfg = LayerConfig::new("a", "a.png");
    cfg.angle = Some(a);
    cfg
}

#[test]
fn disabled_block_is_neutral_regardless_of_points() {
    let cfg = with_angle(AngleConfig {
        enabled: false,
        base: PointPct::new(-80.0, 10.0),
        tip: PointPct::new(90.0, 90.0),
        pivot: Pivot::Base,
        align: Align::Vertical,
    });
    let a = run(&cfg, Size::new(100.0, 100.0));
    assert_eq!(a.rotation_deg, 0.0);
    assert_eq!(a.origin_pct, PointPct::CENTER);
    assert_eq!(a.base_px, Point::new(50.0, 50.0));
    assert_eq!(a.tip_px, Point::new(50.0, 50.0));
}

#[test]
fn missing_earlier_stages_fall_back_to_origin_point() {
    let cfg = with_angle(AngleConfig {
        enabled: true,
        ..AngleConfig::default()
    });
    let a = anchored_angle(produce(Bus::default(), &cfg, 0)).angle.unwrap();
    assert_eq!(a.rotation_deg, 0.0);
    assert_eq!(a.base_px, Point::ORIGIN);
}

#[test]
fn upright_vector_needs_no_rotation() {
    let cfg = with_angle(AngleConfig {
        enabled: true,
        ..AngleConfig::default()
    });
    let a = run(&cfg, Size::new(100.0, 100.0));
    assert_eq!(a.rotation_deg, 0.0);
    assert!(approx_pt(a.base_px, Point::new(50.0, 75.0)));
    assert!(approx_pt(a.tip_px, Point::new(50.0, 25.0)));
}

#[test]
fn rightward_vector_rotates_tip_to_top_around_center() {
    let cfg = with_angle(AngleConfig {
        enabled: true,
        base: PointPct::new(-50.0, 0.0),
        tip: PointPct::new(50.0, 0.0),
        ..AngleConfig::default()
    });
    let a = run(&cfg, Size::new(100.0, 100.0));
    assert!((a.rotation_deg - 90.0).abs() < 1e-9);
    assert!(approx_pt(a.base_px, Point::new(50.0, 75.0)));
    assert!(approx_pt(a.tip_px, Point::new(50.0, 25.0)));
}

#[test]
fn base_pivot_keeps_base_fixed_and_moves_origin() {
    let cfg = with_angle(AngleConfig {
        enabled: true,
        base: PointPct::new(-50.0, 0.0),
        tip: PointPct::new(50.0, 0.0),
        pivot: Pivot::Base,
        align: Align::Vertical,
    });
    let a = run(&cfg, Size::new(100.0, 100.0));
    assert_eq!(a.origin_pct, PointPct::new(25.0, 50.0));
    assert!(approx_pt(a.base_px, Point::new(25.0, 50.0)));
    assert!(approx_pt(a.tip_px, Point::new(25.0, 0.0)));
}

#[test]
fn axis_alignment_matches_vertical() {
    let mk = |align| {
        with_angle(AngleConfig {
            enabled: true,
            base: PointPct::new(10.0, 40.0),
            tip: PointPct::new(-30.0, -20.0),
            pivot: Pivot::Center,
            align,
        })
    };
    let natural = Size::new(300.0, 150.0);
    assert_eq!(run(&mk(Align::Axis), natural), run(&mk(Align::Vertical), natural));
}

#[test]
fn wide_image_scales_by_rendered_height() {
    // 200x100 natural rendered 100px tall: factor 1.0 horizontally too.
    let cfg = with_angle(AngleConfig {
        enabled: true,
        base: PointPct::new(0.0, 0.0),
        tip: PointPct::new(0.0, -100.0),
        ..AngleConfig::default()
    });
    let a = run(&cfg, Size::new(200.0, 100.0));
    assert!(approx_pt(a.tip_px, Point::new(50.0, 0.0)));
}
