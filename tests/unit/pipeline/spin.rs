use super::*;
use crate::{
    config::model::LayerConfig, foundation::core::Origin, hub::tokens::make_spin_token,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn cfg(rpm: f64, direction: Direction) -> SpinConfig {
    SpinConfig {
        enabled: true,
        rpm,
        direction,
        ..SpinConfig::default()
    }
}

#[test]
fn one_rpm_is_six_degrees_per_second() {
    assert!(approx(degrees_per_ms(1.0, Direction::Cw) * 1000.0, 6.0));
    assert!(approx(degrees_per_ms(1.0, Direction::Ccw) * 1000.0, -6.0));
}

#[test]
fn angle_advances_from_token_phase() {
    let token = make_spin_token(1000.0, 30.0);
    let c = cfg(10.0, Direction::Cw);
    assert!(approx(spin_angle_deg(1000.0, Some(&c), Some(&token)), 30.0));
    assert!(approx(spin_angle_deg(2000.0, Some(&c), Some(&token)), 90.0));
}

#[test]
fn counter_clockwise_wraps_into_range() {
    let token = make_spin_token(0.0, 0.0);
    let c = cfg(10.0, Direction::Ccw);
    let deg = spin_angle_deg(1000.0, Some(&c), Some(&token));
    assert!(approx(deg, 300.0));
}

#[test]
fn time_before_anchor_holds_phase() {
    let token = make_spin_token(5000.0, 45.0);
    let c = cfg(60.0, Direction::Cw);
    assert!(approx(spin_angle_deg(1000.0, Some(&c), Some(&token)), 45.0));
}

#[test]
fn inactive_inputs_yield_zero() {
    let token = make_spin_token(0.0, 45.0);
    let disabled = SpinConfig {
        enabled: false,
        ..cfg(10.0, Direction::Cw)
    };
    assert_eq!(spin_angle_deg(500.0, Some(&disabled), Some(&token)), 0.0);
    assert_eq!(spin_angle_deg(500.0, Some(&cfg(0.0, Direction::Cw)), Some(&token)), 0.0);
    assert_eq!(spin_angle_deg(500.0, Some(&cfg(-5.0, Direction::Cw)), Some(&token)), 0.0);
    assert_eq!(spin_angle_deg(500.0, Some(&cfg(f64::NAN, Direction::Cw)), Some(&token)), 0.0);
    assert_eq!(spin_angle_deg(500.0, Some(&cfg(10.0, Direction::Cw)), None), 0.0);
    assert_eq!(spin_angle_deg(500.0, None, Some(&token)), 0.0);

    let uninit = SpinToken {
        initialized: false,
        ..token
    };
    assert_eq!(spin_angle_deg(500.0, Some(&cfg(10.0, Direction::Cw)), Some(&uninit)), 0.0);
}

#[test]
fn rebase_at_same_instant_keeps_angle() {
    let old_cfg = cfg(10.0, Direction::Cw);
    let old = make_spin_token(0.0, 0.0);
    let now = 12_345.0;
    let before = spin_angle_deg(now, Some(&old_cfg), Some(&old));

    let new_cfg = cfg(25.0, Direction::Ccw);
    let rebased = make_spin_token(now, before);
    let after = spin_angle_deg(now, Some(&new_cfg), Some(&rebased));
    assert!(approx(before, after));
}

#[test]
fn stage_writes_spin_field() {
    let mut layer = LayerConfig::new("a", "a.png");
    layer.spin = Some(cfg(60.0, Direction::Cw));
    let token = make_spin_token(0.0, 0.0);
    let ctx = FrameCtx::new(250.0, Origin::from_size(100.0, 100.0), None);
    let bus = crate::pipeline::produce::produce(Bus::default(), &layer, 0);
    let bus = spin(bus, &ctx, Some(&token));
    assert!(approx(bus.spin.unwrap().deg, 90.0));
}
