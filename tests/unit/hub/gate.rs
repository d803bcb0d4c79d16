use super::*;
use crate::config::model::{OrbitConfig, SpinConfig};

fn layer(spin_fps: Option<f64>, orbit_fps: Option<f64>) -> LayerConfig {
    let mut cfg = LayerConfig::new("a", "a.png");
    cfg.spin = spin_fps.map(|max_fps| SpinConfig {
        enabled: true,
        rpm: 1.0,
        max_fps,
        ..SpinConfig::default()
    });
    cfg.orbit = orbit_fps.map(|max_fps| OrbitConfig {
        enabled: true,
        rpm: 1.0,
        max_fps,
        ..OrbitConfig::default()
    });
    cfg
}

#[test]
fn ceiling_is_lowest_enabled_block() {
    assert_eq!(layer_max_fps(&layer(None, None)), 60.0);
    assert_eq!(layer_max_fps(&layer(Some(30.0), None)), 30.0);
    assert_eq!(layer_max_fps(&layer(Some(30.0), Some(24.0))), 24.0);
}

#[test]
fn ceiling_is_clamped() {
    assert_eq!(layer_max_fps(&layer(Some(5.0), None)), 15.0);
    assert_eq!(layer_max_fps(&layer(Some(240.0), None)), 60.0);
    assert_eq!(layer_max_fps(&layer(Some(0.0), Some(f64::NAN))), 60.0);
}

#[test]
fn negative_ceiling_clamps_to_minimum() {
    assert_eq!(layer_max_fps(&layer(Some(-30.0), None)), 15.0);
    assert_eq!(layer_max_fps(&layer(None, Some(-1.0))), 15.0);
}

#[test]
fn disabled_block_does_not_lower_ceiling() {
    let mut cfg = layer(Some(20.0), None);
    if let Some(s) = cfg.spin.as_mut() {
        s.enabled = false;
    }
    assert_eq!(layer_max_fps(&cfg), 60.0);
}

#[test]
fn thirty_fps_admits_every_interval() {
    let mut gate = FpsGate::default();
    assert!(gate.admit(100.0, 30.0));
    assert_eq!(gate.last_draw_ms, 100.0);

    assert!(!gate.admit(116.0, 30.0));
    assert!(!gate.admit(133.0, 30.0));
    assert_eq!(gate.last_draw_ms, 100.0);

    assert!(gate.admit(134.0, 30.0));
    assert_eq!(gate.last_draw_ms, 134.0);
}
