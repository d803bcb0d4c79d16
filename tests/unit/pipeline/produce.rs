use super::*;

#[test]
fn empty_id_falls_back_to_index() {
    let cfg = LayerConfig::new("", "hand.png");
    let bus = produce(Bus::default(), &cfg, 3);
    assert_eq!(bus.layer.unwrap().id, "layer-3");
}

#[test]
fn empty_path_disables_layer() {
    let cfg = LayerConfig::new("a", "");
    let bus = produce(Bus::default(), &cfg, 0);
    let layer = bus.layer.unwrap();
    assert_eq!(layer.id, "a");
    assert!(!layer.enabled);
}

#[test]
fn non_finite_z_defaults_to_zero() {
    let mut cfg = LayerConfig::new("a", "a.png");
    cfg.z_hint = f64::NAN;
    let bus = produce(Bus::default(), &cfg, 0);
    let layer = bus.layer.unwrap();
    assert!(layer.enabled);
    assert_eq!(layer.z_hint, 0.0);
}
