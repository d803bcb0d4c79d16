use super::*;

#[test]
fn advance_accumulates_small_steps() {
    let t = FrameTime::starting_at(1000.0).advance(16.0).advance(17.0);
    assert_eq!(t.now_ms, 1033.0);
    assert_eq!(t.dt_ms, 17.0);
}

#[test]
fn long_stalls_are_clamped() {
    let t = FrameTime::starting_at(0.0).advance(5_000.0);
    assert_eq!(t, FrameTime { now_ms: 100.0, dt_ms: 100.0 });
}

#[test]
fn negative_and_non_finite_deltas_freeze() {
    let start = FrameTime::starting_at(50.0);
    assert_eq!(start.advance(-10.0).now_ms, 50.0);
    assert_eq!(start.advance(f64::NAN), FrameTime { now_ms: 50.0, dt_ms: 0.0 });
}
