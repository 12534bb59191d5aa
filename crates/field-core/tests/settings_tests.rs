// Settings invariants: clamping setters and the randomizer ranges.

use field_core::{
    Settings, CLUSTER_COUNT_MAX, COLOR_SPEED_RANGE, ROTATION_SPEED_RANGE, SCALE_MAX_RANGE,
    SCALE_MIN_RANGE, SCALE_SPEED_RANGE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn defaults_satisfy_scale_invariant() {
    let s = Settings::default();
    assert!(s.scale_min() <= s.scale_max());
}

#[test]
fn raising_min_above_max_drags_max_up() {
    let mut s = Settings::default();
    s.set_scale_max(0.5);
    s.set_scale_min(1.1);
    assert_eq!(s.scale_min(), 1.1);
    assert!(s.scale_max() >= s.scale_min());
}

#[test]
fn lowering_max_below_min_drags_min_down() {
    let mut s = Settings::default();
    s.set_scale_min(1.0);
    s.set_scale_max(0.4);
    assert_eq!(s.scale_max(), 0.4);
    assert!(s.scale_min() <= s.scale_max());
}

#[test]
fn setters_clamp_to_declared_ranges() {
    let mut s = Settings::default();
    s.set_color_speed(99.0);
    assert_eq!(s.color_speed(), COLOR_SPEED_RANGE.1);
    s.set_color_speed(-1.0);
    assert_eq!(s.color_speed(), COLOR_SPEED_RANGE.0);
    s.set_rotation_speed(7.0);
    assert_eq!(s.rotation_speed(), ROTATION_SPEED_RANGE.1);
    s.set_cluster_count(100_000);
    assert_eq!(s.cluster_count(), CLUSTER_COUNT_MAX);
}

#[test]
fn zero_cluster_count_is_valid() {
    let mut s = Settings::default();
    s.set_cluster_count(0);
    assert_eq!(s.cluster_count(), 0);
}

#[test]
fn randomize_respects_ranges_and_invariant() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = Settings::default();
    for _ in 0..200 {
        s.randomize(&mut rng);
        assert!(s.cluster_count() >= 1 && s.cluster_count() <= CLUSTER_COUNT_MAX);
        assert!(s.color_speed() >= COLOR_SPEED_RANGE.0 && s.color_speed() <= COLOR_SPEED_RANGE.1);
        assert!(s.scale_min() >= SCALE_MIN_RANGE.0);
        assert!(s.scale_max() <= SCALE_MAX_RANGE.1);
        assert!(
            s.scale_min() <= s.scale_max(),
            "invariant violated: {} > {}",
            s.scale_min(),
            s.scale_max()
        );
        assert!(s.scale_speed() >= SCALE_SPEED_RANGE.0 && s.scale_speed() <= SCALE_SPEED_RANGE.1);
        assert!(
            s.rotation_speed() >= ROTATION_SPEED_RANGE.0
                && s.rotation_speed() <= ROTATION_SPEED_RANGE.1
        );
    }
}

#[test]
fn randomize_eventually_picks_every_palette() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = Settings::default();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        s.randomize(&mut rng);
        seen.insert(s.palette().as_str());
    }
    assert_eq!(seen.len(), 5);
}
