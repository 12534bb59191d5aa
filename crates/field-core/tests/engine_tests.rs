// Pool lifecycle and end-to-end driver behavior.

use field_core::{
    FieldEngine, PaletteName, Settings, GROUP_YAW_RATE, SATELLITE_ANGLE_STEP,
    SATELLITE_BASE_RADIUS, SATELLITE_BOB_AMPLITUDE, SATELLITE_BOB_RATE, SATELLITE_COUNT,
    SATELLITE_ORBIT_RATE, SATELLITE_RADIUS_STEP,
};
use glam::Vec3;

const FAR_AWAY: Vec3 = Vec3::new(100.0, 100.0, 0.0);

#[test]
fn resize_yields_exactly_the_requested_count() {
    let mut settings = Settings::default();
    settings.set_cluster_count(10);
    let mut engine = FieldEngine::new(settings, 1);
    assert_eq!(engine.clusters().len(), 10);

    engine.set_cluster_count(3);
    assert_eq!(engine.clusters().len(), 3);

    engine.set_cluster_count(25);
    assert_eq!(engine.clusters().len(), 25);
}

#[test]
fn resize_to_zero_yields_empty_valid_pool() {
    let mut engine = FieldEngine::new(Settings::default(), 1);
    engine.set_cluster_count(0);
    assert!(engine.clusters().is_empty());
    // Driver still runs on an empty pool.
    engine.update(1.0, FAR_AWAY);
    engine.blast(Vec3::ZERO);
}

#[test]
fn resize_discards_all_prior_state() {
    let mut settings = Settings::default();
    settings.set_cluster_count(4);
    let mut engine = FieldEngine::new(settings, 9);
    let hit = engine.clusters()[0].visual.position;
    engine.blast(hit);
    engine.set_cluster_count(4);
    for cluster in engine.clusters() {
        assert_eq!(cluster.velocity, Vec3::ZERO, "no velocity carries over");
    }
}

#[test]
fn randomize_rebuilds_to_the_sampled_count() {
    let mut engine = FieldEngine::new(Settings::default(), 5);
    for _ in 0..10 {
        engine.randomize();
        assert_eq!(engine.clusters().len(), engine.settings().cluster_count());
    }
}

#[test]
fn zero_elapsed_with_zero_offset_selects_middle_color() {
    // color phase = (sin(0) + 1) / 2 = 0.5, which must select the ramp's
    // midpoint color exactly.
    let mut settings = Settings::default();
    settings.set_cluster_count(1);
    settings.set_color_speed(0.5);
    settings.set_palette(PaletteName::Primary);
    let mut engine = FieldEngine::new(settings, 3);
    engine.clusters_mut()[0].offsets.color = 0.0;

    engine.update(0.0, FAR_AWAY);
    let knot = engine.clusters()[0].visual.knot.color;
    let expected = PaletteName::Primary.colors().knot[1];
    assert!(
        (knot - expected).length() < 1e-6,
        "expected {expected:?}, got {knot:?}"
    );
}

#[test]
fn zero_scale_phase_offset_lands_mid_scale() {
    let mut settings = Settings::default();
    settings.set_cluster_count(1);
    let mut engine = FieldEngine::new(settings, 3);
    engine.clusters_mut()[0].offsets.scale = 0.0;

    engine.update(0.0, FAR_AWAY);
    let scale = engine.clusters()[0].visual.scale;
    let mid = (engine.settings().scale_min() + engine.settings().scale_max()) / 2.0;
    assert!((scale - mid).abs() < 1e-6);
}

#[test]
fn palette_swap_leaves_structural_state_untouched() {
    let mut settings = Settings::default();
    settings.set_cluster_count(6);
    let mut engine = FieldEngine::new(settings, 8);
    engine.update(1.0, FAR_AWAY);

    let bases: Vec<Vec3> = engine.clusters().iter().map(|c| c.base_position).collect();
    engine.settings_mut().set_palette(PaletteName::Mono);
    engine.update(2.0, FAR_AWAY);

    assert_eq!(engine.clusters().len(), 6);
    for (cluster, base) in engine.clusters().iter().zip(&bases) {
        assert_eq!(cluster.base_position, *base);
    }
}

#[test]
fn base_position_never_changes_after_creation() {
    let mut settings = Settings::default();
    settings.set_cluster_count(2);
    let mut engine = FieldEngine::new(settings, 21);
    let bases: Vec<Vec3> = engine.clusters().iter().map(|c| c.base_position).collect();

    for n in 0..50 {
        let cursor = engine.clusters()[0].visual.position;
        engine.blast(cursor);
        engine.update(n as f32 * 0.016, cursor);
    }
    for (cluster, base) in engine.clusters().iter().zip(&bases) {
        assert_eq!(cluster.base_position, *base);
    }
}

#[test]
fn satellites_orbit_on_indexed_radii() {
    let mut settings = Settings::default();
    settings.set_cluster_count(1);
    let mut engine = FieldEngine::new(settings, 13);
    engine.clusters_mut()[0].offsets.rotation = 0.0;

    let elapsed = 1.3;
    engine.update(elapsed, FAR_AWAY);
    let rotation_speed = engine.settings().rotation_speed();
    let visual = &engine.clusters()[0].visual;

    for (i, sat) in visual.satellite_positions.iter().enumerate() {
        let offset = i as f32 * SATELLITE_ANGLE_STEP;
        let radius = SATELLITE_BASE_RADIUS + (i % 3) as f32 * SATELLITE_RADIUS_STEP;
        let angle = elapsed * SATELLITE_ORBIT_RATE * rotation_speed + offset;
        assert!((sat.x - angle.cos() * radius).abs() < 1e-5);
        assert!((sat.z - angle.sin() * radius).abs() < 1e-5);
        let bob = (elapsed * SATELLITE_BOB_RATE * rotation_speed + offset).sin()
            * SATELLITE_BOB_AMPLITUDE;
        assert!((sat.y - bob).abs() < 1e-5);
    }
    assert_eq!(visual.satellite_positions.len(), SATELLITE_COUNT);
}

#[test]
fn group_yaw_follows_rotation_speed() {
    let mut settings = Settings::default();
    settings.set_cluster_count(1);
    settings.set_rotation_speed(1.0);
    let mut engine = FieldEngine::new(settings, 17);
    engine.clusters_mut()[0].offsets.rotation = 0.0;

    engine.update(4.0, FAR_AWAY);
    let yaw = engine.clusters()[0].visual.group_yaw;
    assert!((yaw - 4.0 * GROUP_YAW_RATE).abs() < 1e-6);
}
