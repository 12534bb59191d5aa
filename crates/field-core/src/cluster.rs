//! One animated cluster: immutable creation-time state, the velocity that
//! persists across frames, and the derived visual the renderer reads.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::constants::*;

/// Phase offsets sampled once at creation. They desynchronize clusters so
/// the field does not pulse in unison.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseOffsets {
    /// Color cycle offset in [0, 1).
    pub color: f32,
    /// Scale cycle offset in [0, 1).
    pub scale: f32,
    /// Rotation/drift offset in radians, [0, 2π).
    pub rotation: f32,
}

/// Color pair written by the driver each frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartColor {
    pub color: Vec3,
    pub emissive: Vec3,
}

/// Derived render state for one cluster. This is the whole surface a
/// renderer needs: it owns the meshes and materials, the core only writes
/// transforms and colors here.
///
/// Satellite positions are group-local; the renderer applies the group
/// transform (yaw, uniform scale, translation) on top, mirroring a
/// parent/child scene graph.
#[derive(Clone, Debug)]
pub struct ClusterVisual {
    /// Final rendered position: base + drift + avoidance + velocity.
    pub position: Vec3,
    /// Uniform scale applied to the whole group.
    pub scale: f32,
    pub group_yaw: f32,
    pub knot_pitch: f32,
    pub knot_roll: f32,
    pub ring_roll: f32,
    pub shell_yaw: f32,
    pub knot: PartColor,
    pub ring: PartColor,
    pub shell: PartColor,
    pub satellites: PartColor,
    pub satellite_positions: [Vec3; SATELLITE_COUNT],
}

impl ClusterVisual {
    fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: 1.0,
            group_yaw: 0.0,
            knot_pitch: 0.0,
            knot_roll: 0.0,
            ring_roll: 0.0,
            shell_yaw: 0.0,
            knot: PartColor::default(),
            ring: PartColor::default(),
            shell: PartColor::default(),
            satellites: PartColor::default(),
            satellite_positions: [Vec3::ZERO; SATELLITE_COUNT],
        }
    }
}

/// One independently animated unit.
pub struct Cluster {
    /// Fixed anchor inside the spawn volume; never moves after creation.
    pub base_position: Vec3,
    /// Accumulated impulse, decayed geometrically every frame.
    pub velocity: Vec3,
    /// Oscillation amplitudes (x, y).
    pub drift: Vec2,
    /// Oscillation angular rates (x, y).
    pub speed: Vec2,
    pub offsets: PhaseOffsets,
    /// Written by the driver on every update.
    pub visual: ClusterVisual,
}

impl Cluster {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let base_position = Vec3::new(
            rng.gen_range(-SPAWN_SPREAD_X / 2.0..=SPAWN_SPREAD_X / 2.0),
            rng.gen_range(-SPAWN_SPREAD_Y / 2.0..=SPAWN_SPREAD_Y / 2.0),
            rng.gen_range(-SPAWN_SPREAD_Z / 2.0..=SPAWN_SPREAD_Z / 2.0),
        );
        Self {
            base_position,
            velocity: Vec3::ZERO,
            drift: Vec2::new(
                rng.gen_range(DRIFT_X_RANGE.0..=DRIFT_X_RANGE.1),
                rng.gen_range(DRIFT_Y_RANGE.0..=DRIFT_Y_RANGE.1),
            ),
            speed: Vec2::new(
                rng.gen_range(SPEED_X_RANGE.0..=SPEED_X_RANGE.1),
                rng.gen_range(SPEED_Y_RANGE.0..=SPEED_Y_RANGE.1),
            ),
            offsets: PhaseOffsets {
                color: rng.gen::<f32>(),
                scale: rng.gen::<f32>(),
                rotation: rng.gen::<f32>() * std::f32::consts::TAU,
            },
            visual: ClusterVisual::at(base_position),
        }
    }

    /// Position from oscillatory motion alone, before interaction forces.
    pub fn drift_position(&self, elapsed: f32) -> Vec3 {
        Vec3::new(
            self.base_position.x
                + (elapsed * self.speed.x + self.offsets.rotation).cos() * self.drift.x,
            self.base_position.y
                + (elapsed * self.speed.y + self.offsets.rotation).sin() * self.drift.y,
            self.base_position.z,
        )
    }
}
