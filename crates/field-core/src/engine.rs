//! The per-frame driver: owns the cluster pool, advances color, scale,
//! drift, rotation and interaction forces for every cluster, and exposes
//! the setter path the control surface goes through.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cluster::{Cluster, PartColor};
use crate::constants::*;
use crate::ease::{lerp, smoothstep, smootherstep};
use crate::palette::mix;
use crate::settings::Settings;

const TAU: f32 = std::f32::consts::TAU;

pub struct FieldEngine {
    settings: Settings,
    clusters: Vec<Cluster>,
    rng: StdRng,
}

impl FieldEngine {
    /// Build an engine and its initial pool. The seed makes every sampled
    /// cluster reproducible for a given host.
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut engine = Self {
            settings,
            clusters: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        engine.rebuild();
        engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access for scalar tunables. Count changes must go through
    /// [`FieldEngine::set_cluster_count`] so the pool follows.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn clusters_mut(&mut self) -> &mut [Cluster] {
        &mut self.clusters
    }

    /// Discard every cluster and sample a fresh pool. No partial state
    /// carries over; every rebuild is a full reset of the field's
    /// randomness.
    pub fn rebuild(&mut self) {
        let count = self.settings.cluster_count();
        self.clusters.clear();
        self.clusters.reserve(count);
        for _ in 0..count {
            let cluster = Cluster::new(&mut self.rng);
            self.clusters.push(cluster);
        }
        log::debug!("rebuilt pool: {count} clusters");
    }

    /// Resize the pool; a count of 0 yields an empty, valid pool.
    pub fn set_cluster_count(&mut self, count: usize) {
        self.settings.set_cluster_count(count);
        self.rebuild();
    }

    /// Resample every tunable inside its declared range, then rebuild the
    /// pool with the new count.
    pub fn randomize(&mut self) {
        self.settings.randomize(&mut self.rng);
        log::info!("randomized settings: {:?}", self.settings);
        self.rebuild();
    }

    /// Discrete impulse from a pointer press. Tested against the final
    /// rendered position from the most recent frame; the added velocity
    /// decays through [`BLAST_DAMPING`] on subsequent updates.
    pub fn blast(&mut self, cursor: Vec3) {
        for cluster in &mut self.clusters {
            let to_cluster = cluster.visual.position - cursor;
            let distance = to_cluster.length();
            if distance < BLAST_RADIUS {
                let strength =
                    smootherstep(BLAST_RADIUS - distance, 0.0, BLAST_RADIUS) * BLAST_STRENGTH;
                // A press dead-center has no separation direction; push the
                // cluster toward the camera at full strength.
                let dir = if distance > 1e-6 {
                    to_cluster / distance
                } else {
                    Vec3::Z
                };
                cluster.velocity += dir * strength;
            }
        }
    }

    /// Advance every cluster to `elapsed` seconds. `cursor` is the pointer's
    /// world-space point on the reference plane, sampled by the host at the
    /// start of the frame.
    pub fn update(&mut self, elapsed: f32, cursor: Vec3) {
        let palette = self.settings.palette().colors();
        let color_speed = self.settings.color_speed();
        let scale_speed = self.settings.scale_speed();
        let scale_min = self.settings.scale_min();
        let scale_max = self.settings.scale_max();
        let rotation_speed = self.settings.rotation_speed();
        let avoid_enabled = self.settings.avoid_enabled();

        for cluster in &mut self.clusters {
            let color_phase =
                ((elapsed * color_speed + cluster.offsets.color * TAU).sin() + 1.0) / 2.0;

            let (color, emissive) = mix(&palette.knot, color_phase);
            cluster.visual.knot = PartColor { color, emissive };
            let (color, emissive) = mix(&palette.ring, (color_phase + RING_PHASE_OFFSET) % 1.0);
            cluster.visual.ring = PartColor { color, emissive };
            let (color, emissive) = mix(&palette.shell, (color_phase + SHELL_PHASE_OFFSET) % 1.0);
            cluster.visual.shell = PartColor { color, emissive };
            let (color, emissive) = mix(
                &palette.satellites,
                (color_phase + SATELLITES_PHASE_OFFSET) % 1.0,
            );
            cluster.visual.satellites = PartColor { color, emissive };

            let scale_phase =
                ((elapsed * scale_speed + cluster.offsets.scale * TAU).sin() + 1.0) / 2.0;
            cluster.visual.scale = lerp(scale_min, scale_max, scale_phase);

            // Avoidance reads the drift position; the blast test above reads
            // the final position. The asymmetry is intentional.
            let mut position = cluster.drift_position(elapsed);

            if avoid_enabled {
                let to_cluster = position - cursor;
                let distance = to_cluster.length();
                if distance < AVOID_RADIUS {
                    let strength = smoothstep(AVOID_RADIUS - distance, 0.0, AVOID_RADIUS);
                    let dir = if distance > 1e-6 {
                        to_cluster / distance
                    } else {
                        Vec3::Z
                    };
                    position += dir * (strength * AVOID_STRENGTH);
                }
            }

            cluster.velocity *= BLAST_DAMPING;
            position += cluster.velocity;
            cluster.visual.position = position;

            cluster.visual.group_yaw =
                elapsed * GROUP_YAW_RATE * rotation_speed + cluster.offsets.rotation;
            cluster.visual.knot_pitch =
                elapsed * KNOT_PITCH_RATE * rotation_speed + cluster.offsets.rotation;
            cluster.visual.knot_roll = elapsed * KNOT_ROLL_RATE * rotation_speed;
            cluster.visual.ring_roll =
                elapsed * RING_ROLL_RATE * rotation_speed + cluster.offsets.rotation;
            cluster.visual.shell_yaw = elapsed * SHELL_YAW_RATE * rotation_speed;

            for (i, sat) in cluster.visual.satellite_positions.iter_mut().enumerate() {
                let offset = i as f32 * SATELLITE_ANGLE_STEP + cluster.offsets.rotation;
                let radius = SATELLITE_BASE_RADIUS + (i % 3) as f32 * SATELLITE_RADIUS_STEP;
                let angle = elapsed * SATELLITE_ORBIT_RATE * rotation_speed + offset;
                sat.x = angle.cos() * radius;
                sat.z = angle.sin() * radius;
                sat.y =
                    (elapsed * SATELLITE_BOB_RATE * rotation_speed + offset).sin()
                        * SATELLITE_BOB_AMPLITUDE;
            }
        }
    }
}
