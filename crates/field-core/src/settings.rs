//! Live-tunable parameters, mutated only through clamping setters so the
//! animation driver never observes an invalid combination.

use rand::Rng;

use crate::palette::PaletteName;

// Declared control ranges (min, max, step). The randomizer samples inside
// them; the setters clamp to them.
pub const CLUSTER_COUNT_MAX: usize = 500;
pub const COLOR_SPEED_RANGE: (f32, f32, f32) = (0.05, 1.0, 0.05);
pub const SCALE_MIN_RANGE: (f32, f32, f32) = (0.1, 1.2, 0.05);
pub const SCALE_MAX_RANGE: (f32, f32, f32) = (0.3, 2.0, 0.05);
pub const SCALE_SPEED_RANGE: (f32, f32, f32) = (0.05, 1.0, 0.05);
pub const ROTATION_SPEED_RANGE: (f32, f32, f32) = (0.0, 2.0, 0.05);

// Randomize caps scale-min lower than its slider maximum so a fresh
// scale-max always has room above it.
const RANDOM_SCALE_MIN_MAX: f32 = 1.1;
const RANDOM_AVOID_PROBABILITY: f64 = 0.6;

/// Process-wide tunables read by the driver every frame.
///
/// Fields are private; every mutation goes through a setter that keeps the
/// `scale_min <= scale_max` invariant by pushing the other bound instead of
/// failing.
#[derive(Clone, Debug)]
pub struct Settings {
    cluster_count: usize,
    color_speed: f32,
    scale_min: f32,
    scale_max: f32,
    scale_speed: f32,
    rotation_speed: f32,
    avoid_enabled: bool,
    palette: PaletteName,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cluster_count: 100,
            color_speed: 0.5,
            scale_min: 1.2,
            scale_max: 1.4,
            scale_speed: 0.3,
            rotation_speed: 2.0,
            avoid_enabled: true,
            palette: PaletteName::Primary,
        }
    }
}

impl Settings {
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }
    pub fn color_speed(&self) -> f32 {
        self.color_speed
    }
    pub fn scale_min(&self) -> f32 {
        self.scale_min
    }
    pub fn scale_max(&self) -> f32 {
        self.scale_max
    }
    pub fn scale_speed(&self) -> f32 {
        self.scale_speed
    }
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }
    pub fn avoid_enabled(&self) -> bool {
        self.avoid_enabled
    }
    pub fn palette(&self) -> PaletteName {
        self.palette
    }

    /// Zero is valid and yields an empty pool. The engine, not this struct,
    /// rebuilds the pool when the count changes.
    pub fn set_cluster_count(&mut self, count: usize) {
        self.cluster_count = count.min(CLUSTER_COUNT_MAX);
    }

    pub fn set_color_speed(&mut self, v: f32) {
        self.color_speed = v.clamp(COLOR_SPEED_RANGE.0, COLOR_SPEED_RANGE.1);
    }

    pub fn set_scale_min(&mut self, v: f32) {
        self.scale_min = v.clamp(SCALE_MIN_RANGE.0, SCALE_MIN_RANGE.1);
        if self.scale_min > self.scale_max {
            self.scale_max = self.scale_min;
        }
    }

    pub fn set_scale_max(&mut self, v: f32) {
        self.scale_max = v.clamp(SCALE_MAX_RANGE.0, SCALE_MAX_RANGE.1);
        if self.scale_max < self.scale_min {
            self.scale_min = self.scale_max;
        }
    }

    pub fn set_scale_speed(&mut self, v: f32) {
        self.scale_speed = v.clamp(SCALE_SPEED_RANGE.0, SCALE_SPEED_RANGE.1);
    }

    pub fn set_rotation_speed(&mut self, v: f32) {
        self.rotation_speed = v.clamp(ROTATION_SPEED_RANGE.0, ROTATION_SPEED_RANGE.1);
    }

    pub fn set_avoid_enabled(&mut self, enabled: bool) {
        self.avoid_enabled = enabled;
    }

    pub fn set_palette(&mut self, palette: PaletteName) {
        self.palette = palette;
    }

    /// Resample every tunable inside its declared range. `scale_max` is
    /// drawn from `scale_min..` so the invariant holds by construction.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.cluster_count = rng.gen_range(1..=CLUSTER_COUNT_MAX);
        self.color_speed = stepped(rng, COLOR_SPEED_RANGE);
        self.scale_min = stepped(rng, (SCALE_MIN_RANGE.0, RANDOM_SCALE_MIN_MAX, SCALE_MIN_RANGE.2));
        self.scale_max = stepped(rng, (self.scale_min, SCALE_MAX_RANGE.1, SCALE_MAX_RANGE.2));
        self.scale_speed = stepped(rng, SCALE_SPEED_RANGE);
        self.rotation_speed = stepped(rng, ROTATION_SPEED_RANGE);
        self.avoid_enabled = rng.gen_bool(RANDOM_AVOID_PROBABILITY);
        let i = rng.gen_range(0..PaletteName::ALL.len());
        self.palette = PaletteName::ALL[i];
    }
}

/// Uniform sample snapped to the control's step grid. Clamped so float
/// accumulation never lands just past `max`.
fn stepped<R: Rng>(rng: &mut R, (min, max, step): (f32, f32, f32)) -> f32 {
    let steps = ((max - min) / step).round().max(0.0) as u32;
    (min + rng.gen_range(0..=steps) as f32 * step).min(max)
}
