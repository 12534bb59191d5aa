//! Maps pointer coordinates to a point on the fixed z = 0 reference plane.
//!
//! Pointer events write NDC coordinates here asynchronously (last write
//! wins, stale reads are fine); the driver re-intersects once per frame.

use glam::{Vec2, Vec3};

use crate::camera::{ndc_to_world_ray, Camera};

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    ndc: Vec2,
    world_point: Vec3,
}

impl PointerTracker {
    /// Record the latest pointer position in normalized device coordinates.
    pub fn set_ndc(&mut self, x: f32, y: f32) {
        self.ndc = Vec2::new(x, y);
    }

    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Re-intersect the pointer ray with the reference plane. If the ray
    /// misses (parallel, or the plane is behind the eye) the previous valid
    /// point is retained; continuity of motion beats exactness here.
    pub fn update(&mut self, camera: &Camera) {
        let (origin, dir) = ndc_to_world_ray(camera, self.ndc);
        if let Some(point) = ray_plane_z0(origin, dir) {
            self.world_point = point;
        }
    }

    /// Last valid intersection with the reference plane.
    pub fn world_point(&self) -> Vec3 {
        self.world_point
    }
}

/// Intersect a ray with the z = 0 plane.
pub fn ray_plane_z0(origin: Vec3, dir: Vec3) -> Option<Vec3> {
    if dir.z.abs() < 1e-6 {
        return None;
    }
    let t = -origin.z / dir.z;
    (t >= 0.0).then(|| origin + dir * t)
}
