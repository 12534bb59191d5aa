//! Scalar easing helpers shared by the palette mixer and the interaction
//! forces. `smoothstep`/`smootherstep` normalize the input into `[min, max]`
//! before easing, so the boundary evaluates to exactly 0/1 (inclusive-zero,
//! no discontinuity at the edge of an interaction radius).

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease with zero first derivative at both ends.
#[inline]
pub fn smoothstep(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    let t = (x - min) / (max - min);
    t * t * (3.0 - 2.0 * t)
}

/// Quintic ease with zero first and second derivative at both ends.
#[inline]
pub fn smootherstep(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    let t = (x - min) / (max - min);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
