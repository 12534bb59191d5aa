// Shared tuning constants for the cluster field.

// Cursor interaction
pub const AVOID_RADIUS: f32 = 2.5; // world units
pub const AVOID_STRENGTH: f32 = 2.0;
pub const BLAST_RADIUS: f32 = 2.2;
pub const BLAST_STRENGTH: f32 = 1.6;
pub const BLAST_DAMPING: f32 = 0.92; // geometric velocity decay per frame

// Spawn volume for cluster anchors (full width per axis, centered on origin)
pub const SPAWN_SPREAD_X: f32 = 4.0;
pub const SPAWN_SPREAD_Y: f32 = 2.4;
pub const SPAWN_SPREAD_Z: f32 = 1.2;

// Oscillation amplitude / angular rate sampling ranges
pub const DRIFT_X_RANGE: (f32, f32) = (0.3, 0.8);
pub const DRIFT_Y_RANGE: (f32, f32) = (0.2, 0.6);
pub const SPEED_X_RANGE: (f32, f32) = (0.2, 0.5);
pub const SPEED_Y_RANGE: (f32, f32) = (0.25, 0.6);

// Base rotation rates per part (radians/sec before the rotation-speed
// multiplier). The shell counter-rotates.
pub const GROUP_YAW_RATE: f32 = 0.25;
pub const KNOT_PITCH_RATE: f32 = 0.5;
pub const KNOT_ROLL_RATE: f32 = 0.35;
pub const RING_ROLL_RATE: f32 = 0.6;
pub const SHELL_YAW_RATE: f32 = -0.15;

// Satellite markers orbit the group origin in group-local space
pub const SATELLITE_COUNT: usize = 9;
pub const SATELLITE_ORBIT_RATE: f32 = 0.6;
pub const SATELLITE_BOB_RATE: f32 = 1.1;
pub const SATELLITE_BOB_AMPLITUDE: f32 = 0.8;
pub const SATELLITE_BASE_RADIUS: f32 = 3.0;
pub const SATELLITE_RADIUS_STEP: f32 = 0.35; // per index mod 3
pub const SATELLITE_ANGLE_STEP: f32 = 0.35; // per index

// Emissive companion = mixed color scaled by this factor
pub const EMISSIVE_FACTOR: f32 = 0.2;

// Color phase offsets per part, applied modulo 1 to the shared color phase
pub const RING_PHASE_OFFSET: f32 = 0.2;
pub const SHELL_PHASE_OFFSET: f32 = 0.4;
pub const SATELLITES_PHASE_OFFSET: f32 = 0.6;

// Default camera rig
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.2, 7.0];
pub const CAMERA_FOVY_DEG: f32 = 55.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
