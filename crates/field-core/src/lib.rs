//! Simulation core for an interactive field of animated cluster sculptures.
//!
//! Each cluster is one decorative unit made of four parts (a knot, an
//! orbiting ring, a wireframe shell and nine satellite markers). The engine
//! advances every cluster once per frame: palette-driven color blending,
//! scale oscillation, positional drift, cursor avoidance and a damped
//! impulse reaction to clicks. Rendering, windowing and input sources live
//! in the frontend crate; this crate only evolves state and hands out
//! derived per-part transforms and colors.

pub mod camera;
pub mod cluster;
pub mod constants;
pub mod ease;
pub mod engine;
pub mod palette;
pub mod pointer;
pub mod settings;

pub use camera::*;
pub use cluster::*;
pub use constants::*;
pub use ease::*;
pub use engine::*;
pub use palette::*;
pub use pointer::*;
pub use settings::*;
