//! Named color palettes and the phase-driven mixer.
//!
//! Every palette carries one ordered 3-color ramp per cluster part. A phase
//! in `[0, 1)` blends ramp\[0\]→ramp\[1\] over the first half and
//! ramp\[1\]→ramp\[2\] over the second, each half eased through a quintic
//! smootherstep so both halves meet at ramp\[1\] with zero derivative and no
//! visible seam.

use std::str::FromStr;

use glam::Vec3;

use crate::constants::EMISSIVE_FACTOR;
use crate::ease::smootherstep;

/// Selector into the fixed palette registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteName {
    Psychedelic,
    Pastel,
    Primary,
    Neon,
    Mono,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown palette `{0}`")]
pub struct UnknownPalette(String);

impl PaletteName {
    pub const ALL: [PaletteName; 5] = [
        PaletteName::Psychedelic,
        PaletteName::Pastel,
        PaletteName::Primary,
        PaletteName::Neon,
        PaletteName::Mono,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteName::Psychedelic => "psychedelic",
            PaletteName::Pastel => "pastel",
            PaletteName::Primary => "primary",
            PaletteName::Neon => "neon",
            PaletteName::Mono => "mono",
        }
    }

    /// Next registry entry, wrapping; used by cycling controls.
    pub fn next(self) -> PaletteName {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The color ramps registered under this name.
    pub fn colors(self) -> Palette {
        match self {
            PaletteName::Psychedelic => Palette {
                knot: ramp(0x7fe3ff, 0x5bffc9, 0xff8fe0),
                ring: ramp(0xfff0a6, 0x9be8ff, 0xd98bff),
                shell: ramp(0xd98bff, 0x5bffc9, 0x7fe3ff),
                satellites: ramp(0x7fe3ff, 0xb0f1ff, 0xff8fe0),
            },
            PaletteName::Pastel => Palette {
                knot: ramp(0xffd6e8, 0xc8f2ff, 0xd9d3ff),
                ring: ramp(0xfff1c9, 0xd5f3e2, 0xffe0f0),
                shell: ramp(0xe6d9ff, 0xcfe9ff, 0xffdce6),
                satellites: ramp(0xd4f0ff, 0xe6dcff, 0xffe7cf),
            },
            PaletteName::Primary => Palette {
                knot: ramp(0xff3b30, 0x34c759, 0x007aff),
                ring: ramp(0xff9f0a, 0xffd60a, 0xaf52de),
                shell: ramp(0x0a84ff, 0x30d158, 0xff375f),
                satellites: ramp(0xff453a, 0x64d2ff, 0xffd60a),
            },
            PaletteName::Neon => Palette {
                knot: ramp(0x00f7ff, 0x39ff14, 0xff4dff),
                ring: ramp(0xffea00, 0x00e5ff, 0xff0080),
                shell: ramp(0x8c52ff, 0x00ffcc, 0xff4dff),
                satellites: ramp(0x00f7ff, 0x39ff14, 0xffea00),
            },
            PaletteName::Mono => Palette {
                knot: ramp(0xf5f7ff, 0xc7d2ff, 0x8f9bff),
                ring: ramp(0xe9edf8, 0xb7c0e6, 0x6d75b8),
                shell: ramp(0xdfe3f5, 0x9ea6c9, 0x6b7396),
                satellites: ramp(0xeef1fb, 0xc0c8e9, 0x8892c2),
            },
        }
    }
}

impl FromStr for PaletteName {
    type Err = UnknownPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPalette(s.to_owned()))
    }
}

/// One 3-color ramp per cluster part.
#[derive(Clone, Debug)]
pub struct Palette {
    pub knot: [Vec3; 3],
    pub ring: [Vec3; 3],
    pub shell: [Vec3; 3],
    pub satellites: [Vec3; 3],
}

/// Blend a ramp at phase `t` in `[0, 1)`. Returns the mixed color and its
/// dimmed emissive companion.
pub fn mix(colors: &[Vec3; 3], t: f32) -> (Vec3, Vec3) {
    let color = if t < 0.5 {
        let local = smootherstep(t * 2.0, 0.0, 1.0);
        colors[0].lerp(colors[1], local)
    } else {
        let local = smootherstep((t - 0.5) * 2.0, 0.0, 1.0);
        colors[1].lerp(colors[2], local)
    };
    (color, color * EMISSIVE_FACTOR)
}

#[inline]
fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32,
        ((hex >> 8) & 0xff) as f32,
        (hex & 0xff) as f32,
    ) / 255.0
}

#[inline]
fn ramp(a: u32, b: u32, c: u32) -> [Vec3; 3] {
    [rgb(a), rgb(b), rgb(c)]
}
