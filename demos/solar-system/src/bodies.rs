/// Body registry: the sun and the eight planets.
///
/// Distances and radii are in scene units, not to scale. Speeds are in UI
/// units; `orbit::step` turns them into radians per second.

use std::collections::HashSet;

use crate::error::OrreryError;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

/// Index of a body in the registry (and in the orbital store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 3.0;
pub const SUN_COLOR: u32 = 0xffff00;
pub const SUN_OPACITY: f32 = 0.9;
pub const SUN_GLOW_RADIUS: f32 = 4.0;
pub const SUN_GLOW_COLOR: u32 = 0xff6600;
pub const SUN_GLOW_OPACITY: f32 = 0.3;

// ── Orbit guides ─────────────────────────────────────────────────────

/// Guide ring spans `distance ± ORBIT_GUIDE_HALF_WIDTH`.
pub const ORBIT_GUIDE_HALF_WIDTH: f32 = 0.1;
pub const ORBIT_GUIDE_SEGMENTS: u32 = 64;
pub const ORBIT_GUIDE_COLOR: u32 = 0x444444;
pub const ORBIT_GUIDE_OPACITY: f32 = 0.3;

pub const PLANET_SHININESS: f32 = 30.0;

/// Extra geometry attached to a body, resolved generically when the scene
/// manifest is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoration {
    /// Flat ring around the body, radii relative to the body's radius.
    Ring {
        inner_offset: f32,
        outer_offset: f32,
        segments: u32,
        color: u32,
        opacity: f32,
    },
    /// Translucent shell slightly larger than the body.
    Atmosphere { scale: f32, color: u32, opacity: f32 },
}

/// Immutable parameters of one orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDefinition {
    pub name: &'static str,
    pub radius: f32,
    /// Orbital radius around the origin.
    pub distance: f32,
    /// Default speed multiplier.
    pub base_speed: f32,
    /// Axial spin in radians per second.
    pub rotation_speed: f32,
    /// Packed `0xRRGGBB`.
    pub color: u32,
    pub info: &'static str,
    pub decorations: &'static [Decoration],
}

const SATURN_RING: [Decoration; 1] = [Decoration::Ring {
    inner_offset: 0.3,
    outer_offset: 0.8,
    segments: 32,
    color: 0xd2b48c,
    opacity: 0.7,
}];

const EARTH_ATMOSPHERE: [Decoration; 1] = [Decoration::Atmosphere {
    scale: 1.05,
    color: 0x6ba8ff,
    opacity: 0.2,
}];

pub static PLANETS: [BodyDefinition; PLANET_COUNT] = [
    BodyDefinition {
        name: "Mercury",
        radius: 0.4,
        distance: 8.0,
        base_speed: 1.2,
        rotation_speed: 0.02,
        color: 0x8c7853,
        info: "Closest planet to the Sun. Very hot during the day, very cold at night.",
        decorations: &[],
    },
    BodyDefinition {
        name: "Venus",
        radius: 0.7,
        distance: 12.0,
        base_speed: 1.0,
        rotation_speed: 0.018,
        color: 0xffc649,
        info: "Hottest planet in our solar system due to its thick atmosphere.",
        decorations: &[],
    },
    BodyDefinition {
        name: "Earth",
        radius: 0.8,
        distance: 16.0,
        base_speed: 0.8,
        rotation_speed: 0.016,
        color: 0x6b93d6,
        info: "Our home planet, the only known planet with life.",
        decorations: &EARTH_ATMOSPHERE,
    },
    BodyDefinition {
        name: "Mars",
        radius: 0.6,
        distance: 20.0,
        base_speed: 0.6,
        rotation_speed: 0.015,
        color: 0xc1440e,
        info: "The Red Planet, known for its iron oxide surface.",
        decorations: &[],
    },
    BodyDefinition {
        name: "Jupiter",
        radius: 2.5,
        distance: 28.0,
        base_speed: 0.4,
        rotation_speed: 0.012,
        color: 0xd8ca9d,
        info: "Largest planet in our solar system, a gas giant.",
        decorations: &[],
    },
    BodyDefinition {
        name: "Saturn",
        radius: 2.2,
        distance: 36.0,
        base_speed: 0.3,
        rotation_speed: 0.010,
        color: 0xfad5a5,
        info: "Famous for its beautiful ring system.",
        decorations: &SATURN_RING,
    },
    BodyDefinition {
        name: "Uranus",
        radius: 1.8,
        distance: 44.0,
        base_speed: 0.2,
        rotation_speed: 0.008,
        color: 0x4fd0e7,
        info: "An ice giant that rotates on its side.",
        decorations: &[],
    },
    BodyDefinition {
        name: "Neptune",
        radius: 1.7,
        distance: 52.0,
        base_speed: 0.1,
        rotation_speed: 0.006,
        color: 0x4b70dd,
        info: "Farthest planet from the Sun, very windy and cold.",
        decorations: &[],
    },
];

/// Check registry invariants: non-empty, positive dimensions, unique names.
pub fn validate(bodies: &[BodyDefinition]) -> Result<(), OrreryError> {
    if bodies.is_empty() {
        return Err(OrreryError::EmptyRegistry);
    }
    let mut seen = HashSet::new();
    for body in bodies {
        for (field, value) in [("radius", body.radius), ("distance", body.distance)] {
            // Written as !(v > 0) so NaN is rejected too.
            if !(value > 0.0) {
                return Err(OrreryError::NonPositiveDimension {
                    name: body.name.to_string(),
                    field,
                    value,
                });
            }
        }
        if !seen.insert(body.name) {
            return Err(OrreryError::DuplicateBody(body.name.to_string()));
        }
    }
    Ok(())
}
