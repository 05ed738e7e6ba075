/// Orbital state store and stepper.
///
/// Orbits are independent circles around the origin. Each body keeps an
/// unbounded angle (never normalized), a user speed multiplier and an
/// unbounded axial spin. Nothing here knows about the engine scene.

use std::f32::consts::TAU;

use glam::Vec3;
use orrery_engine::Rng;

use crate::bodies::{BodyDefinition, BodyId};
use crate::error::OrreryError;

/// Mutable simulation state of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    /// Orbital angle in radians.
    pub angle: f32,
    /// Active speed multiplier.
    pub speed: f32,
    /// Axial spin angle in radians.
    pub spin: f32,
}

#[derive(Debug, Clone)]
struct Slot {
    state: OrbitalState,
    base_speed: f32,
    rotation_speed: f32,
}

/// Owns every body's `OrbitalState`. Only `step` advances angles.
#[derive(Debug, Clone, Default)]
pub struct OrbitalStore {
    slots: Vec<Slot>,
}

impl OrbitalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body with a random starting angle in [0, 2π) and its base speed.
    pub fn create(&mut self, body: &BodyDefinition, rng: &mut Rng) -> BodyId {
        let angle = (rng.next_f32() * TAU).rem_euclid(TAU);
        self.slots.push(Slot {
            state: OrbitalState {
                angle,
                speed: body.base_speed,
                spin: 0.0,
            },
            base_speed: body.base_speed,
            rotation_speed: body.rotation_speed,
        });
        BodyId(self.slots.len() - 1)
    }

    /// Set a body's speed multiplier. Only non-negativity is checked; the UI
    /// clamps to its own bounds.
    pub fn set_speed(&mut self, id: BodyId, speed: f32) -> Result<(), OrreryError> {
        if !(speed >= 0.0) {
            return Err(OrreryError::NegativeSpeed { index: id.0, speed });
        }
        let slot = self.slots.get_mut(id.0).ok_or(OrreryError::UnknownBody(id.0))?;
        slot.state.speed = speed;
        Ok(())
    }

    /// Restore a body's base speed. The angle is left alone.
    pub fn reset(&mut self, id: BodyId) -> Result<(), OrreryError> {
        let slot = self.slots.get_mut(id.0).ok_or(OrreryError::UnknownBody(id.0))?;
        slot.state.speed = slot.base_speed;
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for slot in &mut self.slots {
            slot.state.speed = slot.base_speed;
        }
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitalState> {
        self.slots.get(id.0).map(|s| &s.state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &OrbitalState)> {
        self.slots.iter().enumerate().map(|(i, s)| (BodyId(i), &s.state))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Advance every body by `dt` seconds. Called only while unpaused.
///
/// `dt` is not clamped: a long gap between frames produces one large step.
/// Non-positive or NaN deltas leave the store untouched.
pub fn step(store: &mut OrbitalStore, dt: f32, rate_scale: f32) {
    if !(dt > 0.0) {
        return;
    }
    for slot in &mut store.slots {
        slot.state.angle += dt * slot.state.speed * rate_scale;
        slot.state.spin += dt * slot.rotation_speed;
    }
}

/// Vertical wobble as a function of angle alone.
pub fn inclination(angle: f32, amplitude: f32) -> f32 {
    (angle * 2.0).sin() * amplitude
}

/// Body position in world space: the orbit group turned by `angle` about
/// +Y carries the body sitting at `(distance, inclination, 0)`.
pub fn world_position(distance: f32, angle: f32, amplitude: f32) -> Vec3 {
    Vec3::new(
        distance * angle.cos(),
        inclination(angle, amplitude),
        -distance * angle.sin(),
    )
}
