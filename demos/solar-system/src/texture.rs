/// Procedural planet texture: an off-centre radial gradient with noise.
///
/// Pure function of (color, size, seed) so the host can upload the bytes
/// as an RGBA texture and tests can check determinism.

use glam::Vec2;
use orrery_engine::{Color, Rng};

/// Brightness of the gradient's outer edge relative to the base color.
pub const EDGE_SHADE: f32 = 0.7;
/// Per-pixel noise spans `±NOISE_AMPLITUDE` on the 0..255 scale.
pub const NOISE_AMPLITUDE: f32 = 15.0;

/// RGBA8 pixels, row-major, `size * size * 4` bytes. Empty when that
/// byte count does not fit in `usize`.
pub fn planet_texture(color: u32, size: u32, seed: u64) -> Vec<u8> {
    let side = size as usize;
    let Some(len) = side.checked_mul(side).and_then(|n| n.checked_mul(4)) else {
        log::warn!("texture size {} overflows the pixel buffer", size);
        return Vec::new();
    };
    let size_f = size as f32;
    let base = Color::from_hex(color);
    let edge = base.scaled(EDGE_SHADE);
    let focus = Vec2::splat(size_f * 0.3);
    let centre = Vec2::splat(size_f * 0.5);
    let radius = size_f * 0.5;

    let mut rng = Rng::new(seed);
    let mut pixels = Vec::with_capacity(len);
    for y in 0..size {
        for x in 0..size {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let t = gradient_t(p, focus, centre, radius);
            let noise = (rng.next_f32() - 0.5) * NOISE_AMPLITUDE * 2.0;
            let channel = |a: f32, b: f32| {
                let v = (a + (b - a) * t) * 255.0 + noise;
                v.round().clamp(0.0, 255.0) as u8
            };
            pixels.push(channel(base.r, edge.r));
            pixels.push(channel(base.g, edge.g));
            pixels.push(channel(base.b, edge.b));
            pixels.push(255);
        }
    }
    pixels
}

/// Position of `p` in a two-point radial gradient that grows from a point
/// at `focus` to a circle of `radius` around `centre`, clamped to [0, 1].
///
/// Solves |p - focus - (centre - focus)·t| = radius·t for the positive root.
fn gradient_t(p: Vec2, focus: Vec2, centre: Vec2, radius: f32) -> f32 {
    let d = centre - focus;
    let q = p - focus;
    let a = d.length_squared() - radius * radius;
    let qd = q.dot(d);
    if a.abs() < f32::EPSILON {
        return 0.0;
    }
    let disc = (qd * qd - a * q.length_squared()).max(0.0);
    ((qd - disc.sqrt()) / a).clamp(0.0, 1.0)
}
