use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod backdrop;
pub mod bodies;
pub mod camera;
pub mod config;
pub mod error;
pub mod game;
pub mod interaction;
pub mod orbit;
pub mod perf;
pub mod texture;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

/// RGBA8 surface texture for a planet color, `size × size` pixels.
#[wasm_bindgen]
pub fn planet_texture(color: u32, size: u32, seed: u32) -> Vec<u8> {
    texture::planet_texture(color, size, seed as u64)
}
