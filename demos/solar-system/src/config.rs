use orrery_engine::Easing;
use serde::{Deserialize, Serialize};

/// Parameters of the auto-orbit camera path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoOrbitParams {
    pub base_radius: f32,
    pub radius_amplitude: f32,
    pub base_height: f32,
    pub height_amplitude: f32,
}

impl Default for AutoOrbitParams {
    fn default() -> Self {
        Self {
            base_radius: 60.0,
            radius_amplitude: 20.0,
            base_height: 20.0,
            height_amplitude: 10.0,
        }
    }
}

/// Tunables for the solar-system scene. Every field is optional in JSON;
/// missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Converts UI speed units into radians per second.
    pub orbit_rate_scale: f32,
    /// Peak vertical wobble of a planet over its orbit.
    pub inclination_amplitude: f32,
    /// Sun spin in radians per second.
    pub sun_spin_rate: f32,
    pub transition_duration_ms: f64,
    pub transition_easing: Easing,
    pub auto_orbit: AutoOrbitParams,
    /// Camera position restored by the reset action. Looks at the origin.
    pub home_position: [f32; 3],
    pub star_count: usize,
    /// Side of the cube the stars are scattered in.
    pub star_spread: f32,
    /// Below this frame rate the host is asked to reduce quality.
    pub low_fps: f32,
    /// Above this frame rate full quality is restored.
    pub high_fps: f32,
    /// Fixed seed for starting angles and stars. Random when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            orbit_rate_scale: 0.5,
            inclination_amplitude: 0.5,
            sun_spin_rate: 0.5,
            transition_duration_ms: 2000.0,
            transition_easing: Easing::CubicOut,
            auto_orbit: AutoOrbitParams::default(),
            home_position: [0.0, 30.0, 40.0],
            star_count: 2000,
            star_spread: 400.0,
            low_fps: 30.0,
            high_fps: 50.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.orbit_rate_scale, 0.5);
        assert_eq!(config.transition_duration_ms, 2000.0);
        assert_eq!(config.auto_orbit.base_radius, 60.0);
    }

    #[test]
    fn partial_override() {
        let json = r#"{
            "star_count": 100,
            "seed": 7,
            "transition_easing": "sine_in_out",
            "auto_orbit": { "base_height": 5.0 }
        }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        assert_eq!(config.star_count, 100);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.transition_easing, Easing::SineInOut);
        assert_eq!(config.auto_orbit.base_height, 5.0);
        assert_eq!(config.auto_orbit.base_radius, 60.0);
        assert_eq!(config.inclination_amplitude, 0.5);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SimulationConfig::from_json("{ star_count: }").is_err());
        assert!(SimulationConfig::from_json(r#"{"star_count": -1}"#).is_err());
    }
}
