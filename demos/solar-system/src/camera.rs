/// Camera poses driven by the scene: auto-orbit path, focus framing, home.

use glam::Vec3;
use orrery_engine::CameraPose;

use crate::config::AutoOrbitParams;

/// Auto-orbit pose at wall-clock time `t` seconds. Always looks at the origin.
pub fn auto_orbit_pose(params: &AutoOrbitParams, t: f32) -> CameraPose {
    let radius = params.base_radius + (t * 0.3).sin() * params.radius_amplitude;
    let height = params.base_height + (t * 0.2).cos() * params.height_amplitude;
    CameraPose::looking_at_origin(Vec3::new(
        (t * 0.1).cos() * radius,
        height,
        (t * 0.1).sin() * radius,
    ))
}

/// Framing for a body of `radius` at `target`: back off along (1, ½, 1)
/// by `radius·4 + 5` and look at the body.
pub fn focus_pose(target: Vec3, radius: f32) -> CameraPose {
    let k = radius * 4.0 + 5.0;
    CameraPose::new(target + Vec3::new(k, k * 0.5, k), target)
}

pub fn home_pose(position: [f32; 3]) -> CameraPose {
    CameraPose::looking_at_origin(Vec3::from_array(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn auto_orbit_at_time_zero() {
        let pose = auto_orbit_pose(&AutoOrbitParams::default(), 0.0);
        assert!((pose.position - Vec3::new(60.0, 30.0, 0.0)).length() < EPS);
        assert_eq!(pose.look_at, Vec3::ZERO);
    }

    #[test]
    fn auto_orbit_stays_inside_its_envelope() {
        let params = AutoOrbitParams::default();
        for i in 0..500 {
            let pose = auto_orbit_pose(&params, i as f32 * 0.37);
            let flat = Vec3::new(pose.position.x, 0.0, pose.position.z).length();
            assert!((40.0 - EPS..=80.0 + EPS).contains(&flat));
            assert!((10.0 - EPS..=30.0 + EPS).contains(&pose.position.y));
        }
    }

    #[test]
    fn focus_frames_body() {
        let target = Vec3::new(8.0, 0.2, -1.0);
        let pose = focus_pose(target, 0.4);
        // k = 0.4 * 4 + 5 = 6.6
        assert!((pose.position - (target + Vec3::new(6.6, 3.3, 6.6))).length() < EPS);
        assert_eq!(pose.look_at, target);
    }

    #[test]
    fn home_looks_at_origin() {
        let pose = home_pose([0.0, 30.0, 40.0]);
        assert_eq!(pose, CameraPose::default());
    }
}
