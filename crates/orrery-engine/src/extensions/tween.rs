// extensions/tween.rs
//
// Camera tweens: eased pose transitions keyed to wall-clock timestamps.
// Progress is recomputed from the stored start time every tick, so
// cancelling a tween is just dropping it.
//
// Usage:
//   let mut transition = CameraTransition::new(2000.0, Easing::CubicOut);
//   transition.request(&camera.pose, target, now_ms);
//   transition.tick(now_ms, &mut camera.pose);

use glam::Vec3;
use crate::renderer::camera::CameraPose;
use super::easing::{Easing, ease_vec3};

/// A single camera move from one pose to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTween {
    pub from: CameraPose,
    pub to: CameraPose,
    /// Wall-clock timestamp the tween started at, in milliseconds.
    pub start_ms: f64,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    pub easing: Easing,
}

impl CameraTween {
    /// Raw progress in [0, 1]. A non-positive duration is already complete.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Eased progress in [0, 1].
    pub fn eased(&self, now_ms: f64) -> f32 {
        self.easing.apply(self.progress(now_ms))
    }

    /// The interpolated pose at `now_ms`. Lands on `to` exactly once complete.
    pub fn sample(&self, now_ms: f64) -> CameraPose {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        CameraPose {
            position: ease_vec3(self.from.position, self.to.position, t, self.easing),
            look_at: ease_vec3(self.from.look_at, self.to.look_at, t, self.easing),
        }
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// Result of advancing a [`CameraTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    /// Nothing is animating; the camera was left alone.
    Idle,
    /// The camera was moved and the tween continues.
    Running,
    /// The camera reached the target this tick; the controller is idle again.
    Finished,
}

/// Idle → Active(tween) → Idle state machine for camera focus moves.
///
/// At most one tween is active. A new request replaces the active one
/// silently; there is no queue.
#[derive(Debug, Clone)]
pub struct CameraTransition {
    active: Option<CameraTween>,
    duration_ms: f64,
    easing: Easing,
}

impl CameraTransition {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            active: None,
            duration_ms,
            easing,
        }
    }

    /// Start moving from `current` towards `target`, superseding any active
    /// tween. The start position is captured now and not re-sampled; the
    /// look-at always departs from the world origin.
    /// Returns true when an in-flight tween was replaced.
    pub fn request(&mut self, current: &CameraPose, target: CameraPose, now_ms: f64) -> bool {
        let superseded = self.active.is_some();
        self.active = Some(CameraTween {
            from: CameraPose::new(current.position, Vec3::ZERO),
            to: target,
            start_ms: now_ms,
            duration_ms: self.duration_ms,
            easing: self.easing,
        });
        superseded
    }

    /// Apply the active tween to `pose` at `now_ms`.
    pub fn tick(&mut self, now_ms: f64, pose: &mut CameraPose) -> TweenStatus {
        let Some(tween) = &self.active else {
            return TweenStatus::Idle;
        };
        *pose = tween.sample(now_ms);
        if tween.is_complete(now_ms) {
            self.active = None;
            TweenStatus::Finished
        } else {
            TweenStatus::Running
        }
    }

    /// Drop the active tween, leaving the camera where it is.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&CameraTween> {
        self.active.as_ref()
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> CameraPose {
        CameraPose::looking_at_origin(Vec3::new(0.0, 30.0, 40.0))
    }

    fn target() -> CameraPose {
        CameraPose::new(Vec3::new(14.6, 3.3, 6.6), Vec3::new(8.0, 0.5, 0.0))
    }

    #[test]
    fn progress_zero_is_start_and_one_is_target() {
        let mut tr = CameraTransition::new(2000.0, Easing::CubicOut);
        let mut pose = start();
        tr.request(&pose, target(), 0.0);

        assert_eq!(tr.tick(0.0, &mut pose), TweenStatus::Running);
        assert_eq!(pose.position, start().position);
        assert_eq!(pose.look_at, Vec3::ZERO);

        assert_eq!(tr.tick(2000.0, &mut pose), TweenStatus::Finished);
        assert_eq!(pose, target());
        assert!(!tr.is_active());
        assert_eq!(tr.tick(2500.0, &mut pose), TweenStatus::Idle);
    }

    #[test]
    fn halfway_sample_uses_eased_progress() {
        let mut tr = CameraTransition::new(2000.0, Easing::CubicOut);
        tr.request(&start(), target(), 0.0);
        let tween = tr.active().unwrap();
        assert!((tween.eased(1000.0) - 0.875).abs() < 1e-6);

        let pose = tween.sample(1000.0);
        let expected = start().position + (target().position - start().position) * 0.875;
        assert!((pose.position - expected).length() < 1e-4);
        assert!((pose.look_at - target().look_at * 0.875).length() < 1e-4);
    }

    #[test]
    fn look_at_departs_from_origin_not_previous_target() {
        let mut tr = CameraTransition::new(1000.0, Easing::Linear);
        let current = CameraPose::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(50.0, 0.0, 0.0));
        tr.request(&current, target(), 0.0);
        let mut pose = current;
        tr.tick(0.0, &mut pose);
        assert_eq!(pose.look_at, Vec3::ZERO);
    }

    #[test]
    fn eased_progress_increases_over_time() {
        let mut tr = CameraTransition::new(2000.0, Easing::CubicOut);
        tr.request(&start(), target(), 0.0);
        let tween = tr.active().unwrap();
        let mut prev = tween.eased(0.0);
        for ms in (50..=2000).step_by(50) {
            let e = tween.eased(ms as f64);
            assert!(e > prev, "eased progress stalled at {ms} ms");
            prev = e;
        }
    }

    #[test]
    fn second_request_supersedes_first() {
        let mut tr = CameraTransition::new(2000.0, Easing::CubicOut);
        let mut pose = start();
        let first = target();
        let second = CameraPose::new(Vec3::new(-40.0, 10.0, -40.0), Vec3::new(-30.0, 0.0, 0.0));

        assert!(!tr.request(&pose, first, 0.0));
        tr.tick(1000.0, &mut pose);
        assert!(tr.request(&pose, second, 1000.0));

        for ms in (1000..=3000).step_by(100) {
            tr.tick(ms as f64, &mut pose);
            assert_ne!(pose.position, first.position);
        }
        assert_eq!(pose, second);
    }

    #[test]
    fn cancel_leaves_camera_in_place() {
        let mut tr = CameraTransition::new(2000.0, Easing::CubicOut);
        let mut pose = start();
        tr.request(&pose, target(), 0.0);
        tr.tick(500.0, &mut pose);
        let frozen = pose;
        tr.cancel();
        assert_eq!(tr.tick(1500.0, &mut pose), TweenStatus::Idle);
        assert_eq!(pose, frozen);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tr = CameraTransition::new(0.0, Easing::CubicOut);
        let mut pose = start();
        tr.request(&pose, target(), 10.0);
        assert_eq!(tr.tick(10.0, &mut pose), TweenStatus::Finished);
        assert_eq!(pose, target());
    }
}
