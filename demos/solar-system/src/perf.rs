/// Frame-rate monitor that recommends a render quality to the host.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    Full,
    Reduced,
}

impl Quality {
    /// Wire value: 0 full, 1 reduced.
    pub fn as_f32(self) -> f32 {
        match self {
            Quality::Full => 0.0,
            Quality::Reduced => 1.0,
        }
    }
}

/// Counts frames over windows of at least one second of wall time.
#[derive(Debug, Clone)]
pub struct FrameRateMonitor {
    low_fps: f32,
    high_fps: f32,
    frames: u32,
    window_start_ms: f64,
    fps: f32,
    quality: Quality,
}

impl FrameRateMonitor {
    pub const WINDOW_MS: f64 = 1000.0;

    pub fn new(low_fps: f32, high_fps: f32) -> Self {
        Self {
            low_fps,
            high_fps,
            frames: 0,
            window_start_ms: 0.0,
            fps: 0.0,
            quality: Quality::Full,
        }
    }

    /// Count one frame at `now_ms`. Returns the new quality when a closed
    /// window moves it across a threshold.
    pub fn record(&mut self, now_ms: f64) -> Option<Quality> {
        self.frames += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed < Self::WINDOW_MS {
            return None;
        }
        self.fps = (self.frames as f64 * 1000.0 / elapsed).round() as f32;
        self.frames = 0;
        self.window_start_ms = now_ms;

        let next = if self.fps < self.low_fps {
            Quality::Reduced
        } else if self.fps > self.high_fps {
            Quality::Full
        } else {
            self.quality
        };
        if next == self.quality {
            return None;
        }
        log::info!("frame rate {} fps, quality -> {:?}", self.fps, next);
        self.quality = next;
        Some(next)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(monitor: &mut FrameRateMonitor, start_ms: f64, fps: f64, seconds: f64) -> Vec<Quality> {
        let frames = (fps * seconds) as u32;
        let step = 1000.0 / fps;
        (1..=frames)
            .filter_map(|i| monitor.record(start_ms + i as f64 * step))
            .collect()
    }

    #[test]
    fn slow_frames_reduce_quality_once() {
        let mut m = FrameRateMonitor::new(30.0, 50.0);
        let changes = run(&mut m, 0.0, 20.0, 3.0);
        assert_eq!(changes, vec![Quality::Reduced]);
        assert_eq!(m.quality(), Quality::Reduced);
        assert_eq!(m.fps(), 20.0);
    }

    #[test]
    fn fast_frames_restore_full() {
        let mut m = FrameRateMonitor::new(30.0, 50.0);
        run(&mut m, 0.0, 20.0, 2.0);
        let changes = run(&mut m, 2000.0, 60.0, 2.0);
        assert_eq!(changes, vec![Quality::Full]);
    }

    #[test]
    fn middle_band_keeps_quality() {
        let mut m = FrameRateMonitor::new(30.0, 50.0);
        run(&mut m, 0.0, 20.0, 2.0);
        assert!(run(&mut m, 2000.0, 40.0, 3.0).is_empty());
        assert_eq!(m.quality(), Quality::Reduced);
    }

    #[test]
    fn nothing_reported_inside_first_window() {
        let mut m = FrameRateMonitor::new(30.0, 50.0);
        assert_eq!(m.record(16.0), None);
        assert_eq!(m.fps(), 0.0);
    }
}
