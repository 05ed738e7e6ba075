/// Starfield and background theme.

use orrery_engine::{Color, Rng};

pub const STAR_COLOR: u32 = 0xffffff;
pub const STAR_SIZE: f32 = 1.0;
pub const STAR_OPACITY: f32 = 0.8;

/// `count` points uniform in a cube of side `spread` centred on the origin,
/// packed as x, y, z triples.
pub fn starfield(rng: &mut Rng, count: usize, spread: f32) -> Vec<f32> {
    let half = spread * 0.5;
    (0..count * 3).map(|_| rng.range(-half, half)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Packed `0xRRGGBB` background.
    pub fn background_hex(self) -> u32 {
        match self {
            Theme::Dark => 0x000011,
            Theme::Light => 0x87ceeb,
        }
    }

    pub fn background(self) -> Color {
        Color::from_hex(self.background_hex())
    }

    /// Wire value: 0 dark, 1 light.
    pub fn as_f32(self) -> f32 {
        match self {
            Theme::Dark => 0.0,
            Theme::Light => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_the_cube() {
        let mut rng = Rng::new(11);
        let stars = starfield(&mut rng, 2000, 400.0);
        assert_eq!(stars.len(), 6000);
        assert!(stars.iter().all(|v| (-200.0..=200.0).contains(v)));
        assert!(stars.iter().any(|v| *v < -150.0));
        assert!(stars.iter().any(|v| *v > 150.0));
    }

    #[test]
    fn no_stars_is_fine() {
        let mut rng = Rng::new(1);
        assert!(starfield(&mut rng, 0, 400.0).is_empty());
    }

    #[test]
    fn theme_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.toggled(), Theme::Light);
        assert_eq!(theme.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.background_hex(), 0x87ceeb);
        assert_eq!(Theme::Dark.background().to_hex(), 0x000011);
    }
}
