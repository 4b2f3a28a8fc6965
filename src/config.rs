use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::ensure;

use crate::vector::Vec2;

/// Size of the playfield in world units. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    width: f32,
    height: f32,
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        ensure!(
            width.is_finite() && width > 0.0,
            "screen width must be positive, got {width}"
        );
        ensure!(
            height.is_finite() && height > 0.0,
            "screen height must be positive, got {height}"
        );
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Strictly inside: points on an edge are outside.
    pub fn contains_strict(&self, pos: Vec2) -> bool {
        pos.x > 0.0 && pos.x < self.width && pos.y > 0.0 && pos.y < self.height
    }

    /// Snaps `pos` onto the nearest point of `[0, width] x [0, height]`.
    /// Non-finite coordinates land on the lower edge.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(clamp_axis(pos.x, self.width), clamp_axis(pos.y, self.height))
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Runtime settings for the game loop and the terminal host.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Time between update ticks
    pub update_period: Duration,
    /// Time between draw ticks
    pub draw_period: Duration,
    /// World units covered by one terminal column
    pub units_per_column: f32,
    /// World units covered by one terminal row (cells are about twice as tall as wide)
    pub units_per_row: f32,
    /// Most update ticks run in one loop turn when the loop falls behind
    pub max_catch_up_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            update_period: Duration::from_millis(20),
            draw_period: Duration::from_millis(20),
            units_per_column: 4.0,
            units_per_row: 8.0,
            max_catch_up_ticks: 5,
        }
    }
}

impl GameConfig {
    /// Screen bounds matching a terminal of `cols` x `rows` cells.
    pub fn bounds_for_terminal(&self, cols: u16, rows: u16) -> Result<ScreenBounds> {
        ScreenBounds::new(
            f32::from(cols.max(1)) * self.units_per_column,
            f32::from(rows.max(1)) * self.units_per_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_reject_bad_sizes() {
        assert!(ScreenBounds::new(0.0, 10.0).is_err());
        assert!(ScreenBounds::new(10.0, -1.0).is_err());
        assert!(ScreenBounds::new(f32::NAN, 10.0).is_err());
        assert!(ScreenBounds::new(10.0, f32::INFINITY).is_err());
        assert!(ScreenBounds::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn test_clamp_snaps_to_nearest_edge() {
        let bounds = ScreenBounds::new(100.0, 50.0).unwrap();
        assert_eq!(bounds.clamp(Vec2::new(-3.0, 20.0)), Vec2::new(0.0, 20.0));
        assert_eq!(bounds.clamp(Vec2::new(130.0, -2.0)), Vec2::new(100.0, 0.0));
        assert_eq!(bounds.clamp(Vec2::new(40.0, 75.0)), Vec2::new(40.0, 50.0));
        assert_eq!(bounds.clamp(Vec2::new(f32::NAN, 10.0)), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_contains_strict_excludes_edges() {
        let bounds = ScreenBounds::new(100.0, 50.0).unwrap();
        assert!(bounds.contains_strict(Vec2::new(50.0, 25.0)));
        assert!(!bounds.contains_strict(Vec2::new(0.0, 25.0)));
        assert!(!bounds.contains_strict(Vec2::new(100.0, 25.0)));
        assert!(!bounds.contains_strict(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_bounds_for_terminal() {
        let config = GameConfig::default();
        let bounds = config.bounds_for_terminal(80, 24).unwrap();
        assert_eq!(bounds.width(), 320.0);
        assert_eq!(bounds.height(), 192.0);

        // A zero-sized terminal still yields a usable playfield
        assert!(config.bounds_for_terminal(0, 0).is_ok());
    }
}
