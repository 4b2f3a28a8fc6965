use ratatui::style::Color;

use super::Drawable;
use crate::config::ScreenBounds;
use crate::surface::Surface;
use crate::vector::Vec2;

pub const BACKGROUND_COLOR: Color = Color::Rgb(0x77, 0x99, 0x55);

/// Solid fill covering the whole surface.
#[derive(Debug, Clone)]
pub struct Background {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Background {
    pub fn new(bounds: &ScreenBounds) -> Self {
        Self {
            width: bounds.width(),
            height: bounds.height(),
            color: BACKGROUND_COLOR,
        }
    }

    pub fn resize(&mut self, bounds: &ScreenBounds) {
        self.width = bounds.width();
        self.height = bounds.height();
    }
}

impl Drawable for Background {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.set_fill(self.color);
        surface.fill_rect(Vec2::ZERO, Vec2::new(self.width, self.height));
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{CommandList, DrawCommand};

    #[test]
    fn test_background_fills_surface() {
        let bounds = ScreenBounds::new(320.0, 192.0).unwrap();
        let background = Background::new(&bounds);
        let mut list = CommandList::new();
        background.draw(&mut list);

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::SetFill(BACKGROUND_COLOR),
                DrawCommand::FillRect {
                    origin: Vec2::ZERO,
                    size: Vec2::new(320.0, 192.0)
                },
                DrawCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_background_resize() {
        let mut background = Background::new(&ScreenBounds::new(10.0, 10.0).unwrap());
        background.resize(&ScreenBounds::new(40.0, 20.0).unwrap());
        assert_eq!((background.width, background.height), (40.0, 20.0));
    }
}
