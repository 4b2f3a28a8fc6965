use std::sync::Arc;

use image::RgbaImage;
use ratatui::style::Color;

use super::{DEFAULT_PRIORITY, Drawable};
use crate::surface::Surface;
use crate::vector::Vec2;

pub const MOBILE_COLOR: Color = Color::Rgb(0x99, 0x55, 0x77);
pub const MOBILE_RADIUS: f32 = 10.0;

/// What a mobile entity looks like.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Sprite {
    /// No image; a filled circle stands in.
    #[default]
    Placeholder,
    Image(Arc<RgbaImage>),
}

/// An entity drawn from a sprite (or its placeholder) at its position.
#[derive(Debug, Clone)]
pub struct MobileEntity {
    pub pos: Vec2,
    pub priority: i32,
    pub sprite: Sprite,
}

impl MobileEntity {
    pub fn new(pos: Vec2, sprite: Sprite) -> Self {
        log::debug!("made a mobile entity at ({}, {})", pos.x, pos.y);
        Self {
            pos,
            priority: DEFAULT_PRIORITY,
            sprite,
        }
    }
}

impl Drawable for MobileEntity {
    fn draw(&self, surface: &mut dyn Surface) {
        match &self.sprite {
            Sprite::Placeholder => {
                surface.set_fill(MOBILE_COLOR);
                surface.fill_circle(self.pos, MOBILE_RADIUS);
            }
            Sprite::Image(image) => surface.draw_image(self.pos, image),
        }
    }
}
