use ratatui::style::Color;

use super::{Drawable, MobileEntity, Sprite};
use crate::config::ScreenBounds;
use crate::surface::Surface;
use crate::vector::Vec2;

pub const PROJECTILE_COLOR: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const PROJECTILE_RADIUS: f32 = 4.0;

/// A bullet: a mobile entity travelling at a fixed velocity.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub body: MobileEntity,
    pub velocity: Vec2,
}

impl Projectile {
    pub fn new(pos: Vec2, velocity: Vec2) -> Self {
        Self {
            body: MobileEntity::new(pos, Sprite::Placeholder),
            velocity,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    /// Advances one tick along the velocity.
    pub fn update(&mut self) {
        self.body.pos += self.velocity;
    }

    pub fn is_out_of_bounds(&self, bounds: &ScreenBounds) -> bool {
        !bounds.contains_strict(self.body.pos)
    }
}

impl Drawable for Projectile {
    fn draw(&self, surface: &mut dyn Surface) {
        match &self.body.sprite {
            Sprite::Placeholder => {
                surface.set_fill(PROJECTILE_COLOR);
                surface.fill_circle(self.body.pos, PROJECTILE_RADIUS);
            }
            Sprite::Image(image) => surface.draw_image(self.body.pos, image),
        }
    }
}
