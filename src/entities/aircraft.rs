use super::{Drawable, MobileEntity, Sprite};
use crate::surface::Surface;
use crate::vector::Vec2;

/// A mobile entity drawn rotated about its own position.
#[derive(Debug, Clone)]
pub struct Aircraft {
    pub body: MobileEntity,
    /// Heading in radians.
    pub rotation: f32,
}

impl Aircraft {
    pub fn new(pos: Vec2, sprite: Sprite, rotation: f32) -> Self {
        log::debug!("made an aircraft at ({}, {})", pos.x, pos.y);
        Self {
            body: MobileEntity::new(pos, sprite),
            rotation,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn rotate(&mut self, theta: f32) {
        self.rotation += theta;
    }
}

impl Drawable for Aircraft {
    fn draw(&self, surface: &mut dyn Surface) {
        let pos = self.body.pos;
        surface.save();
        surface.translate(pos);
        surface.rotate(-self.rotation);
        surface.translate(-pos);
        self.body.draw(surface);
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::MOBILE_COLOR;
    use crate::surface::{CommandList, DrawCommand};
    use approx::assert_relative_eq;

    #[test]
    fn test_rotate_accumulates() {
        let mut aircraft = Aircraft::new(Vec2::new(1.0, 1.0), Sprite::Placeholder, 0.5);
        aircraft.rotate(0.25);
        aircraft.rotate(-1.0);
        assert_relative_eq!(aircraft.rotation, -0.25);
    }

    #[test]
    fn test_draw_wraps_body_in_rotation() {
        let pos = Vec2::new(40.0, 30.0);
        let aircraft = Aircraft::new(pos, Sprite::Placeholder, 1.5);
        let mut list = CommandList::new();
        aircraft.draw(&mut list);

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::Translate(pos),
                DrawCommand::Rotate(-1.5),
                DrawCommand::Translate(-pos),
                DrawCommand::SetFill(MOBILE_COLOR),
                DrawCommand::FillCircle {
                    center: pos,
                    radius: 10.0
                },
                DrawCommand::Restore,
            ]
        );
    }
}
