use std::sync::Arc;

use image::RgbaImage;
use ratatui::style::Color;

use crate::vector::Vec2;

/// 2D drawing primitives the game draws through.
///
/// Transform and fill state behave like a canvas context: `save` pushes the
/// current state, `restore` pops it, and `translate`/`rotate` compose onto the
/// current transform.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    /// Rotates the coordinate space by `angle` radians.
    fn rotate(&mut self, angle: f32);
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    /// Draws `image` centred on `center`, one pixel per world unit.
    fn draw_image(&mut self, center: Vec2, image: &Arc<RgbaImage>);
}

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    SetFill(Color),
    FillRect { origin: Vec2, size: Vec2 },
    FillCircle { center: Vec2, radius: f32 },
    DrawImage { center: Vec2, image: Arc<RgbaImage> },
}

impl DrawCommand {
    /// True for commands that put pixels on the surface.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCommand::FillRect { .. }
                | DrawCommand::FillCircle { .. }
                | DrawCommand::DrawImage { .. }
        )
    }
}

/// Surface that records every call in order so a frame can be replayed later.
#[derive(Debug, Default, Clone)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the commands that paint, in order.
    pub fn paints(&self) -> Vec<&DrawCommand> {
        self.commands.iter().filter(|c| c.is_paint()).collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for CommandList {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFill(color));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::FillRect { origin, size });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn draw_image(&mut self, center: Vec2, image: &Arc<RgbaImage>) {
        self.commands.push(DrawCommand::DrawImage {
            center,
            image: Arc::clone(image),
        });
    }
}
