use super::{DEFAULT_PRIORITY, Drawable, Entity};
use crate::surface::Surface;
use crate::vector::Vec2;

/// Entities drawn together, in insertion order.
#[derive(Debug, Clone)]
pub struct EntityGroup {
    pub pos: Vec2,
    pub priority: i32,
    pub children: Vec<Entity>,
}

impl EntityGroup {
    pub fn new(pos: Vec2, children: Vec<Entity>) -> Self {
        log::debug!(
            "made a group of {} at ({}, {})",
            children.len(),
            pos.x,
            pos.y
        );
        Self {
            pos,
            priority: DEFAULT_PRIORITY,
            children,
        }
    }
}

impl Drawable for EntityGroup {
    fn draw(&self, surface: &mut dyn Surface) {
        for child in &self.children {
            child.draw(surface);
        }
    }
}
