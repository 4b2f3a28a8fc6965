use super::{Aircraft, EntityGroup, MobileEntity, Projectile};
use crate::surface::Surface;
use crate::vector::Vec2;

/// Priority every entity starts with. Stored, never consulted when drawing.
pub const DEFAULT_PRIORITY: i32 = -1;

/// Anything that can put itself onto a [`Surface`].
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// The positioned entities a scene can hold.
#[derive(Debug, Clone)]
pub enum Entity {
    Group(EntityGroup),
    Mobile(MobileEntity),
    Projectile(Projectile),
    Aircraft(Aircraft),
}

impl Entity {
    pub fn pos(&self) -> Vec2 {
        match self {
            Entity::Group(group) => group.pos,
            Entity::Mobile(mobile) => mobile.pos,
            Entity::Projectile(projectile) => projectile.body.pos,
            Entity::Aircraft(aircraft) => aircraft.body.pos,
        }
    }

    pub fn priority(&self) -> i32 {
        match self {
            Entity::Group(group) => group.priority,
            Entity::Mobile(mobile) => mobile.priority,
            Entity::Projectile(projectile) => projectile.body.priority,
            Entity::Aircraft(aircraft) => aircraft.body.priority,
        }
    }
}

impl Drawable for Entity {
    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Entity::Group(group) => group.draw(surface),
            Entity::Mobile(mobile) => mobile.draw(surface),
            Entity::Projectile(projectile) => projectile.draw(surface),
            Entity::Aircraft(aircraft) => aircraft.draw(surface),
        }
    }
}

impl From<EntityGroup> for Entity {
    fn from(group: EntityGroup) -> Self {
        Entity::Group(group)
    }
}

impl From<MobileEntity> for Entity {
    fn from(mobile: MobileEntity) -> Self {
        Entity::Mobile(mobile)
    }
}

impl From<Projectile> for Entity {
    fn from(projectile: Projectile) -> Self {
        Entity::Projectile(projectile)
    }
}

impl From<Aircraft> for Entity {
    fn from(aircraft: Aircraft) -> Self {
        Entity::Aircraft(aircraft)
    }
}
