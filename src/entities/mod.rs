mod aircraft;
mod background;
mod entity;
mod group;
mod mobile;
mod projectile;

// Re-export all public types
pub use aircraft::Aircraft;
pub use background::{BACKGROUND_COLOR, Background};
pub use entity::{DEFAULT_PRIORITY, Drawable, Entity};
pub use group::EntityGroup;
pub use mobile::{MOBILE_COLOR, MOBILE_RADIUS, MobileEntity, Sprite};
pub use projectile::{PROJECTILE_COLOR, PROJECTILE_RADIUS, Projectile};
