// Library exports for testing
pub use app::App;
pub use config::{GameConfig, ScreenBounds};
pub use entities::{
    Aircraft, Background, Drawable, Entity, EntityGroup, MobileEntity, Projectile, Sprite,
};
pub use game::{BULLET_SPEED, GameState, PLAYER_SPEED};
pub use input::{InputEvent, InputManager, InputState, Key};
pub use surface::{CommandList, DrawCommand, Surface};
pub use vector::Vec2;

pub mod app;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod surface;
pub mod vector;
