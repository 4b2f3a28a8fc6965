use std::f32::consts::PI;

use crate::config::ScreenBounds;
use crate::entities::{Aircraft, Background, Drawable, Entity, EntityGroup, Projectile, Sprite};
use crate::input::{InputEvent, InputState, Key};
use crate::surface::Surface;
use crate::vector::{Vec2, normalize};

/// Player movement per update tick, in world units.
pub const PLAYER_SPEED: f32 = 5.0;
/// Bullet movement per update tick, in world units.
pub const BULLET_SPEED: f32 = 10.0;
/// Distance of the player from the bottom edge and the enemies from the top.
pub const EDGE_OFFSET: f32 = 30.0;

/// Everything the update and draw ticks work on.
#[derive(Debug, Clone)]
pub struct GameState {
    pub screen_bounds: ScreenBounds,
    pub enemies: Vec<Entity>,
    pub player: Aircraft,
    pub background: Background,
    pub keys: InputState,
    pub bullets: Vec<Projectile>,
}

impl GameState {
    /// Builds the opening scene: the player near the bottom centre and one
    /// enemy group holding a single aircraft near the top centre.
    pub fn setup_level(screen_bounds: ScreenBounds) -> Self {
        let center_x = screen_bounds.width() / 2.0;
        let enemy_pos = Vec2::new(center_x, EDGE_OFFSET);
        let enemy_group = EntityGroup::new(
            enemy_pos,
            vec![Aircraft::new(enemy_pos, Sprite::Placeholder, PI).into()],
        );

        Self {
            screen_bounds,
            enemies: vec![enemy_group.into()],
            player: Aircraft::new(
                Vec2::new(center_x, screen_bounds.height() - EDGE_OFFSET),
                Sprite::Placeholder,
                0.0,
            ),
            background: Background::new(&screen_bounds),
            keys: InputState::new(),
            bullets: Vec::new(),
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.keys.apply(event);
    }

    /// Follows a change of the host's screen size.
    pub fn resize(&mut self, screen_bounds: ScreenBounds) {
        log::info!(
            "screen resized to {}x{}",
            screen_bounds.width(),
            screen_bounds.height()
        );
        self.screen_bounds = screen_bounds;
        self.background.resize(&screen_bounds);
    }

    /// Drops bullets that left the screen and pulls the player back inside.
    pub fn cleanup_and_enforce_borders(&mut self) {
        let bounds = self.screen_bounds;
        self.bullets.retain(|bullet| {
            let pos = bullet.pos();
            if bullet.is_out_of_bounds(&bounds) {
                log::trace!("deleting bullet at ({}, {})", pos.x, pos.y);
                false
            } else {
                true
            }
        });

        self.player.body.pos = bounds.clamp(self.player.body.pos);
    }

    /// Raw direction from the held movement keys, one unit per axis at most.
    pub fn movement_intent(&self) -> Vec2 {
        let mut intent = Vec2::ZERO;
        if self.keys.is_pressed(Key::Left) {
            intent.x = -1.0;
        }
        if self.keys.is_pressed(Key::Right) {
            intent.x = 1.0;
        }
        if self.keys.is_pressed(Key::Up) {
            intent.y = -1.0;
        }
        if self.keys.is_pressed(Key::Down) {
            intent.y = 1.0;
        }
        intent
    }

    /// One update tick.
    pub fn update(&mut self) {
        self.cleanup_and_enforce_borders();

        if self.keys.is_pressed(Key::Fire) {
            self.bullets.push(Projectile::new(
                self.player.pos(),
                Vec2::new(0.0, -BULLET_SPEED),
            ));
        }

        let intent = normalize(self.movement_intent());
        self.player.body.pos += intent * PLAYER_SPEED;

        for bullet in &mut self.bullets {
            bullet.update();
        }
    }

    /// One draw tick: background, enemies, bullets, then the player.
    pub fn draw(&self, surface: &mut dyn Surface) {
        log::trace!("drawing frame");
        self.background.draw(surface);
        for enemy in &self.enemies {
            enemy.draw(surface);
        }
        for bullet in &self.bullets {
            bullet.draw(surface);
        }
        self.player.draw(surface);
    }
}
