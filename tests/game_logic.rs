/// Integration tests for game logic
///
/// These tests drive whole update and draw ticks through the public API and
/// check movement, firing, bullet lifetime and draw order.
use approx::assert_relative_eq;
use sky_shooter::entities::{MOBILE_RADIUS, PROJECTILE_RADIUS};
use sky_shooter::{
    Aircraft, BULLET_SPEED, CommandList, DrawCommand, EntityGroup, GameState, InputEvent, Key,
    PLAYER_SPEED, Projectile, ScreenBounds, Sprite, Vec2,
};

fn new_game(width: f32, height: f32) -> GameState {
    GameState::setup_level(ScreenBounds::new(width, height).unwrap())
}

fn press(state: &mut GameState, key: Key) {
    state.handle_input(InputEvent::KeyDown(key.code()));
}

fn release(state: &mut GameState, key: Key) {
    state.handle_input(InputEvent::KeyUp(key.code()));
}

#[test]
fn test_holding_left_moves_five_units_per_tick() {
    let mut state = new_game(320.0, 192.0);
    let start = state.player.pos();
    press(&mut state, Key::Left);

    for tick in 1..=4 {
        state.update();
        assert_eq!(
            state.player.pos(),
            Vec2::new(start.x - PLAYER_SPEED * tick as f32, start.y)
        );
    }
}

#[test]
fn test_holding_left_and_up_moves_diagonally() {
    let mut state = new_game(320.0, 192.0);
    let start = state.player.pos();
    press(&mut state, Key::Left);
    press(&mut state, Key::Up);
    state.update();

    let step = PLAYER_SPEED / 2.0f32.sqrt();
    assert_relative_eq!(state.player.pos().x, start.x - step, epsilon = 1e-4);
    assert_relative_eq!(state.player.pos().y, start.y - step, epsilon = 1e-4);
}

#[test]
fn test_player_never_leaves_screen() {
    let mut state = new_game(320.0, 192.0);
    press(&mut state, Key::Right);
    press(&mut state, Key::Down);

    for _ in 0..200 {
        state.update();
        // Clamped at the start of each tick, so at most one step past the edge
        let pos = state.player.pos();
        assert!(pos.x <= 320.0 + PLAYER_SPEED && pos.y <= 192.0 + PLAYER_SPEED);
    }
    state.update();
    release(&mut state, Key::Right);
    release(&mut state, Key::Down);
    state.update();
    assert_eq!(state.player.pos(), Vec2::new(320.0, 192.0));
}

#[test]
fn test_firing_each_tick_without_cooldown() {
    let mut state = new_game(320.0, 192.0);
    press(&mut state, Key::Fire);

    for _ in 0..7 {
        state.update();
    }
    assert_eq!(state.bullets.len(), 7);

    release(&mut state, Key::Fire);
    state.update();
    assert_eq!(state.bullets.len(), 7);
}

#[test]
fn test_bullets_travel_up_at_bullet_speed() {
    let mut state = new_game(320.0, 192.0);
    let start = state.player.pos();
    press(&mut state, Key::Fire);
    state.update();
    release(&mut state, Key::Fire);
    state.update();

    assert_eq!(
        state.bullets[0].pos(),
        Vec2::new(start.x, start.y - 2.0 * BULLET_SPEED)
    );
}

#[test]
fn test_bullet_from_center_leaves_after_expected_ticks() {
    let (width, height) = (320.0, 100.0);
    let mut state = new_game(width, height);
    state.bullets.push(Projectile::new(
        Vec2::new(width / 2.0, height / 2.0),
        Vec2::new(0.0, -BULLET_SPEED),
    ));

    let expected_ticks = (height / 2.0 / BULLET_SPEED).ceil() as usize;
    for _ in 0..expected_ticks - 1 {
        state.update();
        assert_eq!(state.bullets.len(), 1);
        assert!(state.bullets[0].pos().y > 0.0);
    }

    state.update();
    assert!(state.bullets[0].pos().y <= 0.0);

    // Dropped by the next cleanup pass
    state.update();
    assert!(state.bullets.is_empty());
}

#[test]
fn test_unused_keys_are_recorded_but_ignored() {
    let mut state = new_game(320.0, 192.0);
    let start = state.player.pos();
    state.handle_input(InputEvent::KeyDown(13));
    state.update();

    assert!(state.keys.is_code_pressed(13));
    assert_eq!(state.player.pos(), start);
    assert!(state.bullets.is_empty());
}

#[test]
fn test_draw_order() {
    let mut state = new_game(320.0, 192.0);
    let enemy_pos = Vec2::new(100.0, 30.0);
    state.enemies = vec![
        EntityGroup::new(
            enemy_pos,
            vec![Aircraft::new(enemy_pos, Sprite::Placeholder, 3.0).into()],
        )
        .into(),
    ];
    state.bullets = vec![
        Projectile::new(Vec2::new(10.0, 20.0), Vec2::ZERO),
        Projectile::new(Vec2::new(30.0, 40.0), Vec2::ZERO),
    ];
    let player_pos = state.player.pos();

    let mut frame = CommandList::new();
    state.draw(&mut frame);

    assert_eq!(
        frame.paints(),
        vec![
            &DrawCommand::FillRect {
                origin: Vec2::ZERO,
                size: Vec2::new(320.0, 192.0)
            },
            &DrawCommand::FillCircle {
                center: enemy_pos,
                radius: MOBILE_RADIUS
            },
            &DrawCommand::FillCircle {
                center: Vec2::new(10.0, 20.0),
                radius: PROJECTILE_RADIUS
            },
            &DrawCommand::FillCircle {
                center: Vec2::new(30.0, 40.0),
                radius: PROJECTILE_RADIUS
            },
            &DrawCommand::FillCircle {
                center: player_pos,
                radius: MOBILE_RADIUS
            },
        ]
    );
}

#[test]
fn test_transforms_are_balanced_after_a_frame() {
    let mut state = new_game(320.0, 192.0);
    press(&mut state, Key::Fire);
    state.update();

    let mut frame = CommandList::new();
    state.draw(&mut frame);

    let saves = frame
        .commands()
        .iter()
        .filter(|c| **c == DrawCommand::Save)
        .count();
    let restores = frame
        .commands()
        .iter()
        .filter(|c| **c == DrawCommand::Restore)
        .count();
    assert_eq!(saves, restores);
    assert_eq!(frame.commands().last(), Some(&DrawCommand::Restore));
}
