use color_eyre::Result;
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;

use crate::config::GameConfig;
use crate::game::GameState;
use crate::input::InputManager;
use crate::renderer::{GameRenderer, RenderView};
use crate::scheduler::FixedInterval;
use crate::surface::CommandList;

/// The main application which owns the game state and drives both loops.
pub struct App {
    running: bool,
    config: GameConfig,
    game: GameState,
    /// Last recorded frame, reused between draws
    frame: CommandList,
    input_manager: InputManager,
    renderer: GameRenderer,
    update_timer: FixedInterval,
    draw_timer: FixedInterval,
}

impl App {
    /// Sets up the level for a terminal of `cols` x `rows` cells and binds input.
    /// Both schedules have their first tick due at `start`.
    pub fn new(
        config: GameConfig,
        cols: u16,
        rows: u16,
        reports_release: bool,
        start: Instant,
    ) -> Result<Self> {
        let bounds = config.bounds_for_terminal(cols, rows)?;
        log::info!(
            "starting level on a {}x{} screen",
            bounds.width(),
            bounds.height()
        );

        Ok(Self {
            running: true,
            update_timer: FixedInterval::new(config.update_period, start),
            draw_timer: FixedInterval::new(config.draw_period, start),
            config,
            game: GameState::setup_level(bounds),
            frame: CommandList::new(),
            input_manager: InputManager::new(reports_release),
            renderer: GameRenderer::new(),
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run the application's main loop until quit is requested.
    ///
    /// Update and draw keep their own schedules but run on this one thread,
    /// so a draw always sees the state between two whole update ticks.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            let now = Instant::now();
            let wait = self
                .update_timer
                .until_next(now)
                .min(self.draw_timer.until_next(now));

            for event in self.input_manager.poll_events(wait)? {
                self.game.handle_input(event);
            }
            if self.input_manager.quit_requested() {
                self.running = false;
                break;
            }
            if let Some((cols, rows)) = self.input_manager.take_resize() {
                let bounds = self.config.bounds_for_terminal(cols, rows)?;
                self.game.resize(bounds);
            }

            if self.tick(Instant::now()) {
                self.draw(terminal)?;
            }
        }

        log::info!("game loop stopped");
        Ok(())
    }

    /// Runs every update tick due at `now` and tells whether a draw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let ticks = self
            .update_timer
            .due_ticks(now, self.config.max_catch_up_ticks);
        for _ in 0..ticks {
            self.game.update();
        }

        self.draw_timer.due_ticks(now, 1) > 0
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.frame.clear();
        self.game.draw(&mut self.frame);

        let started = Instant::now();
        terminal.draw(|frame| {
            let view = RenderView {
                commands: &self.frame,
                bounds: self.game.screen_bounds,
                area: frame.area(),
            };
            self.renderer.render(frame, &view);
        })?;

        let took = started.elapsed();
        if took > self.config.draw_period {
            log::debug!("slow frame: {took:?}");
        }
        Ok(())
    }
}
