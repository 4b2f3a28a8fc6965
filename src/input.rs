use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a fresh press counts as held on terminals that never report key
/// releases. Longer than common auto-repeat delays (X11 defaults to 660 ms).
pub const FIRST_HOLD_TIMEOUT: Duration = Duration::from_millis(750);
/// Hold window once auto-repeat events for a key are arriving.
pub const REPEAT_HOLD_TIMEOUT: Duration = Duration::from_millis(150);

/// The keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Key {
    pub const fn code(self) -> u32 {
        match self {
            Key::Left => 65,
            Key::Right => 68,
            Key::Up => 87,
            Key::Down => 83,
            Key::Fire => 32,
        }
    }
}

/// A key transition delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(u32),
    KeyUp(u32),
}

/// Pressed/released flag for every key code seen so far.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys: HashMap<u32, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(code) => {
                self.keys.insert(code, true);
            }
            InputEvent::KeyUp(code) => {
                self.keys.insert(code, false);
            }
        }
    }

    pub fn is_code_pressed(&self, code: u32) -> bool {
        self.keys.get(&code).copied().unwrap_or(false)
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.is_code_pressed(key.code())
    }
}

/// Translates a terminal key into the numeric code the game uses.
///
/// Letters map to their upper-case ASCII code and arrow keys share the codes
/// of W/A/S/D, so an arrow and its letter are one key: releasing either clears
/// the flag.
pub fn key_code(code: KeyCode) -> Option<u32> {
    match code {
        KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => {
            Some(u32::from(c.to_ascii_uppercase()))
        }
        KeyCode::Left => Some(Key::Left.code()),
        KeyCode::Right => Some(Key::Right.code()),
        KeyCode::Up => Some(Key::Up.code()),
        KeyCode::Down => Some(Key::Down.code()),
        KeyCode::Backspace => Some(8),
        KeyCode::Tab => Some(9),
        KeyCode::Enter => Some(13),
        _ => None,
    }
}

fn is_quit(key_event: &KeyEvent) -> bool {
    matches!(
        key_event.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL))
}

/// A key held on a terminal without release reports.
#[derive(Debug, Clone, Copy)]
struct HeldKey {
    last_seen: Instant,
    repeating: bool,
}

impl HeldKey {
    fn expired(&self, now: Instant) -> bool {
        let timeout = if self.repeating {
            REPEAT_HOLD_TIMEOUT
        } else {
            FIRST_HOLD_TIMEOUT
        };
        now.saturating_duration_since(self.last_seen) >= timeout
    }
}

/// Drains terminal events and turns them into [`InputEvent`]s.
pub struct InputManager {
    reports_release: bool,
    /// Held codes, tracked only when releases never arrive
    held: HashMap<u32, HeldKey>,
    quit_requested: bool,
    resized: Option<(u16, u16)>,
}

impl InputManager {
    /// `reports_release` tells whether the terminal sends key release events.
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            held: HashMap::new(),
            quit_requested: false,
            resized: None,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Latest terminal size reported since the previous call.
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }

    /// Waits up to `timeout` for the first event, then drains everything queued.
    pub fn poll_events(&mut self, timeout: Duration) -> color_eyre::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let mut wait = timeout;

        while event::poll(wait)? {
            wait = Duration::ZERO;
            match event::read()? {
                Event::Key(key_event) => {
                    if let Some(input) = self.handle_key_event(key_event, Instant::now()) {
                        events.push(input);
                    }
                }
                Event::Resize(cols, rows) => {
                    self.resized = Some((cols, rows));
                }
                _ => {}
            }
        }

        events.extend(self.expire_held(Instant::now()));
        Ok(events)
    }

    /// Processes one key event received at `now`.
    pub fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) -> Option<InputEvent> {
        if is_quit(&key_event) {
            if key_event.kind == KeyEventKind::Press {
                log::info!("quit requested");
                self.quit_requested = true;
            }
            return None;
        }

        let code = key_code(key_event.code)?;
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if !self.reports_release {
                    // Without event types, repeats arrive as more presses
                    let repeating = key_event.kind == KeyEventKind::Repeat
                        || self.held.contains_key(&code);
                    self.held.insert(
                        code,
                        HeldKey {
                            last_seen: now,
                            repeating,
                        },
                    );
                }
                Some(InputEvent::KeyDown(code))
            }
            KeyEventKind::Release => {
                self.held.remove(&code);
                Some(InputEvent::KeyUp(code))
            }
        }
    }

    /// Synthesizes releases for keys whose hold window ran out: the first
    /// press lasts [`FIRST_HOLD_TIMEOUT`], later repeats [`REPEAT_HOLD_TIMEOUT`].
    pub fn expire_held(&mut self, now: Instant) -> Vec<InputEvent> {
        if self.reports_release {
            return Vec::new();
        }

        let mut expired: Vec<u32> = self
            .held
            .iter()
            .filter(|(_, held)| held.expired(now))
            .map(|(code, _)| *code)
            .collect();
        expired.sort_unstable();

        for code in &expired {
            self.held.remove(code);
        }
        expired.into_iter().map(InputEvent::KeyUp).collect()
    }
}
