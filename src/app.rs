use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

use crate::event::Event;
use crate::game::Invasion;

/// Without key-release events a movement key counts as held for this many
/// ticks after its last press or repeat.
pub const HOLD_WINDOW: u64 = 8;

pub struct App {
    pub should_quit: bool,
    pub game: Invasion,
    /// Where the Play button was last drawn, in terminal cells. Empty while
    /// the button is hidden.
    pub play_button: Rect,
    key_release: bool,
    left_seen: u64,
    right_seen: u64,
}

impl App {
    /// `key_release` says whether the terminal reports key-up events.
    pub fn new(game: Invasion, key_release: bool) -> Self {
        Self {
            should_quit: false,
            game,
            play_button: Rect::default(),
            key_release,
            left_seen: 0,
            right_seen: 0,
        }
    }

    pub fn on_tick(&mut self) {
        self.expire_held_keys();
        self.game.update();
    }

    pub fn on_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.should_quit = true,
            Event::KeyDown(code) => self.on_key_down(code),
            Event::KeyUp(code) => self.on_key_up(code),
            Event::PointerDown { column, row } => self.on_pointer_down(column, row),
            Event::Tick => self.on_tick(),
        }
    }

    fn on_key_down(&mut self, code: KeyCode) {
        let now = self.game.tick();
        match code {
            KeyCode::Right => {
                self.game.ship.moving_right = true;
                self.right_seen = now;
            }
            KeyCode::Left => {
                self.game.ship.moving_left = true;
                self.left_seen = now;
            }
            KeyCode::Char(' ') => {
                self.game.fire_bullet();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => {
                if !self.game.is_active() {
                    self.game.start_game();
                }
            }
            _ => {}
        }
    }

    fn on_key_up(&mut self, code: KeyCode) {
        match code {
            KeyCode::Right => self.game.ship.moving_right = false,
            KeyCode::Left => self.game.ship.moving_left = false,
            _ => {}
        }
    }

    fn on_pointer_down(&mut self, column: u16, row: u16) {
        if self.game.is_active() {
            return;
        }
        if self.play_button.contains(Position::new(column, row)) {
            self.game.start_game();
        }
    }

    fn expire_held_keys(&mut self) {
        if self.key_release {
            return;
        }
        let now = self.game.tick();
        if self.game.ship.moving_right && now.saturating_sub(self.right_seen) > HOLD_WINDOW {
            self.game.ship.moving_right = false;
        }
        if self.game.ship.moving_left && now.saturating_sub(self.left_seen) > HOLD_WINDOW {
            self.game.ship.moving_left = false;
        }
    }
}
