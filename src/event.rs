use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    PointerDown { column: u16, row: u16 },
    Tick,
}

/// Paces the game loop. Input is polled on the calling thread; each call to
/// [`EventHandler::next_batch`] returns once the next tick is due.
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            last_tick: Instant::now(),
        }
    }

    /// Everything the terminal reported since the previous tick, always
    /// followed by a single `Event::Tick`.
    pub fn next_batch(&mut self) -> io::Result<Vec<Event>> {
        let mut batch = Vec::new();
        loop {
            let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            if let Some(ev) = translate(event::read()?) {
                batch.push(ev);
            }
            if self.last_tick.elapsed() >= self.tick_rate {
                break;
            }
        }
        self.last_tick = Instant::now();
        batch.push(Event::Tick);
        Ok(batch)
    }
}

fn translate(ev: TermEvent) -> Option<Event> {
    match ev {
        TermEvent::Key(key) => translate_key(key),
        TermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Event::PointerDown {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.kind {
            KeyEventKind::Press => Some(Event::Quit),
            _ => None,
        };
    }
    match key.kind {
        // Auto-repeat counts as a fresh press so held keys stay alive on
        // terminals without release events.
        KeyEventKind::Press | KeyEventKind::Repeat => Some(Event::KeyDown(key.code)),
        KeyEventKind::Release => Some(Event::KeyUp(key.code)),
    }
}
