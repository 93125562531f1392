//! Keyboard/mouse state reduced to per-tick intents and edge events.
//!
//! Held keys are tracked by the frame they were last seen. Terminals with
//! keyboard enhancement send releases and keys drop out immediately; classic
//! terminals only send repeated presses, so a key also expires after
//! `HOLD_WINDOW` frames without a refresh.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::entities::MoveIntent;

/// Frames a press/repeat keeps a key held. At 120 ticks/s this is ~100 ms,
/// shorter than any OS key-repeat gap once repeating has started.
pub const HOLD_WINDOW: u64 = 12;

/// Min frames between shots while Space keeps repeating.
pub const FIRE_COOLDOWN: u32 = 12;

/// Everything the simulation reads from the player in one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub intent: MoveIntent,
    pub fire: bool,
    pub quit: bool,
    pub restart: bool,
}

/// Terminal cells covered by a clickable control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenArea {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl ScreenArea {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.col
            && col < self.col.saturating_add(self.width)
            && row >= self.row
            && row < self.row.saturating_add(self.height)
    }
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    fire_cooldown: u32,
    fire_pressed: bool,
    quit: bool,
    restart: bool,
    restart_button: Option<ScreenArea>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the frame counter. Call once per tick before feeding events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    /// Where the "Play Again" button currently sits, if it is on screen.
    pub fn set_restart_button(&mut self, area: Option<ScreenArea>) {
        self.restart_button = area;
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        match key.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(key.code, self.frame);
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true;
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => self.restart = true,
                    KeyCode::Char(' ') => self.fire_pressed = true,
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(key.code, self.frame);
                if key.code == KeyCode::Char(' ') {
                    self.fire_pressed = true;
                }
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&key.code);
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(button) = self.restart_button {
            if button.contains(mouse.column, mouse.row) {
                self.restart = true;
            }
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&k| self.is_held(k))
    }

    /// Collapse everything seen so far into this tick's snapshot. Edge
    /// events are consumed; held keys carry over.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let intent = MoveIntent {
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
            up: self.any_held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
            down: self.any_held(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
        };

        let fire = self.fire_pressed && self.fire_cooldown == 0;
        if fire {
            self.fire_cooldown = FIRE_COOLDOWN;
        } else {
            self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
        }

        let snapshot = InputSnapshot {
            intent,
            fire,
            quit: self.quit,
            restart: self.restart,
        };
        self.fire_pressed = false;
        self.restart = false;
        snapshot
    }
}
