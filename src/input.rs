//! Held-key tracking.
//!
//! Terminals report key presses, not key state.  Instead of acting on each
//! key event individually, we record the frame number of the last
//! press/repeat event for every key.  Each frame we check which keys are
//! still "fresh" (within `HOLD_WINDOW` frames) and treat those as held.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper
//!   `Press` / `Repeat` / `Release` events → keys are removed on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind};

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  8 frames @ 60 FPS ≈ 133 ms, shorter than any OS repeat interval.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    None,
}

#[derive(Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind, frame: u64) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&code)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Horizontal intent this frame.  Left wins when both are held.
    pub fn direction(&self, frame: u64) -> Direction {
        let left = self.is_held(KeyCode::Left, frame)
            || self.is_held(KeyCode::Char('a'), frame)
            || self.is_held(KeyCode::Char('A'), frame);
        let right = self.is_held(KeyCode::Right, frame)
            || self.is_held(KeyCode::Char('d'), frame)
            || self.is_held(KeyCode::Char('D'), frame);
        if left {
            Direction::Left
        } else if right {
            Direction::Right
        } else {
            Direction::None
        }
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_held_within_window() {
        let mut keys = HeldKeys::new();
        keys.record(KeyCode::Left, KeyEventKind::Press, 10);
        assert!(keys.is_held(KeyCode::Left, 10));
        assert!(keys.is_held(KeyCode::Left, 10 + HOLD_WINDOW));
        assert!(!keys.is_held(KeyCode::Left, 11 + HOLD_WINDOW));
    }

    #[test]
    fn release_drops_key_immediately() {
        let mut keys = HeldKeys::new();
        keys.record(KeyCode::Right, KeyEventKind::Press, 1);
        keys.record(KeyCode::Right, KeyEventKind::Release, 2);
        assert!(!keys.is_held(KeyCode::Right, 2));
    }

    #[test]
    fn repeat_refreshes_timestamp() {
        let mut keys = HeldKeys::new();
        keys.record(KeyCode::Right, KeyEventKind::Press, 1);
        keys.record(KeyCode::Right, KeyEventKind::Repeat, 20);
        assert_eq!(keys.direction(25), Direction::Right);
    }

    #[test]
    fn letter_keys_also_steer() {
        let mut keys = HeldKeys::new();
        keys.record(KeyCode::Char('a'), KeyEventKind::Press, 3);
        assert_eq!(keys.direction(3), Direction::Left);
        keys.clear();
        assert_eq!(keys.direction(3), Direction::None);
    }
}
