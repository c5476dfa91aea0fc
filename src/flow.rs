//! Screen flow controller.
//!
//! The program is a small state machine over screens.  Each screen's loop
//! (in the binary) turns raw terminal events into a `Signal`; `next_screen`
//! decides where that leads, and `App` carries the state that outlives a
//! single screen: difficulty, platform layout and the high score.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::Rng;

use crate::compute::{generate_platforms, init_session};
use crate::config::Config;
use crate::entities::{Difficulty, Platform, Rect, Session};
use crate::highscore::{load_high_score, record_score};
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    DifficultySelect,
    Game,
    GameOver,
    Exit,
}

/// Transition token returned by a screen loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Start,
    OpenDifficulty,
    Picked(Difficulty),
    SessionOver,
    Restart,
    Quit,
}

pub fn next_screen(current: Screen, signal: Signal) -> Screen {
    match (current, signal) {
        (_, Signal::Quit) => Screen::Exit,
        (Screen::Home, Signal::Start) => Screen::Game,
        (Screen::Home, Signal::OpenDifficulty) => Screen::DifficultySelect,
        (Screen::DifficultySelect, Signal::Picked(_)) => Screen::Home,
        (Screen::Game, Signal::SessionOver) => Screen::GameOver,
        (Screen::GameOver, Signal::Restart) => Screen::Home,
        (screen, _) => screen,
    }
}

// ── Event → signal mapping ────────────────────────────────────────────────────

fn key_press(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
        _ => None,
    }
}

/// Escape, or Ctrl-C standing in for a window close button.
pub fn is_quit(event: &Event) -> bool {
    match key_press(event) {
        Some(KeyEvent { code: KeyCode::Esc, .. }) => true,
        Some(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Left mouse press, as a cell position.
pub fn pointer_press(event: &Event) -> Option<(u16, u16)> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some((*column, *row)),
        _ => None,
    }
}

/// Pointer press or space bar: launches the player.
pub fn is_primary_action(event: &Event) -> bool {
    pointer_press(event).is_some()
        || matches!(key_press(event), Some(KeyEvent { code: KeyCode::Char(' '), .. }))
}

pub fn home_signal(event: &Event) -> Option<Signal> {
    if is_quit(event) {
        return Some(Signal::Quit);
    }
    match key_press(event)?.code {
        KeyCode::Enter => Some(Signal::Start),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Signal::OpenDifficulty),
        _ => None,
    }
}

pub fn game_over_signal(event: &Event) -> Option<Signal> {
    if is_quit(event) {
        return Some(Signal::Quit);
    }
    match key_press(event)?.code {
        KeyCode::Enter => Some(Signal::Restart),
        _ => None,
    }
}

/// Button rectangles of the difficulty screen, in logical coordinates.
pub fn difficulty_buttons() -> [(Difficulty, Rect); 3] {
    [
        (Difficulty::Easy, Rect::new(300.0, 200.0, 200.0, 50.0)),
        (Difficulty::Medium, Rect::new(300.0, 300.0, 200.0, 50.0)),
        (Difficulty::Hard, Rect::new(300.0, 400.0, 200.0, 50.0)),
    ]
}

/// Difficulty under a terminal cell, if any.  The cell is hit-tested both
/// by its centre and by its projected footprint so buttons stay clickable
/// on very small terminals.
pub fn button_at(viewport: &Viewport, col: u16, row: u16) -> Option<Difficulty> {
    let (x, y) = viewport.to_logical(col, row);
    difficulty_buttons()
        .into_iter()
        .find(|(_, rect)| {
            rect.contains(x, y)
                || viewport.project(rect).is_some_and(|cell| {
                    col >= cell.col
                        && col < cell.col + cell.width
                        && row >= cell.row
                        && row < cell.row + cell.height
                })
        })
        .map(|(difficulty, _)| difficulty)
}

pub fn difficulty_signal(event: &Event, viewport: &Viewport) -> Option<Signal> {
    if is_quit(event) {
        return Some(Signal::Quit);
    }
    if let Some((col, row)) = pointer_press(event) {
        return button_at(viewport, col, row).map(Signal::Picked);
    }
    match key_press(event)?.code {
        KeyCode::Char('1') => Some(Signal::Picked(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Signal::Picked(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Signal::Picked(Difficulty::Hard)),
        _ => None,
    }
}

// ── Program context ───────────────────────────────────────────────────────────

/// State that lives for the whole program run.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub difficulty: Difficulty,
    /// Platform layout the next session starts from.
    pub layout: Vec<Platform>,
    pub high_score: u32,
    /// Score of the most recently finished session.
    pub last_score: u32,
}

impl App {
    pub fn new(config: Config, rng: &mut impl Rng) -> Self {
        let difficulty = Difficulty::default();
        let high_score = load_high_score(&config.high_score_path);
        App {
            config,
            difficulty,
            layout: generate_platforms(difficulty.platform_count(), rng),
            high_score,
            last_score: 0,
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty, rng: &mut impl Rng) {
        log::info!("difficulty set to {:?}", difficulty);
        self.difficulty = difficulty;
        self.layout = generate_platforms(difficulty.platform_count(), rng);
    }

    /// Fresh session on the current layout; re-reads the stored high score.
    pub fn start_session(&mut self, rng: &mut impl Rng) -> Session {
        self.high_score = self
            .high_score
            .max(load_high_score(&self.config.high_score_path));
        log::info!(
            "session start: {:?}, {} platforms, best {}",
            self.difficulty,
            self.layout.len(),
            self.high_score
        );
        init_session(self.difficulty, self.layout.clone(), self.high_score, rng)
    }

    /// Persist a finished session's score if it is a new best, and lay out
    /// fresh platforms for the next one.
    pub fn finish_session(&mut self, session: &Session, rng: &mut impl Rng) {
        self.last_score = session.score;
        if session.score > self.high_score {
            if let Err(err) =
                record_score(&self.config.high_score_path, self.high_score, session.score)
            {
                log::error!("failed to save high score: {}", err);
            }
            self.high_score = session.score;
        }
        self.layout = generate_platforms(self.difficulty.platform_count(), rng);
    }

    /// Apply a signal's side effects and return the next screen.
    pub fn apply(&mut self, current: Screen, signal: Signal, rng: &mut impl Rng) -> Screen {
        if let Signal::Picked(difficulty) = signal {
            self.select_difficulty(difficulty, rng);
        }
        let next = next_screen(current, signal);
        log::debug!("{:?} --{:?}--> {:?}", current, signal, next);
        next
    }
}
