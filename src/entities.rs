//! All game entity types — pure data, no logic.

use serde::{Deserialize, Serialize};

use crate::consts::{PLATFORM_HEIGHT, PLATFORM_WIDTH, PLAYER_SIZE, POWER_UP_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Baseline scroll speed before any power-up override.
    pub fn platform_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 3.0,
            Difficulty::Hard => 5.0,
        }
    }

    /// Number of platforms in a fresh layout.
    pub fn platform_count(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 5,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the first primary action.
    NotStarted,
    Running,
    /// Player fell out of the play area.
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    SlowPlatforms,
    HighJump,
    Invincibility,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Half-open containment, used for pointer hit-testing.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity; positive means falling.
    pub vy: f32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
}

impl Platform {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLATFORM_WIDTH, PLATFORM_HEIGHT)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, POWER_UP_SIZE, POWER_UP_SIZE)
    }
}

/// The power-up currently in effect and when it was collected.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    /// Session clock reading (ms) at pickup.
    pub activated_at_ms: u64,
}

// ── Master session state ──────────────────────────────────────────────────────

/// One playthrough.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct Session {
    pub player: Player,
    pub platforms: Vec<Platform>,
    /// The single live power-up waiting to be collected.
    pub power_up: PowerUp,
    pub active_effect: Option<ActiveEffect>,
    pub score: u32,
    /// Best score known when the session started.
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub phase: SessionPhase,
    /// Current scroll speed (baseline or power-up override).
    pub platform_speed: f32,
    /// Current jump velocity (baseline or power-up override).
    pub jump_strength: f32,
    pub invincible: bool,
    pub frame: u64,
}
