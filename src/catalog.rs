//! Power-up catalog: what each kind looks like, how long it lasts and
//! which session parameter it overrides.

use crossterm::style::Color;

use crate::consts::{HIGH_JUMP_STRENGTH, SLOW_PLATFORM_SPEED};
use crate::entities::PowerUpKind;

/// Parameter override applied while an effect is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    PlatformSpeed(f32),
    JumpStrength(f32),
    Invincible,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerUpSpec {
    pub color: Color,
    pub duration_ms: u64,
    pub effect: Effect,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::SlowPlatforms,
        PowerUpKind::HighJump,
        PowerUpKind::Invincibility,
    ];

    pub fn spec(self) -> PowerUpSpec {
        match self {
            PowerUpKind::SlowPlatforms => PowerUpSpec {
                color: Color::Yellow,
                duration_ms: 10_000,
                effect: Effect::PlatformSpeed(SLOW_PLATFORM_SPEED),
            },
            PowerUpKind::HighJump => PowerUpSpec {
                color: Color::Blue,
                duration_ms: 10_000,
                effect: Effect::JumpStrength(HIGH_JUMP_STRENGTH),
            },
            PowerUpKind::Invincibility => PowerUpSpec {
                color: Color::Red,
                duration_ms: 10_000,
                effect: Effect::Invincible,
            },
        }
    }

    /// Name shown in the HUD.
    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::SlowPlatforms => "slow_platforms",
            PowerUpKind::HighJump => "high_jump",
            PowerUpKind::Invincibility => "invincibility",
        }
    }

    /// Single-cell glyph drawn for the live power-up.
    pub fn symbol(self) -> &'static str {
        match self {
            PowerUpKind::SlowPlatforms => "◷",
            PowerUpKind::HighJump => "⇑",
            PowerUpKind::Invincibility => "✦",
        }
    }
}
