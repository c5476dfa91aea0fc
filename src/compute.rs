//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `Session` (and, where needed, an RNG handle and the session clock in
//! milliseconds) and returns a brand-new `Session`.  Side effects are
//! limited to the injected RNG.

use rand::Rng;

use crate::catalog::Effect;
use crate::consts::{
    GRAVITY, INVINCIBLE_FLOAT_VELOCITY, JUMP_STRENGTH, PLATFORM_HEIGHT, PLATFORM_WIDTH,
    PLAYER_SIZE, PLAYER_SPEED, PLAYER_START_X, PLAYER_START_Y, POWER_UP_SIZE, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::entities::{
    ActiveEffect, Difficulty, Platform, Player, PowerUp, PowerUpKind, Session, SessionPhase,
};

// ── Entity factory ───────────────────────────────────────────────────────────

/// Scatter `count` platforms over the play field.  Platforms may overlap.
pub fn generate_platforms(count: usize, rng: &mut impl Rng) -> Vec<Platform> {
    (0..count)
        .map(|_| Platform {
            x: random_platform_x(rng),
            y: rng.gen_range(0..=SCREEN_HEIGHT as u32) as f32,
        })
        .collect()
}

/// A fresh power-up somewhere fully on screen, kind drawn uniformly.
pub fn generate_power_up(rng: &mut impl Rng) -> PowerUp {
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    PowerUp {
        x: rng.gen_range(0..=(SCREEN_WIDTH - POWER_UP_SIZE) as u32) as f32,
        y: rng.gen_range(0..=(SCREEN_HEIGHT - POWER_UP_SIZE) as u32) as f32,
        kind,
    }
}

fn random_platform_x(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0..=(SCREEN_WIDTH - PLATFORM_WIDTH) as u32) as f32
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a session that waits for the first jump.
pub fn init_session(
    difficulty: Difficulty,
    platforms: Vec<Platform>,
    high_score: u32,
    rng: &mut impl Rng,
) -> Session {
    Session {
        player: Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            vy: 0.0,
        },
        platforms,
        power_up: generate_power_up(rng),
        active_effect: None,
        score: 0,
        high_score,
        difficulty,
        phase: SessionPhase::NotStarted,
        platform_speed: difficulty.platform_speed(),
        jump_strength: JUMP_STRENGTH,
        invincible: false,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// First primary action: launch the player.  Ignored once running.
pub fn start_jump(state: &Session) -> Session {
    if state.phase != SessionPhase::NotStarted {
        return state.clone();
    }
    Session {
        player: Player {
            vy: state.jump_strength,
            ..state.player.clone()
        },
        phase: SessionPhase::Running,
        ..state.clone()
    }
}

pub fn move_player_left(state: &Session) -> Session {
    if state.phase != SessionPhase::Running {
        return state.clone();
    }
    Session {
        player: Player {
            x: (state.player.x - PLAYER_SPEED).max(0.0),
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &Session) -> Session {
    if state.phase != SessionPhase::Running {
        return state.clone();
    }
    Session {
        player: Player {
            x: (state.player.x + PLAYER_SPEED).min(SCREEN_WIDTH - PLAYER_SIZE),
            ..state.player.clone()
        },
        ..state.clone()
    }
}

// ── Queries ──────────────────────────────────────────────────────────────────

pub fn is_game_over(state: &Session) -> bool {
    state.phase == SessionPhase::Ended
}

/// Whole seconds left on the active effect (0 when none).
pub fn effect_time_left(state: &Session, now_ms: u64) -> u64 {
    match &state.active_effect {
        Some(effect) => {
            let elapsed = now_ms.saturating_sub(effect.activated_at_ms);
            effect.kind.spec().duration_ms.saturating_sub(elapsed) / 1000
        }
        None => 0,
    }
}

// ── Per-frame steps (pure wrappers) ─────────────────────────────────────────

/// Bounce off (or, when invincible, destroy) every platform touched while
/// falling.
pub fn resolve_platform_contacts(state: &Session) -> Session {
    let mut next = state.clone();
    platform_contacts(&mut next);
    next
}

/// Pick up the live power-up if the player touches it.
pub fn collect_power_up(state: &Session, rng: &mut impl Rng, now_ms: u64) -> Session {
    let mut next = state.clone();
    power_up_pickup(&mut next, rng, now_ms);
    next
}

/// Drop the active effect once its duration has passed.
pub fn expire_effect(state: &Session, now_ms: u64) -> Session {
    let mut next = state.clone();
    effect_expiry(&mut next, now_ms);
    next
}

/// Move every platform down and recycle those that left the bottom.
pub fn scroll_platforms(state: &Session, rng: &mut impl Rng) -> Session {
    let mut next = state.clone();
    platform_scroll(&mut next, rng);
    next
}

// ── Per-frame tick (nearly pure — RNG and clock are injected) ───────────────

/// Advance the session by one frame.  All randomness comes through `rng`
/// and all time through `now_ms`, so callers control determinism.
pub fn tick(state: &Session, rng: &mut impl Rng, now_ms: u64) -> Session {
    if state.phase != SessionPhase::Running {
        return state.clone();
    }
    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Vertical kinematics ───────────────────────────────────────────────
    if next.invincible {
        next.player.vy = INVINCIBLE_FLOAT_VELOCITY;
    } else {
        next.player.vy += GRAVITY;
    }
    next.player.y += next.player.vy;
    if next.player.y < 0.0 {
        next.player.y = 0.0;
        next.player.vy = 0.0;
    }

    // ── 2. Platform contacts ─────────────────────────────────────────────────
    platform_contacts(&mut next);

    // ── 3. Power-up pickup ───────────────────────────────────────────────────
    power_up_pickup(&mut next, rng, now_ms);

    // ── 4. Effect expiry ─────────────────────────────────────────────────────
    effect_expiry(&mut next, now_ms);

    // ── 5. Fall-death ────────────────────────────────────────────────────────
    if next.player.y > SCREEN_HEIGHT && !next.invincible {
        log::info!(
            "session ended: score {} on {:?} after {} frames",
            next.score,
            next.difficulty,
            next.frame
        );
        next.phase = SessionPhase::Ended;
        return next;
    }

    // ── 6. Scroll ────────────────────────────────────────────────────────────
    platform_scroll(&mut next, rng);

    next
}

// ── In-place helpers ─────────────────────────────────────────────────────────

fn platform_contacts(state: &mut Session) {
    let Session {
        player,
        platforms,
        score,
        invincible,
        jump_strength,
        ..
    } = state;
    let player_box = player.rect();
    let mut destroyed = 0;
    // Velocity is re-read for every platform: after a bounce the player is
    // rising, so later overlaps in the same frame are ignored.
    platforms.retain(|platform| {
        if player.vy > 0.0 && player_box.overlaps(&platform.rect()) {
            if *invincible {
                destroyed += 1;
                return false;
            }
            player.vy = *jump_strength;
            *score += 1;
        }
        true
    });
    if destroyed > 0 {
        log::debug!("{} platform(s) smashed while invincible", destroyed);
    }
}

fn power_up_pickup(state: &mut Session, rng: &mut impl Rng, now_ms: u64) {
    if !state.player.rect().overlaps(&state.power_up.rect()) {
        return;
    }
    let kind = state.power_up.kind;
    log::debug!("picked up {} at {}ms", kind.label(), now_ms);

    // A new pickup replaces whatever was active; overrides never stack.
    reset_to_baseline(state);
    match kind.spec().effect {
        Effect::PlatformSpeed(speed) => state.platform_speed = speed,
        Effect::JumpStrength(strength) => state.jump_strength = strength,
        Effect::Invincible => state.invincible = true,
    }
    state.active_effect = Some(ActiveEffect {
        kind,
        activated_at_ms: now_ms,
    });
    state.power_up = generate_power_up(rng);
}

fn effect_expiry(state: &mut Session, now_ms: u64) {
    let expired = match &state.active_effect {
        Some(effect) => {
            now_ms.saturating_sub(effect.activated_at_ms) > effect.kind.spec().duration_ms
        }
        None => false,
    };
    if expired {
        log::debug!("power-up expired at {}ms", now_ms);
        state.active_effect = None;
        reset_to_baseline(state);
    }
}

fn reset_to_baseline(state: &mut Session) {
    state.platform_speed = state.difficulty.platform_speed();
    state.jump_strength = JUMP_STRENGTH;
    state.invincible = false;
}

fn platform_scroll(state: &mut Session, rng: &mut impl Rng) {
    for platform in &mut state.platforms {
        platform.y += state.platform_speed;
        if platform.y > SCREEN_HEIGHT {
            platform.y = -PLATFORM_HEIGHT;
            platform.x = random_platform_x(rng);
        }
    }
}
