//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer, the current viewport and an
//! immutable view of whatever it draws.  No game logic is performed; this
//! module only translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_jumper::compute::effect_time_left;
use space_jumper::consts::SCREEN_WIDTH;
use space_jumper::entities::{Difficulty, Rect, Session, SessionPhase};
use space_jumper::flow::difficulty_buttons;
use space_jumper::viewport::{CellRect, Viewport};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;
const C_PLAYER: Color = Color::Blue;
const C_PLAYER_INVINCIBLE: Color = Color::Red;
const C_PLATFORM: Color = Color::Green;

const BLOCK: &str = "█";

// ── Public entry points ───────────────────────────────────────────────────────

pub fn render_home<W: Write>(out: &mut W, vp: &Viewport, high_score: u32) -> std::io::Result<()> {
    begin_frame(out)?;
    draw_centered(out, vp, 200.0, "S P A C E   J U M P E R", C_TITLE)?;
    draw_centered(out, vp, 300.0, "Press ENTER to Start", C_TEXT)?;
    draw_centered(out, vp, 350.0, "Press D for Difficulty", C_TEXT)?;
    draw_centered(out, vp, 400.0, "Press ESC to Exit", C_TEXT)?;
    draw_centered(out, vp, 450.0, &format!("High Score: {}", high_score), Color::Yellow)?;
    end_frame(out, vp)
}

pub fn render_difficulty<W: Write>(
    out: &mut W,
    vp: &Viewport,
    current: Difficulty,
) -> std::io::Result<()> {
    begin_frame(out)?;
    draw_centered(out, vp, 50.0, "Select Difficulty", C_TITLE)?;

    for (i, (difficulty, rect)) in difficulty_buttons().iter().enumerate() {
        let (bg, fg) = match difficulty {
            Difficulty::Easy => (Color::Green, Color::Black),
            Difficulty::Medium => (Color::Blue, Color::White),
            Difficulty::Hard => (Color::Red, Color::White),
        };
        draw_button(out, vp, rect, bg, fg, &format!("[{}] {}", i + 1, difficulty.label()))?;
    }

    draw_centered(
        out,
        vp,
        500.0,
        &format!("Current: {}   (click a button or press 1-3)", current.label()),
        C_HINT,
    )?;
    end_frame(out, vp)
}

/// Render one complete game frame.
pub fn render_game<W: Write>(
    out: &mut W,
    vp: &Viewport,
    session: &Session,
    now_ms: u64,
) -> std::io::Result<()> {
    begin_frame(out)?;

    if session.phase == SessionPhase::NotStarted {
        draw_centered(out, vp, 300.0, "Click to Start Jumping", C_TEXT)?;
        draw_centered(out, vp, 340.0, "(or press SPACE)", C_HINT)?;
        return end_frame(out, vp);
    }

    for platform in &session.platforms {
        fill(out, vp, &platform.rect(), C_PLATFORM)?;
    }
    draw_power_up(out, vp, session)?;

    let player_color = if session.invincible {
        C_PLAYER_INVINCIBLE
    } else {
        C_PLAYER
    };
    fill(out, vp, &session.player.rect(), player_color)?;

    draw_hud(out, vp, session, now_ms)?;
    end_frame(out, vp)
}

pub fn render_game_over<W: Write>(
    out: &mut W,
    vp: &Viewport,
    score: u32,
    high_score: u32,
) -> std::io::Result<()> {
    begin_frame(out)?;
    draw_centered(out, vp, 200.0, "G A M E   O V E R", Color::Red)?;
    draw_centered(out, vp, 300.0, &format!("Score: {}", score), Color::Yellow)?;
    let best_color = if score >= high_score && score > 0 {
        Color::Yellow
    } else {
        C_TEXT
    };
    draw_centered(out, vp, 350.0, &format!("High Score: {}", high_score), best_color)?;
    draw_centered(out, vp, 400.0, "Press ENTER to Restart", C_TEXT)?;
    draw_centered(out, vp, 450.0, "Press ESC to Exit", C_TEXT)?;
    end_frame(out, vp)
}

// ── Frame bracketing ──────────────────────────────────────────────────────────

fn begin_frame<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::BeginSynchronizedUpdate)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

fn end_frame<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.queue(terminal::EndSynchronizedUpdate)?;
    out.flush()
}

// ── Primitives ────────────────────────────────────────────────────────────────

/// Print `text` at a cell, cut off at the right edge.
fn draw_text<W: Write>(
    out: &mut W,
    vp: &Viewport,
    col: u16,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if col >= vp.cols || row >= vp.rows {
        return Ok(());
    }
    let room = (vp.cols - col) as usize;
    let clipped: String = text.chars().take(room).collect();
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(clipped))?;
    Ok(())
}

/// Text horizontally centred on the screen at logical height `y`.
fn draw_centered<W: Write>(
    out: &mut W,
    vp: &Viewport,
    y: f32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let len = text.chars().count() as u16;
    let col = (vp.cols / 2).saturating_sub(len / 2);
    draw_text(out, vp, col, vp.row_at(y), text, color)
}

fn fill_cells<W: Write>(out: &mut W, cells: &CellRect, color: Color) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    let line = BLOCK.repeat(cells.width as usize);
    for row in cells.row..cells.row + cells.height {
        out.queue(cursor::MoveTo(cells.col, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn fill<W: Write>(out: &mut W, vp: &Viewport, rect: &Rect, color: Color) -> std::io::Result<()> {
    match vp.project(rect) {
        Some(cells) => fill_cells(out, &cells, color),
        None => Ok(()),
    }
}

fn draw_button<W: Write>(
    out: &mut W,
    vp: &Viewport,
    rect: &Rect,
    bg: Color,
    fg: Color,
    label: &str,
) -> std::io::Result<()> {
    let Some(cells) = vp.project(rect) else {
        return Ok(());
    };
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(style::SetForegroundColor(fg))?;
    let blank = " ".repeat(cells.width as usize);
    for row in cells.row..cells.row + cells.height {
        out.queue(cursor::MoveTo(cells.col, row))?;
        out.queue(Print(&blank))?;
    }

    let text: String = label.chars().take(cells.width as usize).collect();
    let len = text.chars().count() as u16;
    let col = cells.col + (cells.width - len) / 2;
    let row = cells.row + cells.height / 2;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(text))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// The live power-up: a coloured block with the kind's glyph in its
/// top-left cell.
fn draw_power_up<W: Write>(out: &mut W, vp: &Viewport, session: &Session) -> std::io::Result<()> {
    let power_up = &session.power_up;
    let spec = power_up.kind.spec();
    let Some(cells) = vp.project(&power_up.rect()) else {
        return Ok(());
    };
    fill_cells(out, &cells, spec.color)?;
    out.queue(cursor::MoveTo(cells.col, cells.row))?;
    out.queue(style::SetBackgroundColor(spec.color))?;
    out.queue(style::SetForegroundColor(Color::Black))?;
    out.queue(Print(power_up.kind.symbol()))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── HUD (top-left) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    vp: &Viewport,
    session: &Session,
    now_ms: u64,
) -> std::io::Result<()> {
    draw_text(out, vp, 1, 0, &format!("Score: {}", session.score), C_TEXT)?;
    draw_text(out, vp, 1, 1, &format!("High Score: {}", session.high_score), C_TEXT)?;

    if let Some(effect) = &session.active_effect {
        let line = format!(
            "Active: {} ({}s)",
            effect.kind.label(),
            effect_time_left(session, now_ms)
        );
        draw_text(out, vp, 1, 2, &line, effect.kind.spec().color)?;
    }

    // Difficulty — right
    let tag = format!("[ {} ]", session.difficulty.label().to_uppercase());
    let col = vp
        .to_cell(SCREEN_WIDTH - 1.0, 0.0)
        .map(|(c, _)| c)
        .unwrap_or(0)
        .saturating_sub(tag.len() as u16);
    draw_text(out, vp, col, 0, &tag, C_HINT)?;
    Ok(())
}
