mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::ThreadRng;
use rand::thread_rng;

use space_jumper::compute::{is_game_over, move_player_left, move_player_right, start_jump, tick};
use space_jumper::config::Config;
use space_jumper::flow::{
    difficulty_signal, game_over_signal, home_signal, is_primary_action, is_quit, App, Screen,
    Signal,
};
use space_jumper::input::{Direction, HeldKeys};
use space_jumper::viewport::Viewport;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so log lines go to a file.
fn init_logging(config: &Config) {
    let file = match File::create(&config.log_path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

// ── Frame helpers ─────────────────────────────────────────────────────────────

fn current_viewport() -> std::io::Result<Viewport> {
    let (cols, rows) = terminal::size()?;
    Ok(Viewport::new(cols, rows))
}

fn pace(frame_start: Instant, frame: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame {
        thread::sleep(frame - elapsed);
    }
}

// ── Modal screens ─────────────────────────────────────────────────────────────

/// Shared loop for every menu-like screen: draw, drain input, and return as
/// soon as an event maps to a signal.
fn run_modal<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
    mut render: impl FnMut(&mut W, &Viewport) -> std::io::Result<()>,
    to_signal: impl Fn(&Event, &Viewport) -> Option<Signal>,
) -> std::io::Result<Signal> {
    loop {
        let frame_start = Instant::now();
        let viewport = current_viewport()?;

        loop {
            match rx.try_recv() {
                Ok(event) => {
                    if let Some(signal) = to_signal(&event, &viewport) {
                        return Ok(signal);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(Signal::Quit),
            }
        }

        render(out, &viewport)?;
        pace(frame_start, frame);
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Play one session.  Returns `SessionOver` after a fall, `Quit` on escape.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    app: &mut App,
    rng: &mut ThreadRng,
) -> std::io::Result<Signal> {
    let frame_duration = app.config.frame_duration();
    let mut session = app.start_session(rng);
    let clock = Instant::now();
    let mut held = HeldKeys::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let viewport = current_viewport()?;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            let event = match rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(Signal::Quit),
            };
            if is_quit(&event) {
                log::info!("quit mid-session with score {}", session.score);
                return Ok(Signal::Quit);
            }
            if is_primary_action(&event) {
                session = start_jump(&session);
            }
            if let Event::Key(key) = event {
                held.record(key.code, key.kind, frame);
            }
        }

        // ── Apply held-key movement ───────────────────────────────────────────
        session = match held.direction(frame) {
            Direction::Left => move_player_left(&session),
            Direction::Right => move_player_right(&session),
            Direction::None => session,
        };

        let now_ms = clock.elapsed().as_millis() as u64;
        session = tick(&session, rng, now_ms);

        if is_game_over(&session) {
            app.finish_session(&session, rng);
            return Ok(Signal::SessionOver);
        }

        display::render_game(out, &viewport, &session, now_ms)?;
        pace(frame_start, frame_duration);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);
    log::info!("starting with {:?}", config);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::error!("input reader stopped: {}", err);
                break;
            }
        }
    });

    let result = run(&mut out, &rx, config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("exiting");
    result.context("game loop failed")
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, config: Config) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut app = App::new(config, &mut rng);
    let frame = app.config.frame_duration();
    let mut screen = Screen::Home;

    loop {
        let signal = match screen {
            Screen::Home => {
                let high_score = app.high_score;
                run_modal(
                    out,
                    rx,
                    frame,
                    |out, vp| display::render_home(out, vp, high_score),
                    |ev, _| home_signal(ev),
                )?
            }
            Screen::DifficultySelect => {
                let current = app.difficulty;
                run_modal(
                    out,
                    rx,
                    frame,
                    |out, vp| display::render_difficulty(out, vp, current),
                    difficulty_signal,
                )?
            }
            Screen::Game => game_loop(out, rx, &mut app, &mut rng)?,
            Screen::GameOver => {
                let (score, high_score) = (app.last_score, app.high_score);
                run_modal(
                    out,
                    rx,
                    frame,
                    |out, vp| display::render_game_over(out, vp, score, high_score),
                    |ev, _| game_over_signal(ev),
                )?
            }
            Screen::Exit => break,
        };
        screen = app.apply(screen, signal, &mut rng);
    }
    Ok(())
}
