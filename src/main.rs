//! Terminal snake runner (default binary).
//!
//! Reads configuration from the environment, logs to a file (the terminal
//! belongs to the renderer), and drives the game with a single-threaded loop:
//! poll input until the next tick is due, then let the session step.

use std::env;
use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_snake::core::GameConfig;
use tui_snake::engine::GameSession;
use tui_snake::input::{map_key, NameInput, UiAction};
use tui_snake::leaderboard::{Leaderboard, Standings};
use tui_snake::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use tui_snake::types::GameEvent;

/// Upper bound on one input wait so leaderboard results show up promptly.
const MAX_INPUT_WAIT_MS: u64 = 100;

fn main() -> Result<()> {
    init_logging()?;
    info!("starting tui-snake");

    let config = GameConfig::from_env();
    let leaderboard = match Leaderboard::start_from_env() {
        Ok(lb) => lb,
        Err(e) => {
            warn!("leaderboard unavailable: {:#}", e);
            None
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, leaderboard);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        warn!("exiting with error: {:#}", e);
    }
    result
}

/// Install a file logger.
///
/// - `SNAKE_LOG_PATH`: log file (default `tui-snake.log`)
/// - `SNAKE_LOG_LEVEL`: `error`..`trace` or `off` (default `info`)
fn init_logging() -> Result<()> {
    let path = env::var("SNAKE_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "tui-snake.log".to_string());
    let level = env::var("SNAKE_LOG_LEVEL")
        .ok()
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    let file = File::create(&path).with_context(|| format!("failed to create log file {path}"))?;
    WriteLogger::init(level, Config::default(), file).context("failed to install logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig, mut leaderboard: Option<Leaderboard>) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut session = GameSession::new(config, now_ms()).context("invalid game configuration")?;
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut name = NameInput::new();
    let mut notice: Option<String> = None;

    let mut standings = Standings::new();
    if let Some(lb) = &leaderboard {
        lb.refresh();
        standings.begin_fetch();
    }

    loop {
        if let Some(lb) = leaderboard.as_mut() {
            while let Some(update) = lb.try_recv() {
                standings.apply(update);
            }
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudView {
            name_input: name.as_str(),
            notice: notice.as_deref(),
            leaderboard: leaderboard.as_ref().map(|_| &standings),
        };
        view.render_into(session.snapshot(), &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let wait = session.time_until_due(now_ms()).min(MAX_INPUT_WAIT_MS);
        if event::poll(Duration::from_millis(wait))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let phase = session.state().phase();
                    match map_key(key, phase) {
                        Some(UiAction::Quit) => return Ok(()),
                        Some(UiAction::NameChar(ch)) => {
                            name.push(ch);
                            notice = None;
                        }
                        Some(UiAction::Backspace) => {
                            name.backspace();
                            notice = None;
                        }
                        Some(UiAction::Submit) => {
                            if let Err(e) = session.apply(name.start_command(), now_ms()) {
                                notice = Some(e.to_string());
                            }
                        }
                        Some(UiAction::Command(command)) => {
                            if let Err(e) = session.apply(command, now_ms()) {
                                warn!("command rejected: {}", e);
                            }
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        for game_event in session.poll(now_ms()) {
            if let GameEvent::GameOver { final_score } = game_event {
                if let Some(lb) = &leaderboard {
                    let player = session.state().player_name().to_string();
                    lb.submit_and_refresh(player, final_score);
                    standings.begin_fetch();
                }
            }
        }
    }
}
