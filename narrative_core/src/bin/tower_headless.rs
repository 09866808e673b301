//! Plays the Cursed Tower on a text grid.
//!
//! Reads whitespace-separated tokens from stdin, one frame per token, and
//! prints the screen after each frame:
//!
//! ```text
//! up down left right a b   hold that button for the frame
//! a+down                   hold several buttons
//! .                        release everything
//! new                      start a new game
//! ```
//!
//! Repeating a token keeps the button held, so `a a` is one press held for
//! two frames; use `a . a` for two presses.
//!
//! Usage: `tower_headless [config.toml|config.json]`

use std::io::{self, BufRead};
use std::path::PathBuf;

use narrative_core::{Button, ButtonState, ConfigError, EngineConfig, GamePresenter, TextGrid};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV_VAR: &str = "TOWER_CONFIG";

#[derive(Debug, Error)]
enum HeadlessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
}

enum Token {
    Held(Vec<Button>),
    NewGame,
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "headless_failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn load_config() -> Result<EngineConfig, ConfigError> {
    match config_path() {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            EngineConfig::load(&path)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn run() -> Result<(), HeadlessError> {
    let config = load_config()?;
    let mut presenter = GamePresenter::new(&config)?;
    let mut grid = TextGrid::new(config.screen);
    let mut buttons = ButtonState::new();

    presenter.render(&mut grid);
    println!("{grid}");

    let mut frames = 0usize;
    for line in io::stdin().lock().lines() {
        for word in line?.split_whitespace() {
            match parse_token(word) {
                Some(Token::Held(held)) => buttons.update_held(&held),
                Some(Token::NewGame) => {
                    presenter.new_game();
                    buttons.update_held(&[]);
                }
                None => {
                    warn!(token = word, "unknown token");
                    continue;
                }
            }

            grid.clear();
            presenter.frame(&buttons, &mut grid);
            frames += 1;
            debug!(
                frame = frames,
                mode = ?presenter.mode(),
                focus = presenter.screen().menu().selected_label().unwrap_or(""),
                cell = ?grid.focus_cell(),
                "frame"
            );
            println!("{grid}");
        }
    }

    info!(frames, scene = ?presenter.current_event().scene(), "input finished");
    Ok(())
}

fn parse_token(word: &str) -> Option<Token> {
    match word {
        "." => return Some(Token::Held(Vec::new())),
        "new" => return Some(Token::NewGame),
        _ => {}
    }

    word.split('+')
        .map(|name| match name.to_ascii_lowercase().as_str() {
            "up" => Some(Button::Up),
            "down" => Some(Button::Down),
            "left" => Some(Button::Left),
            "right" => Some(Button::Right),
            "a" => Some(Button::A),
            "b" => Some(Button::B),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(Token::Held)
}
