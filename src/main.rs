//! Terminal front end for the memory game.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use clap::{Parser, ValueEnum};
use log::{error, warn};

use memory_match::core::{Clock, ConfigError, GameConfig, GameRng, SystemClock};
use memory_match::engine::GameEngine;
use memory_match::scores::{FileStore, HighScoreStore};
use memory_match::session::{render, Command, LaunchOptions, Session};

/// What to do at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LaunchAction {
    /// Deal a game straight away.
    NewGame,
}

#[derive(Parser, Debug)]
#[command(name = "memory-match", version, about = "Find all the matching pairs")]
struct Cli {
    /// Startup action. Without one the board stays empty until `n` is entered
    #[arg(long, value_enum)]
    action: Option<LaunchAction>,

    /// JSON game config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the high-score file
    #[arg(long)]
    scores_dir: Option<PathBuf>,

    /// Seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let tick = config.timing.tick_interval();

    let clock = SystemClock::new();
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let engine = GameEngine::with_clock(config, clock.clone(), rng)?;

    let scores_dir = cli.scores_dir.unwrap_or_else(default_scores_dir);
    let scores = HighScoreStore::new(FileStore::new(scores_dir));
    let mut session = Session::new(engine, scores, clock.clone());
    session.launch(LaunchOptions {
        start_new_game: cli.action == Some(LaunchAction::NewGame),
    });

    // Stdin is read on its own thread; every command is applied on this one.
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut frame = render::render(&session);
    draw(&frame);
    loop {
        let now = clock.now();
        let wait = session
            .next_wakeup()
            .map_or(tick, |at| at.saturating_sub(now).min(tick));

        let command = match rx.recv_timeout(wait) {
            Ok(line) => match Command::parse(&line) {
                Some(command) => command,
                None => {
                    warn!("unknown command {:?}", line.trim());
                    continue;
                }
            },
            Err(RecvTimeoutError::Timeout) => Command::Tick,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        if command == Command::Quit {
            break;
        }

        session.handle(command);
        // Ticks redraw only when the screen changed: clock, notice expiry, flips
        let next = render::render(&session);
        if command != Command::Tick || next != frame {
            draw(&next);
            frame = next;
        }
    }

    Ok(())
}

fn draw(frame: &str) {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "\x1b[2J\x1b[H{frame}> ");
    let _ = stdout.flush();
}

fn default_scores_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".memory-match")
}
