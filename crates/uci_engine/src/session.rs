//! The UCI command loop: one `Game`, one engine, text in and out.

use std::io::{BufRead, Write};

use anyhow::Result;
use chess_core::{apply_uci_position, move_to_uci, Color, Engine, Game};
use classical_engine::ClassicalEngine;
use tracing::{debug, info, warn};

use crate::config::{clamp_depth, EngineConfig, MAX_DEPTH};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct UciSession {
    game: Game,
    engine: ClassicalEngine,
    depth: u8,
}

impl UciSession {
    pub fn new(config: &EngineConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => ClassicalEngine::seeded(seed),
            None => ClassicalEngine::new(),
        };
        Self {
            game: Game::new(),
            engine,
            depth: clamp_depth(config.depth),
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if self.handle(&line, &mut out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Handles a single command line, writing any reply to `out`.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&cmd) = parts.first() else {
            return Ok(Flow::Continue);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {}",
                    self.depth, MAX_DEPTH
                )?;
                writeln!(out, "option name Seed type string default <random>")?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(&parts[1..]),
            "ucinewgame" => {
                self.game.reset();
                self.engine.new_game();
            }
            "position" => {
                if let Err(e) = apply_uci_position(&mut self.game, &parts[1..]) {
                    warn!(error = %e, "bad position command");
                }
            }
            "go" => self.go(&parts[1..], out)?,
            "d" => {
                let json = serde_json::to_string(&self.game.current_state())?;
                writeln!(out, "{json}")?;
            }
            "quit" => return Ok(Flow::Quit),
            _ => debug!(line, "ignoring unknown command"),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// `setoption name <name...> value <value...>`
    fn set_option(&mut self, args: &[&str]) {
        let name_at = args.iter().position(|&t| t == "name");
        let value_at = args.iter().position(|&t| t == "value");
        let (Some(n), Some(v)) = (name_at, value_at) else {
            warn!(?args, "malformed setoption");
            return;
        };
        if v <= n {
            warn!(?args, "malformed setoption");
            return;
        }
        let name = args[n + 1..v].join(" ");
        let value = args[v + 1..].join(" ");

        if name.eq_ignore_ascii_case("depth") {
            match value.parse::<u8>() {
                Ok(d) => {
                    self.depth = clamp_depth(d);
                    info!(depth = self.depth, "search depth set");
                }
                Err(_) => warn!(%value, "ignoring non-numeric depth"),
            }
        } else if self.engine.set_option(&name, &value) {
            info!(%name, %value, "engine option set");
        } else {
            warn!(%name, "unknown option");
        }
    }

    /// `go [depth N]`; other search limits are ignored.
    fn go<W: Write>(&mut self, args: &[&str], out: &mut W) -> Result<()> {
        let depth = args
            .iter()
            .position(|&t| t == "depth")
            .and_then(|i| args.get(i + 1))
            .and_then(|d| d.parse::<u8>().ok())
            .map(clamp_depth)
            .unwrap_or(self.depth);

        let result = self.engine.search(&self.game, depth);
        // UCI scores are from the side to move
        let score = match self.game.turn() {
            Color::White => result.score,
            Color::Black => -result.score,
        };
        writeln!(
            out,
            "info depth {} score cp {} nodes {}",
            result.depth, score, result.nodes
        )?;
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", move_to_uci(&mv))?,
            None => writeln!(out, "bestmove 0000")?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
