//! Interactive command-line front-end.
//!
//! Parses line commands, maintains the current session, routes moves to the
//! turn controller, and prints the resulting board, standings, and pending
//! animation events. This is hosting glue; all rules live in the library.

use std::io::{self, BufRead, Write};

use crush_ludo_chess::engine::turn_controller::{MoveRejection, TurnController};
use crush_ludo_chess::engines::engine_random::RandomEngine;
use crush_ludo_chess::engines::engine_trait::Engine;
use crush_ludo_chess::game_state::game_types::GamePhase;
use crush_ludo_chess::moves::move_descriptions::MoveDescription;
use crush_ludo_chess::utils::render_game_state::render_game_state;

fn main() -> io::Result<()> {
    run_stdio_loop()
}

fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = CliSession::new();

    writeln!(stdout, "crush_ludo_chess (seed {})", session.controller.seed())?;
    writeln!(stdout, "type 'help' for commands")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct CliSession {
    controller: TurnController,
    auto_engine: RandomEngine,
}

impl CliSession {
    fn new() -> Self {
        Self {
            controller: TurnController::new(None),
            auto_engine: RandomEngine::new(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "help" => {
                writeln!(out, "new [seed]      start a fresh game")?;
                writeln!(out, "show            print the board and standings")?;
                writeln!(out, "moves           list legal moves for the side to move")?;
                writeln!(out, "move r,c r,c    play a move")?;
                writeln!(out, "skip            pass the turn")?;
                writeln!(out, "auto            let the random engine play one move")?;
                writeln!(out, "events          drain pending animation events")?;
                writeln!(out, "quit            exit")?;
            }
            "new" => {
                let seed = parts.next().and_then(|s| s.parse::<u64>().ok());
                self.controller.reset(seed);
                writeln!(out, "new game, seed {}", self.controller.seed())?;
            }
            "show" => {
                write!(out, "{}", render_game_state(self.controller.state()))?;
                writeln!(out, "to move: {}", self.controller.current_team())?;
            }
            "moves" => {
                let team = self.controller.current_team();
                match self.controller.list_legal_moves(team) {
                    Ok(moves) => {
                        writeln!(out, "{} legal moves for {}", moves.len(), team)?;
                        for mv in moves {
                            writeln!(out, "  {}", mv.move_description)?;
                        }
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "move" => {
                let rest = trimmed.trim_start_matches("move").trim();
                match rest.parse::<MoveDescription>() {
                    Ok(mv) => self.play(mv, out)?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "skip" => {
                if self.controller.skip_turn() {
                    writeln!(out, "turn passed to {}", self.controller.current_team())?;
                } else {
                    writeln!(out, "cannot skip now")?;
                }
            }
            "auto" => {
                let team = self.controller.current_team();
                match self.auto_engine.choose_move(self.controller.state(), team) {
                    Ok(output) => match output.best_move {
                        Some(mv) => {
                            writeln!(out, "{team} plays {mv}")?;
                            self.play(mv, out)?;
                        }
                        None => {
                            self.controller.skip_turn();
                            writeln!(out, "{team} has no legal moves; turn skipped")?;
                        }
                    },
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "events" => {
                while let Some(event) = self.controller.poll_event() {
                    writeln!(out, "  {event:?}")?;
                }
            }
            "quit" | "exit" => {
                return Ok(true);
            }
            other => {
                writeln!(out, "unknown command '{other}' (try 'help')")?;
            }
        }

        Ok(false)
    }

    fn play(&mut self, mv: MoveDescription, out: &mut impl Write) -> io::Result<()> {
        let result = self.controller.submit_move(mv.from, mv.to);
        match result.rejection {
            Some(MoveRejection::IllegalMove) => writeln!(out, "illegal move")?,
            Some(MoveRejection::EngineBusy) => writeln!(out, "engine is busy resolving")?,
            Some(MoveRejection::GameOver) => writeln!(out, "the game is over")?,
            None => {
                if let Some(kind) = result.capture {
                    writeln!(
                        out,
                        "captured a {:?} for {} points",
                        kind, result.points_awarded
                    )?;
                }
                if result.collision_kill {
                    writeln!(out, "king collision: sent back to its start box")?;
                }
                if result.entered_home_stretch {
                    writeln!(out, "king entered its home stretch")?;
                }
                if let Some(winner) = result.victory {
                    writeln!(out, "*** {winner} wins! ***")?;
                } else if matches!(self.controller.phase(), GamePhase::Playing) {
                    writeln!(out, "to move: {}", self.controller.current_team())?;
                }
            }
        }
        Ok(())
    }
}
