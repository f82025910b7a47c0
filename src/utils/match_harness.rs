//! Seeded self-play series harness.
//!
//! Runs four random engines against each other through the real turn
//! controller, one seat per team, without any I/O. Used for soak-style
//! testing of the full capture/cascade/king pipeline and for the standalone
//! series binary.

use crate::engine::turn_controller::TurnController;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::game_types::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Victory { team: Team, turns: u32 },
    TurnLimit { turns: u32 },
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Hard stop so a stalled game cannot run forever.
    pub max_turns: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_turns: 400 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 8,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub wins_by_team: [u16; 4],
    pub turn_limit_draws: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub total_turns: u64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_turns = if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        };
        format!(
            "games={} blue_wins={} red_wins={} yellow_wins={} green_wins={} turn_limit_draws={} avg_turns={:.1}",
            self.games,
            self.wins_by_team[0],
            self.wins_by_team[1],
            self.wins_by_team[2],
            self.wins_by_team[3],
            self.turn_limit_draws,
            avg_turns
        )
    }
}

/// Plays one fully seeded game: board, respawns, and every seat's move
/// choice all derive from `seed`, so a replay is identical.
pub fn play_random_match(seed: u64, config: &MatchConfig) -> Result<MatchOutcome, String> {
    let mut controller = TurnController::new(Some(seed));
    let mut seats: Vec<RandomEngine> = Team::ALL
        .iter()
        .enumerate()
        .map(|(index, _)| RandomEngine::seeded(seed ^ (index as u64 + 1)))
        .collect();

    for _ in 0..config.max_turns {
        let team = controller.current_team();
        let output = seats[team.index()].choose_move(controller.state(), team)?;

        match output.best_move {
            Some(mv) => {
                let result = controller.submit_move(mv.from, mv.to);
                if !result.accepted() {
                    return Err(format!(
                        "engine for {team} produced a rejected move {mv}"
                    ));
                }
                controller.drain_events();
                if let Some(winner) = result.victory {
                    return Ok(MatchOutcome::Victory {
                        team: winner,
                        turns: controller.state().turn,
                    });
                }
            }
            None => {
                // No legal moves for this seat: explicit skip.
                controller.skip_turn();
            }
        }
    }

    Ok(MatchOutcome::TurnLimit {
        turns: controller.state().turn,
    })
}

pub fn play_random_match_series(config: MatchSeriesConfig) -> Result<MatchSeriesStats, String> {
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for game in 0..config.games {
        let seed = config.base_seed.wrapping_add(game as u64);
        let outcome = play_random_match(seed, &config.per_game)?;

        match outcome {
            MatchOutcome::Victory { team, turns } => {
                stats.wins_by_team[team.index()] += 1;
                stats.total_turns += turns as u64;
                if config.verbose {
                    println!("game {game} seed {seed}: {team} wins after {turns} turns");
                }
            }
            MatchOutcome::TurnLimit { turns } => {
                stats.turn_limit_draws += 1;
                stats.total_turns += turns as u64;
                if config.verbose {
                    println!("game {game} seed {seed}: turn limit at {turns}");
                }
            }
        }
        stats.outcomes.push(outcome);
    }

    Ok(stats)
}
