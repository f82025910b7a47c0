//! The Ludo-style king track.
//!
//! Each team's king races around a shared 32-box outer ring from its own
//! start box, then up a private 8-box home stretch to the throne. The track
//! owns every king's position and progress exclusively; capture points are
//! converted into steps here and nowhere else.

use crate::engine::events::{EngineEvent, EventQueue};
use crate::game_state::game_rules::{HOME_ENTRY_PROGRESS, RING_LEN, VICTORY_PROGRESS};
use crate::game_state::game_types::Team;

/// Where a king currently sits on its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Shared outer ring, index `0..32`.
    Ring(u32),
    /// Team-private home stretch, index `0..7`. Box 7 is only ever reached
    /// as the throne.
    HomeStretch(u32),
    /// Terminal state: home-stretch box 7 with full progress.
    Throne,
}

/// Per-team path state. `progress` counts total steps taken since the start
/// box, `1..=40`; position is always derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingState {
    pub progress: u32,
}

/// What one `advance` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub collision_kill: bool,
    pub entered_home_stretch: bool,
    pub victory: bool,
}

#[derive(Debug, Clone)]
pub struct KingTrack {
    states: [KingState; 4],
    entered_home: [bool; 4],
}

impl Default for KingTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl KingTrack {
    /// Every king on its own start box.
    pub fn new() -> Self {
        Self {
            states: [KingState { progress: 1 }; 4],
            entered_home: [false; 4],
        }
    }

    #[inline]
    pub fn progress(&self, team: Team) -> u32 {
        self.states[team.index()].progress
    }

    #[inline]
    pub fn segment(&self, team: Team) -> PathSegment {
        Self::segment_for_progress(team, self.progress(team))
    }

    pub fn has_won(&self, team: Team) -> bool {
        self.progress(team) >= VICTORY_PROGRESS
            && matches!(self.segment(team), PathSegment::Throne)
    }

    /// Maps a progress value onto the path. Progress `1..=32` is the ring
    /// offset from the team's start box; `33..=39` is the home stretch;
    /// `40` is the throne.
    pub fn segment_for_progress(team: Team, progress: u32) -> PathSegment {
        debug_assert!(progress >= 1 && progress <= VICTORY_PROGRESS);
        if progress <= RING_LEN {
            PathSegment::Ring((team.ring_start() + progress - 1) % RING_LEN)
        } else if progress < VICTORY_PROGRESS {
            PathSegment::HomeStretch(progress - HOME_ENTRY_PROGRESS)
        } else {
            PathSegment::Throne
        }
    }

    /// Advances `team`'s king by `steps` boxes (one per capture point).
    ///
    /// The landing box is computed first; if it is a ring box currently held
    /// by another king, the arriving king is sent back to its own start with
    /// progress 1 and no movement happens. Otherwise each unit step is
    /// emitted as an observable event, the one-shot entered-home-stretch
    /// event fires on the step that leaves the ring, and victory is declared
    /// when the king reaches the throne with full progress.
    pub fn advance(&mut self, team: Team, steps: u32, events: &mut EventQueue) -> AdvanceOutcome {
        if steps == 0 {
            return AdvanceOutcome::default();
        }

        let team_idx = team.index();
        let old_progress = self.states[team_idx].progress;
        let new_progress = (old_progress + steps).min(VICTORY_PROGRESS);
        let landing = Self::segment_for_progress(team, new_progress);

        if let PathSegment::Ring(landing_idx) = landing {
            for other in Team::ALL {
                if other == team {
                    continue;
                }
                if self.segment(other) == PathSegment::Ring(landing_idx) {
                    self.states[team_idx].progress = 1;
                    events.push(EngineEvent::KingCollision {
                        team,
                        reset_to: Self::segment_for_progress(team, 1),
                    });
                    return AdvanceOutcome {
                        collision_kill: true,
                        ..AdvanceOutcome::default()
                    };
                }
            }
        }

        let mut entered_home_stretch = false;
        for progress in (old_progress + 1)..=new_progress {
            if progress >= HOME_ENTRY_PROGRESS && !self.entered_home[team_idx] {
                self.entered_home[team_idx] = true;
                entered_home_stretch = true;
                events.push(EngineEvent::EnteredHomeStretch { team });
            }
            events.push(EngineEvent::KingStep {
                team,
                progress,
                position: Self::segment_for_progress(team, progress),
            });
        }
        self.states[team_idx].progress = new_progress;

        let victory = self.has_won(team);
        if victory {
            events.push(EngineEvent::Victory { team });
        }

        AdvanceOutcome {
            collision_kill: false,
            entered_home_stretch,
            victory,
        }
    }
}
