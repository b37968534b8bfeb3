use super::generator::BoardPlan;
use crate::graph::{GameState, MoveResult, NodeId};
use bevy::prelude::{Resource, Timer, TimerMode};
use std::time::Duration;

/// How long the solved banner lingers before the next level loads
pub const ADVANCE_DELAY_SECS: f32 = 1.5;

/// Banner fade-in speed, in alpha per second
pub const CELEBRATE_FADE_RATE: f32 = 1.25;

/// Where one play session currently sits
#[derive(Debug, Clone)]
pub enum Phase {
    /// The player is moving tokens
    Playing,
    /// The board is solved; the banner fades in while the advance timer runs.
    /// Loading a new board drops the timer, so a pending advance is cancelled
    /// simply by restarting.
    Celebrating {
        progress: f32,
        advance_delay: Timer,
    },
    /// Every level is solved; nothing left to advance to
    AllComplete,
}

/// A game session - manages one board plus the surrounding phase machine
#[derive(Debug, Clone, Resource)]
pub struct GameSession {
    /// The core simulation state
    state: GameState,
    /// Playing, celebrating a solve, or finished with the whole library
    phase: Phase,
}

impl GameSession {
    /// Create a session playing its first board
    pub fn new(plan: &BoardPlan) -> Self {
        GameSession {
            state: plan.to_state(),
            phase: Phase::Playing,
        }
    }

    // === Query Methods (for Bevy systems to read state) ===

    /// Get the simulation state (for visual display)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }

    pub fn is_celebrating(&self) -> bool {
        matches!(self.phase, Phase::Celebrating { .. })
    }

    pub fn is_all_complete(&self) -> bool {
        matches!(self.phase, Phase::AllComplete)
    }

    /// Banner opacity for the overlay text
    pub fn banner_alpha(&self) -> f32 {
        match &self.phase {
            Phase::Playing => 0.0,
            Phase::Celebrating { progress, .. } => *progress,
            Phase::AllComplete => 1.0,
        }
    }

    // === Mutation Methods (for handling user input) ===

    /// Start playing a new board, cancelling any pending level advance
    pub fn load(&mut self, plan: &BoardPlan) {
        self.state = plan.to_state();
        self.phase = Phase::Playing;
    }

    /// Enter the terminal phase once the last level's celebration ends
    pub fn complete_all(&mut self) {
        self.phase = Phase::AllComplete;
    }

    /// Mark a node as the transfer source.
    /// Returns None when input is frozen outside of play.
    pub fn select(&mut self, node: NodeId) -> Option<MoveResult> {
        if !self.is_playing() {
            return None;
        }

        Some(self.state.select(node))
    }

    /// Send one token from the selection to `to`.
    /// A solving transfer flips the session into celebration.
    pub fn transfer(&mut self, to: NodeId) -> Option<MoveResult> {
        if !self.is_playing() {
            return None;
        }

        let result = self.state.transfer(to);
        if let MoveResult::BoardSolved { .. } = result {
            self.phase = Phase::Celebrating {
                progress: 0.0,
                advance_delay: Timer::from_seconds(ADVANCE_DELAY_SECS, TimerMode::Once),
            };
        }

        Some(result)
    }

    /// Advance the celebration by one tick.
    /// Returns true exactly once, when the advance delay elapses.
    pub fn tick_celebration(&mut self, delta: Duration) -> bool {
        let Phase::Celebrating {
            progress,
            advance_delay,
        } = &mut self.phase
        else {
            return false;
        };

        *progress = (*progress + CELEBRATE_FADE_RATE * delta.as_secs_f32()).min(1.0);
        advance_delay.tick(delta).just_finished()
    }
}
