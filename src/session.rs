//! Host-side game session
//!
//! Holds the single "current state" slot. Each tick builds a new snapshot and
//! swaps it in, so readers holding an `Arc<GameState>` never see a half-updated
//! state. Also carries the fixed-timestep accumulator a frame loop needs.

use std::sync::Arc;

use crate::config::GameConfig;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::ConfigError;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick_with_events};

/// A running game plus its frame-to-tick accumulator
#[derive(Debug, Clone)]
pub struct Session {
    current: Arc<GameState>,
    accumulator: f64,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_state(GameState::new(config)?))
    }

    /// Resume from an existing snapshot (e.g. a replay checkpoint)
    pub fn from_state(state: GameState) -> Self {
        Self {
            current: Arc::new(state),
            accumulator: 0.0,
        }
    }

    /// Shared handle to the latest published state
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.current)
    }

    /// Borrow the latest published state
    pub fn state(&self) -> &GameState {
        &self.current
    }

    pub fn phase(&self) -> GamePhase {
        self.current.phase()
    }

    /// Run exactly one tick and publish the result
    pub fn advance(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let outcome = tick_with_events(&self.current, input, SIM_DT);
        self.current = Arc::new(outcome.state);
        outcome.events
    }

    /// Feed one frame of wall-clock time and run as many ticks as fit
    ///
    /// Frames longer than `MAX_FRAME_DT` are truncated and at most
    /// `MAX_SUBSTEPS` ticks run per call. One-shot flags (pause, reset) only
    /// apply to the first tick of the frame. Returns the events of every tick
    /// that ran, in order.
    pub fn update(&mut self, frame_dt: f64, input: &TickInput) -> Vec<GameEvent> {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut events = Vec::new();
        let mut input = *input;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.advance(&input));
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.toggle_pause = false;
            input.reset = false;
        }

        // Drop backlog we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        events
    }
}
