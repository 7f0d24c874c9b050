//! Single-threaded driver around [`GameState`].
//!
//! Commands are applied between polls, so they never interleave with a step.
//! The clock is re-armed after the step's mutation is done, using the interval
//! the step may have just changed.

use log::debug;

use crate::clock::TickClock;
use crate::core::{CoreError, GameConfig, GameSnapshot, GameState, StepEvents};
use crate::types::{GameCommand, Phase};

pub struct GameSession {
    state: GameState,
    clock: TickClock,
    snap: GameSnapshot,
}

impl GameSession {
    pub fn new(config: GameConfig, now_ms: u64) -> Result<Self, CoreError> {
        let state = GameState::new(config)?;
        let clock = TickClock::new(state.tick_interval_ms(), now_ms);
        Ok(Self {
            state,
            clock,
            snap: GameSnapshot::default(),
        })
    }

    /// Wrap an already built state (e.g. a custom layout).
    pub fn from_state(state: GameState, now_ms: u64) -> Self {
        let clock = TickClock::new(state.tick_interval_ms(), now_ms);
        Self {
            state,
            clock,
            snap: GameSnapshot::default(),
        }
    }

    /// Apply a command from the presentation layer.
    ///
    /// Entering `Running` (start, reset, resume) restarts the tick interval so
    /// the first step comes a full interval later.
    pub fn apply(&mut self, command: GameCommand, now_ms: u64) -> Result<bool, CoreError> {
        let before = self.state.phase();
        let name = command.as_str();
        let changed = self.state.apply_command(command)?;
        if changed {
            debug!("command {} applied", name);
        }

        if before != Phase::Running && self.state.phase() == Phase::Running {
            self.clock.set_interval_ms(self.state.tick_interval_ms());
            self.clock.rearm(now_ms);
        }
        Ok(changed)
    }

    /// Run one step if the clock is due.
    pub fn poll(&mut self, now_ms: u64) -> StepEvents {
        if self.state.phase() != Phase::Running || !self.clock.due(now_ms) {
            return StepEvents::new();
        }

        let events = self.state.step();
        self.clock.set_interval_ms(self.state.tick_interval_ms());
        self.clock.rearm(now_ms);
        events
    }

    /// How long the caller may wait for input before the next poll.
    pub fn time_until_due(&self, now_ms: u64) -> u64 {
        if self.state.phase() != Phase::Running {
            return self.clock.interval_ms();
        }
        self.clock.time_until_due(now_ms)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// Refresh and return the reusable snapshot buffer.
    pub fn snapshot(&mut self) -> &GameSnapshot {
        self.state.snapshot_into(&mut self.snap);
        &self.snap
    }
}
