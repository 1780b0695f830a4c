//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to: the latest light reading, the delay accumulator, the low-beam
//! commands, and the configuration.

use serde::Serialize;

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Low-beam commands (written by state handlers; consumed by the service)
// ---------------------------------------------------------------------------

/// Desired low-beam output levels.  Left and right are always driven
/// identically; both fields exist because both pins exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BeamCommands {
    pub left: bool,
    pub right: bool,
}

impl BeamCommands {
    /// Both beams set to `on`.
    pub const fn both(on: bool) -> Self {
        Self {
            left: on,
            right: on,
        }
    }
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    /// Latest ambient light reading (0.0 = dark, 1.0 = bright).
    pub light_level: f32,
    /// Time spent in the current delay state, in milliseconds.
    /// Zero outside the delay states.
    pub accumulated_ms: u32,
    /// Commands to be applied to the low beams after the FSM tick.
    /// Persist across ticks so delay states can leave them untouched.
    pub commands: BeamCommands,
    /// System configuration (thresholds and delays).
    pub config: SystemConfig,
}

impl FsmContext {
    /// Create a new context with the given configuration.  Beams start off.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            light_level: 0.0,
            accumulated_ms: 0,
            commands: BeamCommands::both(false),
            config,
        }
    }

    /// Reading is dark enough to count towards dusk.
    pub fn is_dark(&self) -> bool {
        self.light_level < self.config.dusk_threshold
    }

    /// Reading is bright enough to count towards daylight.
    pub fn is_bright(&self) -> bool {
        self.light_level > self.config.daylight_threshold
    }

    /// Advance the delay accumulator by one tick.
    pub fn accumulate_tick(&mut self) {
        self.accumulated_ms = self
            .accumulated_ms
            .saturating_add(self.config.tick_increment_ms);
    }
}
