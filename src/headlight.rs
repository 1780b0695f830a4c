//! Headlight controller: manual selector positions plus the automatic
//! dusk/daylight machine.
//!
//! ```text
//!  selector ──▶ HeadlightMode ──┬── ManualOn  ─▶ beams ON,  pre-arm Dusk
//!                               ├── ManualOff ─▶ beams OFF, pre-arm Daylight
//!                               └── Auto      ─▶ Fsm::tick(light)
//! ```
//!
//! Nothing happens at all while the engine is off: the beams keep whatever
//! level they had and the automatic machine does not advance.

use log::info;
use serde::Serialize;

use crate::config::SystemConfig;
use crate::fsm::context::{BeamCommands, FsmContext};
use crate::fsm::{AutoState, Fsm};

/// Headlight mode derived from the selector reading on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadlightMode {
    /// Selector below the ON threshold.
    ManualOn,
    /// Selector above the OFF threshold.
    ManualOff,
    /// Selector in the band between the two thresholds.
    Auto,
}

impl HeadlightMode {
    /// Classify a selector reading.  Readings exactly on a threshold fall
    /// in the automatic band.
    pub fn from_selector(reading: f32, config: &SystemConfig) -> Self {
        if reading < config.selector_on_threshold {
            Self::ManualOn
        } else if reading > config.selector_off_threshold {
            Self::ManualOff
        } else {
            Self::Auto
        }
    }
}

/// Owns the automatic-mode FSM and the low-beam command state.
pub struct HeadlightController {
    fsm: Fsm,
    ctx: FsmContext,
    /// Mode used on the most recent engine-on tick.
    mode: Option<HeadlightMode>,
}

impl HeadlightController {
    /// New controller in `Init` with both beams off.
    pub fn new(config: SystemConfig) -> Self {
        let mut ctx = FsmContext::new(config);
        let mut fsm = Fsm::new(AutoState::Init);
        fsm.start(&mut ctx);
        Self {
            fsm,
            ctx,
            mode: None,
        }
    }

    /// Evaluate one tick.
    ///
    /// Returns the beam levels to drive, or `None` when the engine is off
    /// and the outputs must be left untouched.
    pub fn update(&mut self, engine_on: bool, selector: f32, light: f32) -> Option<BeamCommands> {
        if !engine_on {
            return None;
        }

        let mode = HeadlightMode::from_selector(selector, &self.ctx.config);
        if self.mode != Some(mode) {
            info!("Headlights: mode {:?} (selector {:.2})", mode, selector);
            self.mode = Some(mode);
        }

        self.ctx.light_level = light;

        match mode {
            HeadlightMode::ManualOn => {
                self.fsm.force_transition(AutoState::Dusk, &mut self.ctx);
                self.ctx.commands = BeamCommands::both(true);
            }
            HeadlightMode::ManualOff => {
                self.fsm.force_transition(AutoState::Daylight, &mut self.ctx);
                self.ctx.commands = BeamCommands::both(false);
            }
            HeadlightMode::Auto => self.fsm.tick(&mut self.ctx),
        }

        Some(self.ctx.commands)
    }

    /// Current automatic-mode state.
    pub fn auto_state(&self) -> AutoState {
        self.fsm.current_state()
    }

    /// Milliseconds accumulated in the current delay state.
    pub fn accumulated_ms(&self) -> u32 {
        self.ctx.accumulated_ms
    }

    /// Most recently commanded beam levels.
    pub fn beams(&self) -> BeamCommands {
        self.ctx.commands
    }

    /// Mode of the last engine-on tick, if there has been one.
    pub fn mode(&self) -> Option<HeadlightMode> {
        self.mode
    }

    /// Automatic ticks spent in the current state.  Manual positions do not
    /// advance it.
    pub fn ticks_in_state(&self) -> u64 {
        self.fsm.ticks_in_current_state()
    }
}
