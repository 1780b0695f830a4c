//! Ignition monitor: engine on/off from the seat and ignition buttons.
//!
//! A qualifying press is latched and only takes effect once the ignition
//! button is released, so holding the button never toggles the engine more
//! than once.
//!
//! | Engine | Seat    | Ignition | Effect on release |
//! |--------|---------|----------|-------------------|
//! | off    | pressed | pressed  | engine on         |
//! | on     | any     | pressed  | engine off        |
//! | off    | empty   | pressed  | none              |

use log::info;

/// What the latch will do when the ignition button is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    Start,
    Stop,
}

/// Internal latch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LatchState {
    Idle,
    AwaitingRelease(PendingAction),
}

/// Result of one [`IgnitionMonitor::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnitionStatus {
    pub engine_on: bool,
    /// Level for the engine indicator; always equal to `engine_on`.
    pub indicator: bool,
    /// A press has been latched and the ignition button is still held.
    pub awaiting_release: bool,
    /// The engine state flipped on this update.
    pub changed: bool,
}

pub struct IgnitionMonitor {
    engine_on: bool,
    latch: LatchState,
}

impl Default for IgnitionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl IgnitionMonitor {
    /// Engine starts off.
    pub fn new() -> Self {
        Self {
            engine_on: false,
            latch: LatchState::Idle,
        }
    }

    /// Advance the monitor with the current (debounced) button levels.
    pub fn update(&mut self, seat_pressed: bool, ignition_pressed: bool) -> IgnitionStatus {
        let before = self.engine_on;

        match self.latch {
            LatchState::Idle => {
                if seat_pressed && ignition_pressed && !self.engine_on {
                    self.latch = LatchState::AwaitingRelease(PendingAction::Start);
                } else if ignition_pressed && self.engine_on {
                    self.latch = LatchState::AwaitingRelease(PendingAction::Stop);
                }
            }
            LatchState::AwaitingRelease(action) => {
                if !ignition_pressed {
                    self.engine_on = action == PendingAction::Start;
                    self.latch = LatchState::Idle;
                    info!(
                        "Ignition: engine {}",
                        if self.engine_on { "ON" } else { "OFF" }
                    );
                }
            }
        }

        IgnitionStatus {
            engine_on: self.engine_on,
            indicator: self.engine_on,
            awaiting_release: matches!(self.latch, LatchState::AwaitingRelease(_)),
            changed: before != self.engine_on,
        }
    }

    pub fn engine_on(&self) -> bool {
        self.engine_on
    }
}
