//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO or ADC registers.  Inputs are set
//! directly on the `inputs` field before each tick.

use lowbeam::app::events::AppEvent;
use lowbeam::app::ports::{ActuatorPort, EventSink, InputSnapshot, SensorPort};
use lowbeam::fsm::context::BeamCommands;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActuatorCall {
    SetIndicator(bool),
    SetBeams(BeamCommands),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub inputs: InputSnapshot,
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    /// Selector in the automatic band, mid-level light, nobody seated.
    pub fn new() -> Self {
        Self {
            inputs: InputSnapshot {
                selector: 0.5,
                light: 0.8,
                ..Default::default()
            },
            calls: Vec::new(),
        }
    }

    pub fn indicator_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetIndicator(on) => Some(*on),
                ActuatorCall::AllOff => Some(false),
                ActuatorCall::SetBeams(_) => None,
            })
            .unwrap_or(false)
    }

    pub fn beams(&self) -> BeamCommands {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetBeams(b) => Some(*b),
                ActuatorCall::AllOff => Some(BeamCommands::both(false)),
                ActuatorCall::SetIndicator(_) => None,
            })
            .unwrap_or_default()
    }

    /// Number of beam writes recorded so far.
    pub fn beam_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ActuatorCall::SetBeams(_)))
            .count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_all(&mut self, _now_ms: u32) -> InputSnapshot {
        self.inputs
    }
}

impl ActuatorPort for MockHardware {
    fn set_engine_indicator(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetIndicator(on));
    }

    fn set_low_beams(&mut self, beams: BeamCommands) {
        self.calls.push(ActuatorCall::SetBeams(beams));
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn state_changes(&self) -> Vec<(lowbeam::fsm::AutoState, lowbeam::fsm::AutoState)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::StateChanged { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
