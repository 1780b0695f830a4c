//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (buttons, ADCs, lamps, event sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::fsm::context::BeamCommands;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One tick's worth of raw inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Driver seat occupied (debounced).
    pub driver_seat_pressed: bool,
    /// Ignition button held (debounced).
    pub ignition_pressed: bool,
    /// Mode selector potentiometer, 0.0..=1.0.
    pub selector: f32,
    /// Ambient light, 0.0 (dark) ..= 1.0 (bright).
    pub light: f32,
}

/// Read-side port: the domain calls this to obtain input data.
pub trait SensorPort {
    /// Read every input.  `now_ms` is the controller's monotonic time,
    /// used by the button debounce filters.
    fn read_all(&mut self, now_ms: u32) -> InputSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command outputs.
pub trait ActuatorPort {
    /// Drive the engine-running indicator.
    fn set_engine_indicator(&mut self, on: bool);

    /// Drive the left and right low beams.
    fn set_low_beams(&mut self, beams: BeamCommands);

    /// Every output off (power-on state).
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
