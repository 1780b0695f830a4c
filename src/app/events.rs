//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use serde::Serialize;

use crate::fsm::AutoState;
use crate::headlight::HeadlightMode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started; all outputs are off.
    Started(AutoState),

    /// The engine was switched on or off.
    EngineChanged { engine_on: bool },

    /// The selector moved into a different band.
    ModeChanged {
        from: Option<HeadlightMode>,
        to: HeadlightMode,
    },

    /// The automatic headlight machine changed state.
    StateChanged { from: AutoState, to: AutoState },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot for the serial debug log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryData {
    pub uptime_ms: u64,
    pub engine_on: bool,
    pub mode: Option<HeadlightMode>,
    pub auto_state: AutoState,
    pub accumulated_ms: u32,
    /// Automatic ticks spent in `auto_state`.
    pub ticks_in_state: u64,
    pub selector: f32,
    pub light: f32,
    pub left_beam: bool,
    pub right_beam: bool,
}
