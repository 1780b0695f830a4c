//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (which goes to the debug UART in production).  Telemetry is
//! written as one JSON object per line so it can be scraped off the serial
//! console.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => match serde_json::to_string(t) {
                Ok(line) => info!("TELEM | {}", line),
                Err(e) => warn!("TELEM | serialisation failed: {}", e),
            },
            AppEvent::EngineChanged { engine_on } => {
                info!("ENGINE | {}", if *engine_on { "ON" } else { "OFF" });
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {:?}", from, to);
            }
            AppEvent::StateChanged { from, to } => {
                info!("AUTO | {:?} -> {:?}", from, to);
            }
            AppEvent::Started(state) => {
                info!("START | auto_state={:?}", state);
            }
        }
    }
}
