//! Application service, the hexagonal core.
//!
//! [`AppService`] owns the ignition monitor, the headlight controller and
//! the configuration.  It exposes a clean, hardware-agnostic API.  All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │          AppService           │
//! ActuatorPort ◀──│  Ignition · Headlights (FSM)  │
//!                 └──────────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::fsm::AutoState;
use crate::headlight::{HeadlightController, HeadlightMode};
use crate::ignition::IgnitionMonitor;

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, InputSnapshot, SensorPort};

/// The application service orchestrates all domain logic.
pub struct AppService {
    ignition: IgnitionMonitor,
    headlights: HeadlightController,
    config: SystemConfig,
    last_inputs: InputSnapshot,
    tick_count: u64,
    uptime_ms: u64,
    since_telemetry_ms: u32,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Outputs are not touched until [`start`](Self::start).
    pub fn new(config: SystemConfig) -> Self {
        Self {
            ignition: IgnitionMonitor::new(),
            headlights: HeadlightController::new(config.clone()),
            config,
            last_inputs: InputSnapshot::default(),
            tick_count: 0,
            uptime_ms: 0,
            since_telemetry_ms: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive every output off and announce the initial headlight state.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        let state = self.headlights.auto_state();
        sink.emit(&AppEvent::Started(state));
        info!("AppService started in {:?}", state);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one polling cycle: read inputs → ignition → headlights → outputs.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`], which avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + ActuatorPort), sink: &mut impl EventSink) {
        self.tick_count += 1;

        // 1. Read inputs via SensorPort
        // Truncation wraps after ~49.7 days; the debounce uses wrapping_sub.
        let inputs = hw.read_all(self.uptime_ms as u32);
        self.last_inputs = inputs;

        // 2. Ignition, indicator mirrors the engine every tick
        let ignition = self
            .ignition
            .update(inputs.driver_seat_pressed, inputs.ignition_pressed);
        hw.set_engine_indicator(ignition.indicator);
        if ignition.changed {
            sink.emit(&AppEvent::EngineChanged {
                engine_on: ignition.engine_on,
            });
        }

        // 3. Headlights.  A latched ignition press stalls the headlights
        //    until the button is released.
        if ignition.awaiting_release {
            debug!("Ignition held, headlight evaluation suspended");
        } else {
            self.tick_headlights(ignition.engine_on, &inputs, hw, sink);
        }

        // 4. Telemetry
        self.uptime_ms += u64::from(self.config.tick_increment_ms);
        self.since_telemetry_ms = self
            .since_telemetry_ms
            .saturating_add(self.config.tick_increment_ms);
        if self.since_telemetry_ms >= self.config.telemetry_interval_ms {
            self.since_telemetry_ms = 0;
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }

    fn tick_headlights(
        &mut self,
        engine_on: bool,
        inputs: &InputSnapshot,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let prev_mode = self.headlights.mode();
        let prev_state = self.headlights.auto_state();

        if let Some(beams) = self
            .headlights
            .update(engine_on, inputs.selector, inputs.light)
        {
            hw.set_low_beams(beams);
        }

        let mode = self.headlights.mode();
        if let Some(to) = mode {
            if mode != prev_mode {
                sink.emit(&AppEvent::ModeChanged {
                    from: prev_mode,
                    to,
                });
            }
        }

        let state = self.headlights.auto_state();
        if state != prev_state {
            sink.emit(&AppEvent::StateChanged {
                from: prev_state,
                to: state,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self) -> TelemetryData {
        let beams = self.headlights.beams();
        TelemetryData {
            uptime_ms: self.uptime_ms,
            engine_on: self.ignition.engine_on(),
            mode: self.headlights.mode(),
            auto_state: self.headlights.auto_state(),
            accumulated_ms: self.headlights.accumulated_ms(),
            ticks_in_state: self.headlights.ticks_in_state(),
            selector: self.last_inputs.selector,
            light: self.last_inputs.light,
            left_beam: beams.left,
            right_beam: beams.right,
        }
    }

    pub fn engine_on(&self) -> bool {
        self.ignition.engine_on()
    }

    /// Current automatic headlight state.
    pub fn auto_state(&self) -> AutoState {
        self.headlights.auto_state()
    }

    /// Mode of the last engine-on tick.
    pub fn headlight_mode(&self) -> Option<HeadlightMode> {
        self.headlights.mode()
    }

    /// Total polling ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }
}
