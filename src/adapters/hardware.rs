//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`], the engine indicator and the low-beam pair,
//! exposing them through [`SensorPort`] and [`ActuatorPort`].  This is the
//! only module in the system that touches actual hardware.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::{ActuatorPort, InputSnapshot, SensorPort};
use crate::drivers::lamp::Lamp;
use crate::drivers::low_beam::LowBeams;
use crate::fsm::context::BeamCommands;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all hardware behind port traits.
///
/// Type parameters: seat switch, ignition button, engine indicator, left
/// beam, right beam.
pub struct HardwareAdapter<S, I, E, L, R> {
    sensor_hub: SensorHub<S, I>,
    indicator: Lamp<E>,
    beams: LowBeams<L, R>,
}

impl<S, I, E, L, R> HardwareAdapter<S, I, E, L, R>
where
    S: InputPin,
    I: InputPin,
    E: OutputPin,
    L: OutputPin,
    R: OutputPin,
{
    pub fn new(sensor_hub: SensorHub<S, I>, indicator: Lamp<E>, beams: LowBeams<L, R>) -> Self {
        Self {
            sensor_hub,
            indicator,
            beams,
        }
    }

    /// Levels the outputs last accepted: (indicator, beams).
    pub fn output_state(&self) -> (bool, BeamCommands) {
        (self.indicator.is_on(), self.beams.state())
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<S, I, E, L, R> SensorPort for HardwareAdapter<S, I, E, L, R>
where
    S: InputPin,
    I: InputPin,
    E: OutputPin,
    L: OutputPin,
    R: OutputPin,
{
    fn read_all(&mut self, now_ms: u32) -> InputSnapshot {
        self.sensor_hub.read_all(now_ms)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<S, I, E, L, R> ActuatorPort for HardwareAdapter<S, I, E, L, R>
where
    S: InputPin,
    I: InputPin,
    E: OutputPin,
    L: OutputPin,
    R: OutputPin,
{
    fn set_engine_indicator(&mut self, on: bool) {
        self.indicator.set(on);
    }

    fn set_low_beams(&mut self, beams: BeamCommands) {
        self.beams.apply(beams);
    }

    fn all_off(&mut self) {
        self.indicator.set(false);
        self.beams.off();
    }
}
