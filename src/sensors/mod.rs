//! Input subsystem: individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns the two debounced buttons and the two analog inputs and
//! produces one [`InputSnapshot`] per tick.

pub mod analog;

use embedded_hal::digital::InputPin;

use crate::app::ports::InputSnapshot;
use crate::drivers::button::DebouncedButton;
use analog::AnalogInput;

/// Aggregates all input drivers and produces a unified snapshot.
pub struct SensorHub<S, I> {
    pub driver_seat: DebouncedButton<S>,
    pub ignition: DebouncedButton<I>,
    pub selector: AnalogInput,
    pub light: AnalogInput,
}

impl<S: InputPin, I: InputPin> SensorHub<S, I> {
    /// Construct a new hub from pre-built drivers (built in main where
    /// peripheral ownership is established).
    pub fn new(
        driver_seat: DebouncedButton<S>,
        ignition: DebouncedButton<I>,
        selector: AnalogInput,
        light: AnalogInput,
    ) -> Self {
        Self {
            driver_seat,
            ignition,
            selector,
            light,
        }
    }

    /// Read every input and return a unified snapshot.
    ///
    /// Individual read failures are logged by the drivers and the previous
    /// good value is retained.
    pub fn read_all(&mut self, now_ms: u32) -> InputSnapshot {
        InputSnapshot {
            driver_seat_pressed: self.driver_seat.poll(now_ms),
            ignition_pressed: self.ignition.poll(now_ms),
            selector: self.selector.read(),
            light: self.light.read(),
        }
    }
}
