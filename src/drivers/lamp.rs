//! Single on/off lamp output (indicator LED or beam relay).
//!
//! Generic over any `embedded_hal` output pin, active HIGH.  A failed write
//! is logged and the cached level is left as it was, so `is_on()` always
//! reports the last level the pin actually accepted.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

use crate::error::ActuatorError;

pub struct Lamp<P> {
    pin: P,
    name: &'static str,
    on: bool,
}

impl<P: OutputPin> Lamp<P> {
    /// Wrap `pin`.  The pin is not driven until the first `set`.
    pub fn new(pin: P, name: &'static str) -> Self {
        Self {
            pin,
            name,
            on: false,
        }
    }

    pub fn set(&mut self, on: bool) {
        match self.write(on) {
            Ok(()) => self.on = on,
            Err(e) => warn!("{}: {}", self.name, e),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    fn write(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.pin
            .set_state(PinState::from(on))
            .map_err(|_| ActuatorError::GpioWriteFailed)
    }
}
