//! Polled, debounced push-button / switch driver.
//!
//! ## Hardware
//!
//! Any `embedded_hal` input pin.  The driver seat switch is active-high with
//! a pull-down (reads LOW when nobody is sitting); the ignition button is
//! active-high as well.  Pass `active_high = false` for pull-up wiring.
//!
//! ## Debounce
//!
//! | State      | Condition                                 | Next       |
//! |------------|-------------------------------------------|------------|
//! | `Stable`   | raw level differs from stable level        | `Settling` |
//! | `Settling` | raw level returns to stable level          | `Stable`   |
//! | `Settling` | raw level held for `debounce_ms`           | `Stable` (new level) |
//!
//! A read error keeps the last stable level.

use embedded_hal::digital::InputPin;
use log::{debug, warn};

use crate::error::SensorError;

/// Internal debounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Stable,
    Settling { since_ms: u32 },
}

pub struct DebouncedButton<P> {
    pin: P,
    name: &'static str,
    active_high: bool,
    debounce_ms: u32,
    pressed: bool,
    state: DebounceState,
}

impl<P: InputPin> DebouncedButton<P> {
    pub fn new(pin: P, name: &'static str, active_high: bool, debounce_ms: u32) -> Self {
        Self {
            pin,
            name,
            active_high,
            debounce_ms,
            pressed: false,
            state: DebounceState::Stable,
        }
    }

    /// Sample the pin and return the debounced pressed level.
    /// `now_ms` is the current monotonic time in milliseconds.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        let raw = match self.read_raw() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{}: {}, keeping last level", self.name, e);
                return self.pressed;
            }
        };

        match self.state {
            DebounceState::Stable => {
                if raw != self.pressed {
                    if self.debounce_ms == 0 {
                        self.commit(raw);
                    } else {
                        self.state = DebounceState::Settling { since_ms: now_ms };
                    }
                }
            }
            DebounceState::Settling { since_ms } => {
                if raw == self.pressed {
                    // Bounce: back to where we were.
                    self.state = DebounceState::Stable;
                } else if now_ms.wrapping_sub(since_ms) >= self.debounce_ms {
                    self.commit(raw);
                }
            }
        }

        self.pressed
    }

    fn commit(&mut self, pressed: bool) {
        self.pressed = pressed;
        self.state = DebounceState::Stable;
        debug!("{}: {}", self.name, if pressed { "pressed" } else { "released" });
    }

    fn read_raw(&mut self) -> Result<bool, SensorError> {
        let high = self
            .pin
            .is_high()
            .map_err(|_| SensorError::GpioReadFailed)?;
        Ok(high == self.active_high)
    }
}
