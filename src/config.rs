//! System configuration parameters
//!
//! All tunable parameters for the accessory controller.  The defaults are
//! compiled in; nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Headlight mode selector ---
    /// Selector readings below this force the low beams ON (0.0-1.0)
    pub selector_on_threshold: f32,
    /// Selector readings above this force the low beams OFF (0.0-1.0)
    pub selector_off_threshold: f32,

    // --- Light sensor ---
    /// Light readings below this count as dusk (0.0-1.0)
    pub dusk_threshold: f32,
    /// Light readings above this count as daylight (0.0-1.0)
    pub daylight_threshold: f32,

    // --- Switching delays ---
    /// Continuous darkness required before the beams switch on (milliseconds)
    pub daylight_to_dusk_ms: u32,
    /// Continuous brightness required before the beams switch off (milliseconds)
    pub dusk_to_daylight_ms: u32,

    // --- Timing ---
    /// Polling cadence; also the accumulator step (milliseconds)
    pub tick_increment_ms: u32,
    /// Contact-bounce filter for the seat and ignition buttons (milliseconds)
    pub button_debounce_ms: u32,
    /// Telemetry report interval (milliseconds)
    pub telemetry_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Selector
            selector_on_threshold: 0.33,
            selector_off_threshold: 0.66,

            // Light sensor
            dusk_threshold: 0.66,
            daylight_threshold: 0.9,

            // Delays
            daylight_to_dusk_ms: 1000,
            dusk_to_daylight_ms: 2000,

            // Timing
            tick_increment_ms: 20,     // 50 Hz
            button_debounce_ms: 40,    // two ticks
            telemetry_interval_ms: 1000,
        }
    }
}

impl SystemConfig {
    /// Check the ordering and range invariants the controller relies on.
    pub fn validate(&self) -> Result<()> {
        let unit_range = [
            self.selector_on_threshold,
            self.selector_off_threshold,
            self.dusk_threshold,
            self.daylight_threshold,
        ];
        if unit_range.iter().any(|t| !t.is_finite()) {
            return Err(Error::Config("threshold is not a finite number"));
        }
        if unit_range.iter().any(|t| !(0.0..=1.0).contains(t)) {
            return Err(Error::Config("threshold outside 0.0..=1.0"));
        }
        if self.selector_on_threshold >= self.selector_off_threshold {
            return Err(Error::Config(
                "selector ON threshold must be below the OFF threshold",
            ));
        }
        if self.dusk_threshold > self.daylight_threshold {
            return Err(Error::Config(
                "dusk threshold must not exceed the daylight threshold",
            ));
        }
        if self.tick_increment_ms == 0 {
            return Err(Error::Config("tick increment must be non-zero"));
        }
        if self.telemetry_interval_ms == 0 {
            return Err(Error::Config("telemetry interval must be non-zero"));
        }
        Ok(())
    }

    /// Number of polling ticks in `ms`, rounded up.
    pub fn ticks_for(&self, ms: u32) -> u32 {
        ms.div_ceil(self.tick_increment_ms.max(1))
    }
}
