//! Normalised analog input (potentiometer or light sensor).
//!
//! Converts a raw 12-bit ADC code to a fraction of full scale in
//! `0.0..=1.0`, the same convention as an mbed `AnalogIn::read()`.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from static atomics for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use log::warn;

#[cfg(not(target_os = "espidf"))]
const SIM_CHANNELS: usize = 8;

#[cfg(not(target_os = "espidf"))]
static SIM_ADC: [AtomicU16; SIM_CHANNELS] = [const { AtomicU16::new(0) }; SIM_CHANNELS];

/// Inject a raw sample for `channel` (host builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(channel: u32, raw: u16) {
    SIM_ADC[channel as usize % SIM_CHANNELS].store(raw, Ordering::Relaxed);
}

pub struct AnalogInput {
    channel: u32,
    full_scale: u16,
    name: &'static str,
    last: f32,
}

impl AnalogInput {
    pub fn new(channel: u32, full_scale: u16, name: &'static str) -> Self {
        Self {
            channel,
            full_scale,
            name,
            last: 0.0,
        }
    }

    /// Sample the channel.  A failed read returns the previous value.
    pub fn read(&mut self) -> f32 {
        match self.read_adc() {
            Ok(raw) => {
                self.last = normalise(raw, self.full_scale);
            }
            Err(e) => warn!("{}: {}, holding {:.2}", self.name, e, self.last),
        }
        self.last
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> Result<u16, crate::error::SensorError> {
        crate::drivers::hw_init::adc1_read(self.channel)
    }

    #[cfg(not(target_os = "espidf"))]
    #[allow(clippy::unnecessary_wraps)]
    fn read_adc(&self) -> Result<u16, crate::error::SensorError> {
        Ok(SIM_ADC[self.channel as usize % SIM_CHANNELS].load(Ordering::Relaxed))
    }
}

/// Raw code → `0.0..=1.0`, clamped.
fn normalise(raw: u16, full_scale: u16) -> f32 {
    if full_scale == 0 {
        return 0.0;
    }
    (raw as f32 / full_scale as f32).clamp(0.0, 1.0)
}
