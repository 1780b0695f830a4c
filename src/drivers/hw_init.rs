//! One-shot ADC bring-up and raw sampling.
//!
//! Digital pins are owned by `esp-idf-hal` `PinDriver`s built in `main()`;
//! the two analog inputs go through the ADC1 oneshot driver configured here
//! with raw ESP-IDF sys calls.  Called once from `main()` before the polling
//! loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::error::Result;
#[cfg(target_os = "espidf")]
use crate::error::{Error, SensorError};
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// polling loop.  `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

/// Configure ADC1 for the selector and light-sensor channels.
#[cfg(target_os = "espidf")]
pub fn init_adc() -> Result<()> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(Error::Init("ADC1 unit"));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [pins::SELECTOR_ADC_CHANNEL, pins::LIGHT_ADC_CHANNEL] {
        // SAFETY: handle initialised above; single-threaded boot path.
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(Error::Init("ADC1 channel"));
        }
    }

    info!(
        "hw_init: ADC1 configured (CH{}=selector GPIO{}, CH{}=light GPIO{})",
        pins::SELECTOR_ADC_CHANNEL,
        pins::SELECTOR_ADC_GPIO,
        pins::LIGHT_ADC_CHANNEL,
        pins::LIGHT_ADC_GPIO
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_adc() -> Result<()> {
    log::info!("hw_init(sim): ADC init skipped");
    Ok(())
}

/// Take one 12-bit sample from an ADC1 channel.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> core::result::Result<u16, SensorError> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract, single-threaded polling loop only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return Err(SensorError::AdcReadFailed);
    }
    Ok(raw.max(0) as u16)
}
