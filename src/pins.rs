//! GPIO / peripheral pin assignments for the accessory controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  `main.rs` must claim the matching `esp-idf-hal`
//! pins (checked at compile time there); the numbers here are what gets
//! logged and what the ADC setup uses.

// ---------------------------------------------------------------------------
// Driver inputs
// ---------------------------------------------------------------------------

/// Driver seat occupancy switch.  Active HIGH, internal pull-down
/// (reads LOW when the seat is empty).
pub const DRIVER_SEAT_GPIO: i32 = 4;
/// Ignition push-button.  Active HIGH with external pull-down.
pub const IGNITION_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Sensors: analog (ADC1)
// ---------------------------------------------------------------------------

/// Headlight mode selector potentiometer (wiper to ADC1 channel 0).
pub const SELECTOR_ADC_GPIO: i32 = 1;
/// ADC1 channel of the selector potentiometer.
pub const SELECTOR_ADC_CHANNEL: u32 = 0;

/// Ambient light sensor (LDR divider, brighter = higher voltage).
pub const LIGHT_ADC_GPIO: i32 = 2;
/// ADC1 channel of the light sensor.
pub const LIGHT_ADC_CHANNEL: u32 = 1;

/// Full-scale code of the 12-bit ADC.
pub const ADC_FULL_SCALE: u16 = 4095;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Engine-running indicator LED.
pub const ENGINE_LED_GPIO: i32 = 6;
/// Left low-beam relay driver.
pub const LEFT_BEAM_GPIO: i32 = 10;
/// Right low-beam relay driver.
pub const RIGHT_BEAM_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// UART debug
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;
