//! Lowbeam Firmware: Main Entry Point
//!
//! Polled control loop on top of a hexagonal core.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │      HardwareAdapter               LogEventSink            │
//! │      (Sensor+Actuator)             (EventSink)             │
//! │                                                            │
//! │  ───────────────── Port Trait Boundary ─────────────────   │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │               AppService (pure logic)                │  │
//! │  │     IgnitionMonitor · HeadlightController (FSM)      │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use lowbeam::adapters::hardware::HardwareAdapter;
use lowbeam::adapters::log_sink::LogEventSink;
use lowbeam::app::service::AppService;
use lowbeam::config::SystemConfig;
use lowbeam::drivers::button::DebouncedButton;
use lowbeam::drivers::hw_init;
use lowbeam::drivers::lamp::Lamp;
use lowbeam::drivers::low_beam::LowBeams;
use lowbeam::pins;
use lowbeam::sensors::SensorHub;
use lowbeam::sensors::analog::AnalogInput;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Lowbeam v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");
    info!(
        "Console on UART0 (TX GPIO{}, RX GPIO{})",
        pins::UART_TX_GPIO,
        pins::UART_RX_GPIO
    );
    info!(
        "Pins: seat GPIO{}, ignition GPIO{}, engine LED GPIO{}, beams GPIO{}/GPIO{}",
        pins::DRIVER_SEAT_GPIO,
        pins::IGNITION_GPIO,
        pins::ENGINE_LED_GPIO,
        pins::LEFT_BEAM_GPIO,
        pins::RIGHT_BEAM_GPIO
    );

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;
    info!("Config: {:?}", config);

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_adc()?;
    let p = Peripherals::take()?;

    // `esp-idf-hal` pins are typed per number; keep them tied to the pin map.
    const _: () = {
        assert!(pins::DRIVER_SEAT_GPIO == 4);
        assert!(pins::IGNITION_GPIO == 5);
        assert!(pins::ENGINE_LED_GPIO == 6);
        assert!(pins::LEFT_BEAM_GPIO == 10);
        assert!(pins::RIGHT_BEAM_GPIO == 11);
    };

    let mut seat_pin = PinDriver::input(p.pins.gpio4)?;
    seat_pin.set_pull(Pull::Down)?;
    let mut ignition_pin = PinDriver::input(p.pins.gpio5)?;
    ignition_pin.set_pull(Pull::Down)?;

    let engine_led = PinDriver::output(p.pins.gpio6)?;
    let left_beam = PinDriver::output(p.pins.gpio10)?;
    let right_beam = PinDriver::output(p.pins.gpio11)?;

    // ── 4. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        DebouncedButton::new(seat_pin, "driver_seat", true, config.button_debounce_ms),
        DebouncedButton::new(ignition_pin, "ignition", true, config.button_debounce_ms),
        AnalogInput::new(pins::SELECTOR_ADC_CHANNEL, pins::ADC_FULL_SCALE, "selector"),
        AnalogInput::new(pins::LIGHT_ADC_CHANNEL, pins::ADC_FULL_SCALE, "light"),
    );

    let mut hw = HardwareAdapter::new(
        sensor_hub,
        Lamp::new(engine_led, "engine_led"),
        LowBeams::new(left_beam, right_beam),
    );

    let mut log_sink = LogEventSink::new();

    // ── 5. Construct app service ──────────────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        app.tick(&mut hw, &mut log_sink);
        FreeRtos::delay_ms(config.tick_increment_ms);
    }
}
