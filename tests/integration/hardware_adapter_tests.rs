//! End-to-end tests through the real [`HardwareAdapter`]: debounced GPIO
//! inputs, simulated ADC samples, and lamp outputs on fake pins.

use core::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

use lowbeam::adapters::hardware::HardwareAdapter;
use lowbeam::app::ports::ActuatorPort;
use lowbeam::app::service::AppService;
use lowbeam::config::SystemConfig;
use lowbeam::drivers::button::DebouncedButton;
use lowbeam::drivers::lamp::Lamp;
use lowbeam::drivers::low_beam::LowBeams;
use lowbeam::fsm::context::BeamCommands;
use lowbeam::pins;
use lowbeam::sensors::SensorHub;
use lowbeam::sensors::analog::{AnalogInput, sim_set_adc};

use super::mock_hw::RecordingSink;

// ── Fake pins ─────────────────────────────────────────────────

#[derive(Clone, Default)]
struct Level(Rc<Cell<bool>>);

impl Level {
    fn set(&self, high: bool) {
        self.0.set(high);
    }

    fn get(&self) -> bool {
        self.0.get()
    }
}

struct FakeInput(Level);

impl ErrorType for FakeInput {
    type Error = ErrorKind;
}

impl InputPin for FakeInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

struct FakeOutput(Level);

impl ErrorType for FakeOutput {
    type Error = ErrorKind;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(true);
        Ok(())
    }
}

struct Rig {
    seat: Level,
    ignition: Level,
    indicator: Level,
    left: Level,
    right: Level,
    hw: HardwareAdapter<FakeInput, FakeInput, FakeOutput, FakeOutput, FakeOutput>,
}

fn rig(config: &SystemConfig) -> Rig {
    let seat = Level::default();
    let ignition = Level::default();
    let indicator = Level::default();
    let left = Level::default();
    let right = Level::default();

    let hub = SensorHub::new(
        DebouncedButton::new(
            FakeInput(seat.clone()),
            "driver_seat",
            true,
            config.button_debounce_ms,
        ),
        DebouncedButton::new(
            FakeInput(ignition.clone()),
            "ignition",
            true,
            config.button_debounce_ms,
        ),
        AnalogInput::new(pins::SELECTOR_ADC_CHANNEL, pins::ADC_FULL_SCALE, "selector"),
        AnalogInput::new(pins::LIGHT_ADC_CHANNEL, pins::ADC_FULL_SCALE, "light"),
    );
    let hw = HardwareAdapter::new(
        hub,
        Lamp::new(FakeOutput(indicator.clone()), "engine_led"),
        LowBeams::new(FakeOutput(left.clone()), FakeOutput(right.clone())),
    );

    Rig {
        seat,
        ignition,
        indicator,
        left,
        right,
        hw,
    }
}

// ── Tests ─────────────────────────────────────────────────────

// The only test in this binary that touches the simulated ADC channels.
#[test]
fn debounced_start_lights_manual_beams() {
    let config = SystemConfig::default();
    let mut r = rig(&config);
    let mut app = AppService::new(config.clone());
    let mut sink = RecordingSink::new();
    app.start(&mut r.hw, &mut sink);

    sim_set_adc(pins::SELECTOR_ADC_CHANNEL, 0);
    sim_set_adc(pins::LIGHT_ADC_CHANNEL, pins::ADC_FULL_SCALE);

    // A single-tick blip is filtered out by the debounce.
    r.seat.set(true);
    r.ignition.set(true);
    app.tick(&mut r.hw, &mut sink);
    r.ignition.set(false);
    for _ in 0..10 {
        app.tick(&mut r.hw, &mut sink);
    }
    assert!(!app.engine_on());

    // A proper press and release starts the engine.
    r.ignition.set(true);
    for _ in 0..10 {
        app.tick(&mut r.hw, &mut sink);
    }
    r.ignition.set(false);
    for _ in 0..10 {
        app.tick(&mut r.hw, &mut sink);
    }

    assert!(app.engine_on());
    assert!(r.indicator.get());
    assert!(r.left.get() && r.right.get(), "selector at 0 is manual ON");
    assert_eq!(r.hw.output_state(), (true, BeamCommands::both(true)));
}

#[test]
fn all_off_clears_every_output() {
    let config = SystemConfig::default();
    let mut r = rig(&config);

    r.hw.set_engine_indicator(true);
    r.hw.set_low_beams(BeamCommands::both(true));
    assert!(r.indicator.get() && r.left.get() && r.right.get());

    r.hw.all_off();
    assert!(!r.indicator.get());
    assert!(!r.left.get());
    assert!(!r.right.get());
    assert_eq!(r.hw.output_state(), (false, BeamCommands::both(false)));
}
