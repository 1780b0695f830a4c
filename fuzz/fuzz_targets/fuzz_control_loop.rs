//! Fuzz target: `AppService::tick`
//!
//! Every 3 input bytes are one tick: button bits, selector, light.  The
//! control loop must never panic, the indicator must mirror the engine, and
//! the two beams must always be driven together.
//!
//! cargo fuzz run fuzz_control_loop

#![no_main]

use libfuzzer_sys::fuzz_target;
use lowbeam::app::events::AppEvent;
use lowbeam::app::ports::{ActuatorPort, EventSink, InputSnapshot, SensorPort};
use lowbeam::app::service::AppService;
use lowbeam::config::SystemConfig;
use lowbeam::fsm::context::BeamCommands;

struct Rig {
    inputs: InputSnapshot,
    indicator: bool,
    beams: BeamCommands,
}

impl SensorPort for Rig {
    fn read_all(&mut self, _now_ms: u32) -> InputSnapshot {
        self.inputs
    }
}

impl ActuatorPort for Rig {
    fn set_engine_indicator(&mut self, on: bool) {
        self.indicator = on;
    }

    fn set_low_beams(&mut self, beams: BeamCommands) {
        self.beams = beams;
    }

    fn all_off(&mut self) {
        self.indicator = false;
        self.beams = BeamCommands::both(false);
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut app = AppService::new(SystemConfig::default());
    let mut rig = Rig {
        inputs: InputSnapshot::default(),
        indicator: false,
        beams: BeamCommands::default(),
    };
    app.start(&mut rig, &mut Discard);

    for chunk in data.chunks_exact(3) {
        rig.inputs = InputSnapshot {
            driver_seat_pressed: chunk[0] & 0x01 != 0,
            ignition_pressed: chunk[0] & 0x02 != 0,
            selector: f32::from(chunk[1]) / 255.0,
            light: f32::from(chunk[2]) / 255.0,
        };
        app.tick(&mut rig, &mut Discard);

        assert_eq!(rig.indicator, app.engine_on());
        assert_eq!(rig.beams.left, rig.beams.right);
    }
});
