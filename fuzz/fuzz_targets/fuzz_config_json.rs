//! Fuzz target: `SystemConfig` JSON parsing + validation
//!
//! Arbitrary bytes are parsed as a config document.  Anything that parses
//! and validates must drive the headlight controller without panicking.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use lowbeam::config::SystemConfig;
use lowbeam::headlight::HeadlightController;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<SystemConfig>(data) else {
        return;
    };
    if config.validate().is_err() {
        return;
    }

    let mut hl = HeadlightController::new(config);
    let _ = hl.update(true, 1.0, 1.0);
    for step in 0u16..512 {
        let light = f32::from(step % 17) / 16.0;
        let _ = hl.update(true, 0.5, light);
    }
});
