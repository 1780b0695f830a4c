//! Left/right low-beam pair.
//!
//! The two lamps are always commanded together; there is no independent
//! left or right logic anywhere in the firmware.

use embedded_hal::digital::OutputPin;

use crate::drivers::lamp::Lamp;
use crate::fsm::context::BeamCommands;

pub struct LowBeams<L, R> {
    left: Lamp<L>,
    right: Lamp<R>,
}

impl<L: OutputPin, R: OutputPin> LowBeams<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self {
            left: Lamp::new(left, "left low beam"),
            right: Lamp::new(right, "right low beam"),
        }
    }

    pub fn apply(&mut self, beams: BeamCommands) {
        self.left.set(beams.left);
        self.right.set(beams.right);
    }

    pub fn off(&mut self) {
        self.apply(BeamCommands::both(false));
    }

    /// Levels the pins last accepted.
    pub fn state(&self) -> BeamCommands {
        BeamCommands {
            left: self.left.is_on(),
            right: self.right.is_on(),
        }
    }
}
